use serde::{Deserialize, Serialize};

use crate::catalog::{Defaults, UiLimits};

/// Sampling parameters chosen for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_prompt: String,
}

impl GenerationParams {
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            system_prompt: defaults.system_prompt.clone(),
        }
    }

    /// Snap values onto the slider grid described by `ui`
    ///
    /// Temperature is clamped and rounded to the nearest step. Max tokens is
    /// clamped and rounded down to a step above the minimum. A zero step
    /// only clamps. A range that is inverted or not finite leaves the value
    /// unchanged.
    pub fn clamped(&self, ui: &UiLimits) -> Self {
        Self {
            temperature: snap_temperature(self.temperature, ui),
            max_tokens: snap_max_tokens(self.max_tokens, ui),
            system_prompt: self.system_prompt.clone(),
        }
    }
}

fn snap_temperature(value: f64, ui: &UiLimits) -> f64 {
    if !(ui.temperature_min.is_finite() && ui.temperature_max.is_finite())
        || ui.temperature_min > ui.temperature_max
    {
        return value;
    }

    let value = if value.is_nan() { ui.temperature_min } else { value };
    let clamped = value.clamp(ui.temperature_min, ui.temperature_max);
    if !(ui.temperature_step > 0.0 && ui.temperature_step.is_finite()) {
        return clamped;
    }

    let steps = ((clamped - ui.temperature_min) / ui.temperature_step).round();
    let snapped = ui.temperature_min + steps * ui.temperature_step;
    // Drop float noise such as 0.7000000000000001
    let snapped = (snapped * 1e9).round() / 1e9;
    snapped.clamp(ui.temperature_min, ui.temperature_max)
}

fn snap_max_tokens(value: u32, ui: &UiLimits) -> u32 {
    if ui.max_tokens_min > ui.max_tokens_max {
        return value;
    }

    let clamped = value.clamp(ui.max_tokens_min, ui.max_tokens_max);
    if ui.max_tokens_step == 0 {
        return clamped;
    }

    let steps = (clamped - ui.max_tokens_min) / ui.max_tokens_step;
    ui.max_tokens_min + steps * ui.max_tokens_step
}
