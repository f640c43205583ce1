/// Integration tests for catalog lookup behavior
use llm_catalog::catalog::{builtin, gemini, resolve_model, ModelResolver};

#[test]
fn test_every_known_model_resolves_to_itself() {
    for provider in builtin().providers() {
        for model in &provider.models {
            let resolved = builtin().resolve_model(&model.id, Some(&provider.id));
            assert_eq!(resolved, model);
        }
    }

    for model in gemini().all_models() {
        assert_eq!(gemini().resolve_model(&model.id, None), model);
    }
}

#[test]
fn test_unknown_model_falls_back_to_first_of_provider() {
    for provider in builtin().providers() {
        let resolved = builtin().resolve_model("no-such-model", Some(&provider.id));
        assert_eq!(resolved.id, provider.models[0].id);
    }

    assert_eq!(
        gemini().resolve_model("gemini-ultra", None).id,
        "gemini-2.0-flash"
    );
}

#[test]
fn test_unknown_provider_falls_back_to_groq() {
    let provider = builtin().resolve_provider(Some("anthropic"));
    assert_eq!(provider.id, "groq");

    let model = resolve_model("mistral-small-latest", Some("anthropic"));
    assert_eq!(model.id, "llama-3.3-70b-versatile");
}

#[test]
fn test_model_ids_are_scoped_to_provider() {
    // Found under mistral, not under groq
    assert_eq!(
        resolve_model("open-mistral-nemo", Some("mistral")).id,
        "open-mistral-nemo"
    );
    assert!(builtin()
        .find_model("open-mistral-nemo", Some("groq"))
        .is_none());
}

#[test]
fn test_provider_metadata() {
    let openrouter = builtin().find_provider("openrouter").unwrap();
    assert_eq!(
        openrouter.base_url,
        "https://openrouter.ai/api/v1/chat/completions"
    );
    assert_eq!(openrouter.key_placeholder, "sk-or-...");
    assert_eq!(
        openrouter.authorization_header("sk-or-abc").1,
        "Bearer sk-or-abc"
    );
}

#[test]
fn test_gemini_model_url() {
    assert_eq!(
        gemini().model_url("gemini-1.5-flash-latest"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest"
    );
}

#[test]
fn test_catalogs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    assert_send_sync(builtin());
    assert_send_sync(gemini());

    let handle = std::thread::spawn(|| builtin().model_count());
    assert_eq!(handle.join().unwrap(), 11);
}
