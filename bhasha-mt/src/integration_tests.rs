//! End-to-end scenarios across the resolver, the pack manager and the
//! fallback chain
//!
//! # Running
//!
//! ```bash
//! cargo test -p bhasha-mt integration_tests
//! # with a live endpoint
//! export BHASHA_TRANSLATE_URL=https://translate.example.org/api
//! cargo test -p bhasha-mt integration_tests -- --ignored --nocapture
//! ```

#[cfg(test)]
mod tests {
    use crate::*;
    use bhasha::{Resolver, Route};
    use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};
    use std::ops::ControlFlow;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    fn offline_chain(store: Arc<dyn KeyValueStore>) -> FallbackTranslator {
        let packs = PackManager::new(store, PackManagerConfig::instant());
        FallbackTranslator::new(None, Arc::new(packs), Arc::new(Resolver::builtin()))
    }

    // ============================================================================
    // Dictionary resolution
    // ============================================================================

    #[tokio::test]
    async fn test_exact_word() {
        let chain = offline_chain(Arc::new(MemoryStore::new()));
        let outcome = chain.translate("hello", "en", "hi", true).await;
        assert_eq!(outcome.text, "नमस्ते");
        assert_eq!(outcome.source, TranslationSource::Dictionary);
    }

    #[tokio::test]
    async fn test_pattern_rule_keeps_captured_name() {
        let chain = offline_chain(Arc::new(MemoryStore::new()));
        let outcome = chain.translate("my name is Sam", "en", "ne", true).await;
        assert_eq!(outcome.text, "मेरो नाम Sam हो");
    }

    #[tokio::test]
    async fn test_two_sentence_paragraph() {
        let chain = offline_chain(Arc::new(MemoryStore::new()));
        let outcome = chain.translate("नमस्ते। धन्यवाद।", "ne", "en", true).await;
        assert_eq!(outcome.text, "hello thank you");
    }

    #[tokio::test]
    async fn test_pivot_through_english() {
        let resolver = Resolver::builtin();
        assert!(!resolver.is_pair_supported("fr", "de"));

        let resolution = resolver.resolve_detailed("bonjour", "fr", "de");
        assert_eq!(resolution.text, "hallo");
        assert_eq!(resolution.route, Route::Pivot);

        let chain = offline_chain(Arc::new(MemoryStore::new()));
        assert_eq!(chain.translate("bonjour", "fr", "de", true).await.text, "hallo");
    }

    #[tokio::test]
    async fn test_unsupported_pair_is_marked_not_raised() {
        let chain = offline_chain(Arc::new(MemoryStore::new()));
        assert!(!chain.resolver().is_pair_supported("en", "xx"));

        let outcome = chain.translate("hello", "en", "xx", true).await;
        assert!(outcome.text.contains("en-xx"));
        assert!(outcome.text.ends_with("hello"));
        assert_eq!(outcome.source, TranslationSource::Dictionary);
    }

    // ============================================================================
    // Offline pack lifecycle
    // ============================================================================

    #[tokio::test]
    async fn test_pack_unusable_until_install_completes() {
        let packs = Arc::new(PackManager::new(
            Arc::new(MemoryStore::new()),
            PackManagerConfig::instant(),
        ));

        let seen = Mutex::new(Vec::new());
        let observer = packs.clone();
        let installed = packs
            .install_pack("hi", |progress| {
                let attempt = observer.translate("hello", "en", "hi");
                seen.lock().unwrap().push((progress, attempt));
                ControlFlow::Continue(())
            })
            .await
            .unwrap();
        assert!(installed);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.last().map(|(progress, _)| *progress), Some(100));
        for (progress, attempt) in &seen {
            assert_eq!(
                attempt,
                &Err(PackError::PackNotInstalled("hi".to_string())),
                "pack usable at {}%",
                progress
            );
        }

        let result = packs.translate("hello", "en", "hi").unwrap();
        assert_eq!(result.text, "नमस्ते");
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_abandoned_install_leaves_no_state() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let packs = PackManager::new(
            store.clone(),
            PackManagerConfig {
                download_step_delay: std::time::Duration::from_millis(50),
                ..PackManagerConfig::default()
            },
        );

        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(120),
            packs.install_pack("ne", |_| ControlFlow::Continue(())),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(!packs.is_pack_installed("ne"));
        assert!(store.get("bhasha.offline.pack.ne").is_none());
    }

    #[tokio::test]
    async fn test_installed_packs_persist_in_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bhasha-store.json");

        {
            let chain = offline_chain(Arc::new(JsonFileStore::open(&path)));
            chain
                .packs()
                .install_pack("fr", |_| ControlFlow::Continue(()))
                .await
                .unwrap();
            let outcome = chain.translate("Good night, friend.", "en", "fr", true).await;
            assert_eq!(outcome.source, TranslationSource::OfflinePack);
            assert_eq!(outcome.text, "bonne nuit, ami.");
        }

        let chain = offline_chain(Arc::new(JsonFileStore::open(&path)));
        assert!(chain.packs().is_pack_installed("fr"));
        let cached = chain
            .packs()
            .translate("Good night, friend.", "en", "fr")
            .unwrap();
        assert!(cached.from_cache);
        assert_eq!(cached.confidence, 0.8);
    }

    #[tokio::test]
    async fn test_pack_pivot_between_installed_languages() {
        let chain = offline_chain(Arc::new(MemoryStore::new()));
        for language in ["hi", "ne"] {
            chain
                .packs()
                .install_pack(language, |_| ControlFlow::Continue(()))
                .await
                .unwrap();
        }

        let outcome = chain.translate("आप कैसे हैं?", "hi", "ne", true).await;
        assert_eq!(outcome.text, "तपाईंलाई कस्तो छ?");
        assert_eq!(outcome.confidence, Some(0.9));
    }

    // ============================================================================
    // Remote tier
    // ============================================================================

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Serve `POST /translate` on a free local port, upper-casing each text
    async fn spawn_endpoint(status: StatusCode) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let app = Router::new().route(
            "/translate",
            post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                let translation = body["text"].as_str().unwrap_or_default().to_uppercase();
                recorder.lock().unwrap().push((auth, body));
                if status.is_success() {
                    (status, Json(json!({ "translation": translation })))
                } else {
                    (status, Json(json!({ "error": "engine offline" })))
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/translate", addr), seen)
    }

    #[tokio::test]
    async fn test_remote_sends_one_request_per_chunk() {
        let (endpoint, seen) = spawn_endpoint(StatusCode::OK).await;
        let remote = RemoteTranslator::new(endpoint, Some("secret".to_string()))
            .unwrap()
            .with_max_chunk_chars(20);

        let text = "One two. Three four. Five six.\n\nSecond paragraph.";
        let translation = remote.translate(text, "en-US", "hi").await.unwrap();
        assert_eq!(translation, "ONE TWO. THREE FOUR. FIVE SIX.\n\nSECOND PARAGRAPH.");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0].1,
            json!({"text": "One two. Three four.", "sourceLang": "en", "targetLang": "hi"})
        );
        assert_eq!(seen[1].1["text"], "Five six.");
        assert_eq!(seen[2].1["text"], "Second paragraph.");
        assert!(
            seen.iter()
                .all(|(auth, _)| auth.as_deref() == Some("Bearer secret"))
        );
    }

    #[tokio::test]
    async fn test_remote_without_api_key_sends_no_auth_header() {
        let (endpoint, seen) = spawn_endpoint(StatusCode::OK).await;
        let remote = RemoteTranslator::new(endpoint, None).unwrap();
        assert_eq!(remote.translate("hello", "en", "fr").await.unwrap(), "HELLO");
        assert_eq!(seen.lock().unwrap()[0].0, None);
    }

    #[tokio::test]
    async fn test_remote_error_statuses() {
        let (endpoint, _) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
        let remote = RemoteTranslator::new(endpoint, None).unwrap();
        match remote.translate("hello", "en", "hi").await {
            Err(MtError::TranslationError(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected TranslationError, got {:?}", other),
        }

        let (endpoint, _) = spawn_endpoint(StatusCode::UNAUTHORIZED).await;
        let remote = RemoteTranslator::new(endpoint, None).unwrap();
        assert!(matches!(
            remote.translate("hello", "en", "hi").await,
            Err(MtError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_server_error_falls_back_locally() {
        let (endpoint, seen) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
        let remote = RemoteTranslator::new(endpoint, None).unwrap();
        let packs = PackManager::new(Arc::new(MemoryStore::new()), PackManagerConfig::instant());
        let chain = FallbackTranslator::new(
            Some(Arc::new(remote)),
            Arc::new(packs),
            Arc::new(Resolver::builtin()),
        );

        let outcome = chain.translate("hello", "en", "hi", false).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(outcome.text, "नमस्ते");
        assert_eq!(outcome.source, TranslationSource::Dictionary);
    }

    #[tokio::test]
    async fn test_remote_success_wins_over_local_tiers() {
        let (endpoint, _) = spawn_endpoint(StatusCode::OK).await;
        let remote = RemoteTranslator::new(endpoint, None).unwrap();
        let packs = PackManager::new(Arc::new(MemoryStore::new()), PackManagerConfig::instant());
        let chain = FallbackTranslator::new(
            Some(Arc::new(remote)),
            Arc::new(packs),
            Arc::new(Resolver::builtin()),
        );

        let outcome = chain.translate("hello", "en", "hi", false).await;
        assert_eq!(outcome.text, "HELLO");
        assert_eq!(outcome.source, TranslationSource::Remote);

        let offline = chain.translate("hello", "en", "hi", true).await;
        assert_eq!(offline.source, TranslationSource::Dictionary);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_locally() {
        let remote = RemoteTranslator::new("http://127.0.0.1:9/translate".to_string(), None).unwrap();
        let packs = PackManager::new(Arc::new(MemoryStore::new()), PackManagerConfig::instant());
        let chain = FallbackTranslator::new(
            Some(Arc::new(remote)),
            Arc::new(packs),
            Arc::new(Resolver::builtin()),
        );

        let outcome = chain.translate("hello", "en", "hi", false).await;
        assert_eq!(outcome.text, "नमस्ते");
        assert_eq!(outcome.source, TranslationSource::Dictionary);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_remote_endpoint() {
        if std::env::var(URL_ENV).is_err() {
            eprintln!("⚠️  Skipping: {} not set", URL_ENV);
            return;
        }
        let remote = RemoteTranslator::from_env().unwrap();
        let packs = PackManager::new(Arc::new(MemoryStore::new()), PackManagerConfig::instant());
        let chain = FallbackTranslator::new(
            Some(Arc::new(remote)),
            Arc::new(packs),
            Arc::new(Resolver::builtin()),
        );

        let outcome = chain.translate("Good morning", "en", "hi", false).await;
        println!("{:?}", outcome);
        assert_eq!(outcome.source, TranslationSource::Remote);
        assert!(!outcome.text.is_empty());
    }
}
