use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::join_all;
use lifehub_insight::{
    build_context, AIConfig, CoachConversation, GatewayOptions, InsightError, InsightErrorKind,
    InsightGateway, Language, ModelFactory, ProviderKind, WidgetSnapshot,
};
use lifehub_llm::{
    llm_test::{MockGenerateResult, MockLanguageModel},
    LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult, ModelResponse,
};
use serde_json::json;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FactoryCall {
    provider: ProviderKind,
    model_id: String,
    api_key: String,
}

/// Hands out one shared mock model and records every adapter it builds.
#[derive(Default)]
struct MockModelFactory {
    model: Arc<MockLanguageModel>,
    calls: Mutex<Vec<FactoryCall>>,
}

impl MockModelFactory {
    fn calls(&self) -> Vec<FactoryCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ModelFactory for MockModelFactory {
    fn create(
        &self,
        provider: ProviderKind,
        model_id: &str,
        api_key: &str,
    ) -> Arc<dyn LanguageModel> {
        self.calls.lock().unwrap().push(FactoryCall {
            provider,
            model_id: model_id.to_string(),
            api_key: api_key.to_string(),
        });
        self.model.clone()
    }
}

/// Answers with the provider, model and question it was built for.
struct EchoModel {
    provider: ProviderKind,
    model_id: String,
}

#[async_trait]
impl LanguageModel for EchoModel {
    fn provider(&self) -> &'static str {
        self.provider.as_str()
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(ModelResponse::with_text(format!(
            "{}|{}|{}",
            self.provider,
            self.model_id,
            input.user_text()
        )))
    }
}

struct EchoModelFactory;

impl ModelFactory for EchoModelFactory {
    fn create(&self, provider: ProviderKind, model_id: &str, _: &str) -> Arc<dyn LanguageModel> {
        Arc::new(EchoModel {
            provider,
            model_id: model_id.to_string(),
        })
    }
}

/// Never answers within any reasonable bound.
struct StalledModel;

#[async_trait]
impl LanguageModel for StalledModel {
    fn provider(&self) -> &'static str {
        "stalled"
    }

    fn model_id(&self) -> String {
        "stalled".to_string()
    }

    async fn generate(&self, _: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ModelResponse::with_text("too late"))
    }
}

struct StalledModelFactory;

impl ModelFactory for StalledModelFactory {
    fn create(&self, _: ProviderKind, _: &str, _: &str) -> Arc<dyn LanguageModel> {
        Arc::new(StalledModel)
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn options() -> GatewayOptions {
    GatewayOptions::default().today(today())
}

fn gateway(factory: &Arc<MockModelFactory>, options: GatewayOptions) -> InsightGateway {
    InsightGateway::with_factory(options, factory.clone())
}

fn widgets() -> Vec<WidgetSnapshot> {
    serde_json::from_value(json!([
        {
            "id": "w1",
            "type": "TODO",
            "title": "Errands",
            "content": { "todos": [
                { "id": "t1", "text": "Buy milk", "completed": true },
                { "id": "t2", "text": "Call mom", "completed": false }
            ] }
        },
        {
            "id": "w2",
            "type": "WELLNESS",
            "title": "Water",
            "content": { "wellness": { "history": [{ "date": "2025-03-14", "amount": 1500 }] } }
        }
    ]))
    .unwrap()
}

fn config(provider: &str, api_key: &str, language: Language) -> AIConfig {
    AIConfig {
        provider: provider.to_string(),
        api_key: api_key.to_string(),
        model: String::new(),
        language,
    }
}

#[tokio::test]
async fn missing_key_for_openai_never_builds_a_model() {
    let factory = Arc::new(MockModelFactory::default());
    let gateway = gateway(&factory, options().fallback_api_key("fallback-key"));

    let answer = gateway
        .get_insight(
            &widgets(),
            Some("How am I doing?"),
            Some(&config("openai", "", Language::EnUs)),
        )
        .await;

    assert_eq!(
        answer,
        "Please configure your API Key in the settings (gear icon) to use the AI features."
    );
    assert!(factory.calls().is_empty());
    assert!(factory.model.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn missing_key_message_follows_the_language() {
    let factory = Arc::new(MockModelFactory::default());
    let gateway = gateway(&factory, options());

    let answer = gateway
        .get_insight(&[], None, Some(&config("anthropic", "", Language::PtBr)))
        .await;

    assert_eq!(answer, Language::PtBr.terms().missing_api_key);

    let error = gateway
        .try_get_insight(&[], None, Some(&config("gemini", "", Language::EnUs)))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), InsightErrorKind::MissingCredential);
    assert_eq!(error.provider(), ProviderKind::Gemini);
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn gemini_uses_the_fallback_key_once() {
    let factory = Arc::new(MockModelFactory::default());
    factory
        .model
        .enqueue_generate(ModelResponse::with_text("  Stay hydrated!\n"));
    let gateway = gateway(&factory, options().fallback_api_key("fallback-key"));
    let widgets = widgets();

    let answer = gateway
        .get_insight(&widgets, None, Some(&config("gemini", "", Language::EnUs)))
        .await;

    assert_eq!(answer, "Stay hydrated!");
    assert_eq!(
        factory.calls(),
        vec![FactoryCall {
            provider: ProviderKind::Gemini,
            model_id: "gemini-2.5-flash".to_string(),
            api_key: "fallback-key".to_string(),
        }]
    );

    let inputs = factory.model.tracked_generate_inputs();
    assert_eq!(
        inputs,
        vec![LanguageModelInput {
            system_prompt: Language::EnUs.terms().system_prompt.to_string(),
            context: build_context(&widgets, Language::EnUs, today()),
            query: None,
            default_query: "Analyze my dashboard.".to_string(),
            max_tokens: None,
        }]
    );
}

#[tokio::test]
async fn no_config_means_gemini_in_english() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate(ModelResponse::with_text("ok"));
    let gateway = gateway(&factory, options().fallback_api_key("fallback-key"));

    let answer = gateway.get_insight(&widgets(), Some("Hi"), None).await;

    assert_eq!(answer, "ok");
    assert_eq!(factory.calls()[0].provider, ProviderKind::Gemini);
    let inputs = factory.model.tracked_generate_inputs();
    let input = &inputs[0];
    assert_eq!(input.query.as_deref(), Some("Hi"));
    assert!(input.context.starts_with("Here is the current state"));
}

#[tokio::test]
async fn user_key_and_model_win_over_defaults() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate(ModelResponse::with_text("ok"));
    let gateway = gateway(&factory, options().fallback_api_key("fallback-key"));

    let config = AIConfig {
        model: "gpt-4.1".to_string(),
        ..config("openai", "user-key", Language::PtBr)
    };
    gateway.get_insight(&widgets(), None, Some(&config)).await;

    assert_eq!(
        factory.calls(),
        vec![FactoryCall {
            provider: ProviderKind::OpenAI,
            model_id: "gpt-4.1".to_string(),
            api_key: "user-key".to_string(),
        }]
    );
    let inputs = factory.model.tracked_generate_inputs();
    let input = &inputs[0];
    assert_eq!(input.default_query, "Analise meu painel.");
    assert_eq!(input.system_prompt, Language::PtBr.terms().system_prompt);
}

#[tokio::test]
async fn unknown_provider_routes_to_gemini() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate(ModelResponse::with_text("ok"));
    let gateway = gateway(&factory, options());

    let answer = gateway
        .get_insight(&[], None, Some(&config("mistral", "some-key", Language::EnUs)))
        .await;

    assert_eq!(answer, "ok");
    assert_eq!(factory.calls()[0].provider, ProviderKind::Gemini);
    assert_eq!(factory.calls()[0].model_id, "gemini-2.5-flash");
}

#[tokio::test]
async fn empty_text_becomes_no_response() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate_results([
        MockGenerateResult::response(ModelResponse::default()),
        MockGenerateResult::response(ModelResponse::with_text("   ")),
    ]);
    let gateway = gateway(&factory, options());
    let config = config("anthropic", "key", Language::PtBr);

    for _ in 0..2 {
        let answer = gateway.get_insight(&[], None, Some(&config)).await;
        assert_eq!(answer, "No response.");
    }
}

#[tokio::test]
async fn provider_failure_names_the_provider() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate_results([
        MockGenerateResult::error(LanguageModelError::StatusCode(
            "openai",
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            "You exceeded your current quota".to_string(),
        )),
        MockGenerateResult::error(LanguageModelError::StatusCode(
            "anthropic",
            reqwest::StatusCode::UNAUTHORIZED,
            "invalid x-api-key".to_string(),
        )),
    ]);
    let gateway = gateway(&factory, options());

    let answer = gateway
        .get_insight(&[], None, Some(&config("openai", "key", Language::EnUs)))
        .await;
    assert_eq!(
        answer,
        "Error (openai): openai error: You exceeded your current quota (Status 429 Too Many Requests)"
    );

    let answer = gateway
        .get_insight(&[], None, Some(&config("anthropic", "key", Language::PtBr)))
        .await;
    assert!(answer.starts_with("Erro (anthropic): "), "{answer}");
    assert!(answer.contains("invalid x-api-key"), "{answer}");
}

#[tokio::test]
async fn typed_errors_keep_the_source() {
    let factory = Arc::new(MockModelFactory::default());
    factory
        .model
        .enqueue_generate(MockGenerateResult::error(LanguageModelError::Invariant(
            "gemini",
            "bad body".to_string(),
        )));
    let gateway = gateway(&factory, options());

    let error = gateway
        .try_get_insight(&[], None, Some(&config("gemini", "key", Language::EnUs)))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), InsightErrorKind::InvalidResponse);
    assert!(matches!(
        error,
        InsightError::Provider {
            provider: ProviderKind::Gemini,
            source: LanguageModelError::Invariant(..),
        }
    ));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let gateway = InsightGateway::with_factory(
        options().timeout(Duration::from_millis(50)),
        Arc::new(StalledModelFactory),
    );
    let config = config("openai", "key", Language::EnUs);

    let error = gateway
        .try_get_insight(&[], None, Some(&config))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), InsightErrorKind::Timeout);

    let answer = gateway.get_insight(&[], None, Some(&config)).await;
    assert!(answer.starts_with("Error (openai): "), "{answer}");
    assert!(answer.contains("timed out"), "{answer}");
}

#[tokio::test]
async fn concurrent_calls_map_to_their_own_inputs() {
    let gateway = InsightGateway::with_factory(options(), Arc::new(EchoModelFactory));
    let widgets = widgets();

    let requests: Vec<(AIConfig, String)> = (0..12)
        .map(|i| {
            let provider = ["gemini", "openai", "anthropic"][i % 3];
            let config = AIConfig {
                model: format!("model-{i}"),
                ..config(provider, &format!("key-{i}"), Language::EnUs)
            };
            (config, format!("question {i}"))
        })
        .collect();

    let answers = join_all(
        requests
            .iter()
            .map(|(config, query)| gateway.get_insight(&widgets, Some(query.as_str()), Some(config))),
    )
    .await;

    for ((config, query), answer) in requests.iter().zip(answers) {
        assert_eq!(
            answer,
            format!("{}|{}|{query}", config.provider, config.model)
        );
    }
}

#[tokio::test]
async fn coach_sends_only_the_current_message() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate_results([
        MockGenerateResult::response(ModelResponse::with_text("Drink water.")),
        MockGenerateResult::response(ModelResponse::with_text("Finish the errands.")),
    ]);
    let gateway = gateway(&factory, options());
    let config = config("gemini", "key", Language::EnUs);
    let mut coach = CoachConversation::new(Language::EnUs);

    let reply = coach
        .send(&gateway, &widgets(), "How is my hydration?", Some(&config))
        .await;
    assert_eq!(reply.as_deref(), Some("Drink water."));

    let reply = coach
        .send(&gateway, &widgets(), "And my tasks?", Some(&config))
        .await;
    assert_eq!(reply.as_deref(), Some("Finish the errands."));

    let texts: Vec<&str> = coach.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            Language::EnUs.terms().coach_greeting,
            "How is my hydration?",
            "Drink water.",
            "And my tasks?",
            "Finish the errands.",
        ]
    );

    let queries: Vec<Option<String>> = factory
        .model
        .tracked_generate_inputs()
        .into_iter()
        .map(|input| input.query)
        .collect();
    assert_eq!(
        queries,
        [
            Some("How is my hydration?".to_string()),
            Some("And my tasks?".to_string())
        ]
    );
}

#[tokio::test]
async fn coach_ignores_blank_input() {
    let factory = Arc::new(MockModelFactory::default());
    let gateway = gateway(&factory, options());
    let mut coach = CoachConversation::new(Language::PtBr);

    let reply = coach.send(&gateway, &[], "   \n", None).await;

    assert_eq!(reply, None);
    assert_eq!(coach.messages().len(), 1);
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn unknown_provider_without_a_key_skips_the_fallback() {
    let factory = Arc::new(MockModelFactory::default());
    let gateway = gateway(&factory, options().fallback_api_key("fallback-key"));

    let answer = gateway
        .get_insight(&widgets(), None, Some(&config("mistral", "", Language::EnUs)))
        .await;

    assert_eq!(answer, Language::EnUs.terms().missing_api_key);
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn unpinned_date_is_the_utc_date() {
    let factory = Arc::new(MockModelFactory::default());
    factory.model.enqueue_generate(ModelResponse::with_text("ok"));
    let gateway = gateway(&factory, GatewayOptions::default());

    let before = chrono::Utc::now().date_naive();
    gateway
        .get_insight(&[], None, Some(&config("gemini", "key", Language::EnUs)))
        .await;
    let after = chrono::Utc::now().date_naive();

    let inputs = factory.model.tracked_generate_inputs();
    let header = inputs[0].context.lines().next().unwrap_or_default().to_string();
    let expected = [before, after].map(|date| format!("(Today is {}):", date.format("%Y-%m-%d")));
    assert!(
        expected.iter().any(|suffix| header.ends_with(suffix.as_str())),
        "{header}"
    );
}
