use dotenvy::dotenv;
use lifehub_insight::{AIConfig, InsightGateway, Language, WidgetSnapshot};
use std::{env, error::Error, fs};
use tracing_subscriber::EnvFilter;

// Usage: cargo run --example dashboard-insight -- widgets.json "How is my week going?"
//
// Provider settings come from LIFEHUB_PROVIDER, LIFEHUB_API_KEY, LIFEHUB_MODEL
// and LIFEHUB_LANGUAGE. Gemini also accepts the deployment fallback key.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let widgets: Vec<WidgetSnapshot> = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    let query = args.next();

    let language = match env::var("LIFEHUB_LANGUAGE").as_deref() {
        Ok("pt-br") => Language::PtBr,
        _ => Language::EnUs,
    };
    let config = AIConfig {
        provider: env::var("LIFEHUB_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        api_key: env::var("LIFEHUB_API_KEY").unwrap_or_default(),
        model: env::var("LIFEHUB_MODEL").unwrap_or_default(),
        language,
    };

    let gateway = InsightGateway::from_env();
    let answer = gateway
        .get_insight(&widgets, query.as_deref(), Some(&config))
        .await;

    println!("{answer}");

    Ok(())
}
