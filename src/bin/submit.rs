use anyhow::Result;
use clap::Parser;
use fraud_gateway::config::AppConfig;
use fraud_gateway::service::submission::SubmissionFlow;
use fraud_gateway::service::webhook_dispatcher::WebhookDispatcher;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "submit", about = "Submit a transaction payload for fraud analysis")]
struct Args {
    /// Gateway base address.
    #[arg(long, default_value = "http://localhost:3000")]
    gateway: String,

    /// Event id; generated when omitted.
    #[arg(long)]
    id: Option<String>,

    /// Inline JSON payload.
    #[arg(long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// Read the JSON payload from a file.
    #[arg(long)]
    payload_file: Option<std::path::PathBuf>,

    /// Forward the raw {id, payload} pair to the configured webhook
    /// instead of the analysis path.
    #[arg(long)]
    webhook: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = AppConfig::from_env();

    let payload_text = match (&args.payload, &args.payload_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => r#"{ "amount": 42, "user": { "email": "alice@example.com" } }"#.to_string(),
    };

    let id = args.id.clone().unwrap_or_else(|| {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("evt-{}", &suffix[..8])
    });

    let flow = SubmissionFlow {
        gateway_base: args.gateway.clone(),
        client: reqwest::Client::new(),
        dispatcher: WebhookDispatcher {
            webhook_url: cfg.webhook_url.clone(),
            client: reqwest::Client::new(),
        },
    };

    let outcome = if args.webhook {
        tracing::info!("forwarding event {} to {}", id, cfg.webhook_url);
        flow.send_webhook(&id, &payload_text).await
    } else {
        flow.analyze(&payload_text).await
    };

    println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
    Ok(())
}
