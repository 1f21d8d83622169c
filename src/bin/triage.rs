use anyhow::Result;
use clap::{Parser, ValueEnum};
use fraud_gateway::domain::alert::{Alert, RowClass, SuggestedAction};
use fraud_gateway::service::csv_export::{export_filename, render_csv};
use fraud_gateway::service::triage::{FetchState, TriageFilter, TriageView};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "triage", about = "Alert triage console for the fraud gateway")]
struct Args {
    /// Gateway base address.
    #[arg(long, default_value = "http://localhost:3000")]
    gateway: String,

    /// Restrict displayed rows to one suggested action. Counts always
    /// cover the full loaded set.
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// How many alerts to request from the backend.
    #[arg(long)]
    limit: Option<u32>,

    /// Write the loaded (unfiltered) alerts as CSV; pass a path or let the
    /// timestamped default name apply.
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    export: Option<String>,

    /// Refresh every N seconds until interrupted.
    #[arg(long)]
    watch: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    All,
    Block,
    Review,
    Allow,
}

impl FilterArg {
    fn to_filter(self) -> TriageFilter {
        match self {
            FilterArg::All => TriageFilter::All,
            FilterArg::Block => TriageFilter::Action(SuggestedAction::Block),
            FilterArg::Review => TriageFilter::Action(SuggestedAction::Review),
            FilterArg::Allow => TriageFilter::Action(SuggestedAction::Allow),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();
    let mut view = TriageView::new(args.filter.to_filter());

    loop {
        view.apply_fetch(fetch_alerts(&client, &args.gateway, args.limit).await);
        render(&view);

        if let Some(target) = args.export.as_deref() {
            if matches!(view.state, FetchState::Ready(_)) {
                let path = if target.is_empty() {
                    export_filename(chrono::Utc::now())
                } else {
                    target.to_string()
                };
                std::fs::write(&path, render_csv(view.loaded()))?;
                println!("exported {} alerts to {}", view.loaded().len(), path);
            }
        }

        match args.watch {
            Some(secs) => tokio::time::sleep(std::time::Duration::from_secs(secs)).await,
            None => break,
        }
    }

    Ok(())
}

async fn fetch_alerts(
    client: &reqwest::Client,
    gateway: &str,
    limit: Option<u32>,
) -> Result<Vec<Alert>, String> {
    let mut request = client.get(format!("{}/alerts", gateway));
    if let Some(limit) = limit {
        request = request.query(&[("limit", limit)]);
    }

    let resp = request.send().await.map_err(|e| e.to_string())?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(format!("gateway returned status {}: {}", status.as_u16(), body));
    }

    resp.json::<Vec<Alert>>().await.map_err(|e| e.to_string())
}

fn render(view: &TriageView) {
    match &view.state {
        FetchState::Loading => println!("loading alerts..."),
        FetchState::Error(reason) => println!("failed to load alerts: {}", reason),
        FetchState::Ready(_) => {
            let counts = view.counts();
            println!(
                "BLOCK: {}  REVIEW: {}  ALLOW: {}",
                counts.block, counts.review, counts.allow
            );
            println!(
                "{:<24} {:>6}  {:<48} {:<12} {}",
                "TRANSACTION", "RISK", "REASON", "ACTION", "CREATED"
            );
            for alert in view.rows() {
                let style = row_style(alert.classification());
                println!(
                    "{}{:<24} {:>6}  {:<48} {:<12} {}\x1b[0m",
                    style,
                    truncate(alert.display_transaction_id(), 24),
                    alert.display_risk_score(),
                    truncate(alert.display_reason(), 48),
                    alert.display_action(),
                    alert.display_created_at(),
                );
            }
        }
    }
}

fn row_style(class: RowClass) -> &'static str {
    match class {
        RowClass::Danger => "\x1b[31m",
        RowClass::Warning => "\x1b[33m",
        RowClass::Safe => "\x1b[32m",
        RowClass::Neutral => "\x1b[0m",
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
