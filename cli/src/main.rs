//! CLI entrypoint for studio-consult
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use consult_application::{ConsultationBackend, ConsultationStore, InMemoryBackend};
use consult_domain::{ConsultationId, UserId};
use consult_infrastructure::{ConfigLoader, FileConfig, HttpConsultationBackend};
use consult_presentation::{Cli, Command, OutputFormat, PendingListView, StatusView};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting studio-consult");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };
    config.validate().context("invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let backend: Arc<dyn ConsultationBackend> = if cli.offline {
        info!("using in-memory backend (offline mode)");
        Arc::new(InMemoryBackend::new())
    } else {
        Arc::new(HttpConsultationBackend::new(
            &config.backend.base_url,
            Duration::from_secs(config.backend.timeout_seconds),
        )?)
    };
    let store = Arc::new(ConsultationStore::new(backend));

    match cli.command {
        Command::List => {
            store.refresh_pending().await?;
            match cli.output {
                OutputFormat::Text => {
                    let view = PendingListView::new(store);
                    print!("{}", view.render().await);
                }
                OutputFormat::Json => {
                    let pending = store.list_pending().await;
                    println!("{}", serde_json::to_string_pretty(&pending)?);
                }
            }
        }

        Command::Approve { id } => {
            store.refresh_pending().await?;
            let view = PendingListView::new(store);
            let result = view.approve(ConsultationId::new(id)).await;
            if let Some(notification) = view.notifications().current() {
                println!("{}", notification.render());
            }
            result?;
        }

        Command::Reject { id, reason } => {
            store.refresh_pending().await?;
            let view = PendingListView::new(store);
            let result = view.begin_reject(ConsultationId::new(id)).confirm(&reason).await;
            if let Some(notification) = view.notifications().current() {
                println!("{}", notification.render());
            }
            result?;
        }

        Command::Submit { date, user } => {
            let user_id = acting_user(user, &config)?;
            let created = store.submit(UserId::new(user_id), date).await?;
            match cli.output {
                OutputFormat::Text => println!(
                    "Consultation #{} submitted for {} ({})",
                    created.id(),
                    created.consultation_date(),
                    created.status().label()
                ),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&created)?),
            }
        }

        Command::Status { user } => {
            let user_id = acting_user(user, &config)?;
            store.refresh_pending().await?;
            match cli.output {
                OutputFormat::Text => {
                    let view = StatusView::new(store, UserId::new(user_id));
                    print!("{}", view.render().await);
                }
                OutputFormat::Json => {
                    let latest = store.latest_for_user(UserId::new(user_id)).await;
                    println!("{}", serde_json::to_string_pretty(&latest)?);
                }
            }
        }
    }

    Ok(())
}

/// Resolve the acting user id from the flag or the config file.
fn acting_user(flag: Option<i64>, config: &FileConfig) -> Result<i64> {
    match flag.or(config.viewer.user_id) {
        Some(id) => Ok(id),
        None => bail!("user id required: pass --user or set viewer.user_id in the config file"),
    }
}
