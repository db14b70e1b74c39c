use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use misinfo_checker::backend::BackendClient;
use misinfo_checker::checker::{
    analysis_view, education_view, evidence_view, CheckerController, Phase,
};
use misinfo_checker::config::Config;
use misinfo_checker::gateway::{self, GatewayState};

#[derive(Parser)]
#[command(name = "misinfo-checker", version, about = "Misinformation checker gateway and CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the proxy gateway in front of the analysis backend
    Serve {
        /// Listen address (overrides GATEWAY_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Backend base URL (overrides BACKEND_URL)
        #[arg(long)]
        backend_url: Option<String>,
    },
    /// Submit one piece of text through a running gateway and print the result
    Check {
        /// Text to analyze
        text: String,
        /// Gateway base URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        gateway_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    match cli.command {
        Some(Commands::Check { text, gateway_url }) => check(&config, &text, &gateway_url).await,
        Some(Commands::Serve { bind, backend_url }) => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(backend_url) = backend_url {
                config.backend.base_url = backend_url;
            }
            serve(config).await
        }
        None => serve(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Misinformation checker gateway starting..."
    );

    let backend = match BackendClient::new(&config.backend, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %config.backend.base_url, "Backend client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize backend client");
            return Err(e.into());
        }
    };

    let state = Arc::new(GatewayState::new(backend));
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;

    info!(bind = %config.server.bind, "Gateway ready, accepting requests");

    axum::serve(listener, gateway::router(state)).await?;

    info!("Gateway shutdown complete");
    Ok(())
}

async fn check(config: &Config, text: &str, gateway_url: &str) -> anyhow::Result<()> {
    let controller = CheckerController::new(
        gateway_url,
        config.backend.demo_api_key.clone(),
        config.request.timeout_ms,
    )?;

    controller.load_tips().await;
    controller.submit(text).await;

    let snapshot = controller.snapshot().await;
    match snapshot.phase {
        Phase::Success => {
            let result = snapshot
                .result
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("success state without a result"))?;

            let analysis = analysis_view(result);
            println!("Claim: {}", analysis.claim);
            println!(
                "Credibility: {}/100 ({})",
                analysis.credibility_score,
                analysis.score_category.as_str()
            );
            println!(
                "Verdict: {} ({})",
                analysis.verdict_label.unwrap_or("-"),
                analysis.verdict.as_str()
            );
            if let Some(confidence) = analysis.confidence {
                println!("Confidence: {}%", confidence);
            }
            if let Some(language) = analysis.language {
                println!(
                    "Language: {} emotional, {} certainty, {} urgency, {} conspiracy",
                    language.emotional_language,
                    language.certainty_indicators,
                    language.urgency_indicators,
                    language.conspiracy_indicators
                );
                for flag in &language.red_flags {
                    println!("  red flag: {}", flag);
                }
            }
            if let Some(source) = analysis.source {
                println!(
                    "Source reputation: {}/100 ({})",
                    source.reputation_score,
                    source.reputation_category.as_str()
                );
            }

            let evidence = evidence_view(result);
            if let Some(summary) = evidence.summary {
                println!(
                    "Evidence: {} supporting, {} contradicting, {} neutral",
                    summary.supporting, summary.contradicting, summary.neutral
                );
            }
            for item in evidence.top_evidence {
                println!("  [{:.2}] {}", item.relevance_score, item.content);
            }

            let education = education_view(result, snapshot.tips.as_ref());
            if let Some(content) = education.content {
                println!("Why this matters: {}", content.why_this_matters);
            }
        }
        Phase::Failed => {
            let message = snapshot.error.as_deref().unwrap_or("Unknown error");
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        Phase::Idle | Phase::Submitting => {
            eprintln!("Error: submission did not complete");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        misinfo_checker::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        misinfo_checker::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
