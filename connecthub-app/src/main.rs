mod shell;

use std::env;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use connecthub_api::{ApiConfig, CacheService, GamificationApi};
use connecthub_commands::{Route, dispatch};
use connecthub_core::state::{Action, AppState, Session};
use connecthub_core::{Context, Data};

/// Terminal client for the ConnectHub gamification panel.
#[derive(Debug, Parser)]
#[command(name = "connecthub", version, disable_help_subcommand = true)]
struct Cli {
    /// Start the interactive shell even when a command is given
    #[arg(long)]
    shell: bool,

    #[command(subcommand)]
    route: Option<Route>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    let max_level = log_level();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(move |metadata| {
            let target = metadata.target();

            let within_level = *metadata.level() <= max_level;
            if !within_level {
                return false;
            }

            !(target.starts_with("hyper_util") || target.starts_with("reqwest::connect"))
        }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let cli = Cli::parse();

    let redis_enabled = env_bool("REDIS_ENABLED", false);
    let redis_key_prefix =
        env::var("REDIS_KEY_PREFIX").unwrap_or_else(|_| "connecthub:prod".to_string());

    let cache = if redis_enabled {
        match env::var("REDIS_URL") {
            Ok(redis_url) => match CacheService::redis(&redis_url, redis_key_prefix.clone()) {
                Ok(cache) => {
                    info!(key_prefix = %redis_key_prefix, "Redis cache enabled.");
                    cache
                }
                Err(err) => {
                    warn!(?err, key_prefix = %redis_key_prefix, "Failed to initialize Redis cache; continuing without cache.");
                    CacheService::disabled(redis_key_prefix.clone())
                }
            },
            Err(_) => {
                warn!(key_prefix = %redis_key_prefix, "REDIS_ENABLED=true but REDIS_URL is missing; continuing without cache.");
                CacheService::disabled(redis_key_prefix.clone())
            }
        }
    } else {
        info!("Redis cache disabled (set REDIS_ENABLED=true to enable).");
        CacheService::disabled(redis_key_prefix.clone())
    };

    if cache.is_redis_enabled() {
        if let Err(err) = cache.ping().await {
            warn!(
                ?err,
                "Redis cache ping failed; requests will fall back to the backend api."
            );
        } else {
            info!("Redis cache health check passed.");
        }
    }

    let config = ApiConfig::from_env();
    info!(
        base_url = %config.base_url,
        language = %config.language,
        authenticated = config.token.is_some(),
        timeout_seconds = config.timeout.as_secs(),
        "Gamification api configured."
    );
    let session = Session {
        user_id: config.user_id.clone(),
        language: config.language.clone(),
        authenticated: config.token.is_some(),
    };
    let data = Data {
        api: GamificationApi::with_cache(config, cache)?,
    };

    let mut state = AppState::default();
    state.reduce(Action::SignedIn(session));
    if !state.is_signed_in() {
        warn!("CONNECTHUB_API_TOKEN is not set; requests will be sent without credentials.");
    }

    match cli.route {
        Some(route) if !cli.shell => run_once(&data, &mut state, route).await,
        Some(route) => {
            run_once(&data, &mut state, route).await?;
            shell::run(&data, &mut state).await
        }
        None => shell::run(&data, &mut state).await,
    }
}

async fn run_once(data: &Data, state: &mut AppState, route: Route) -> anyhow::Result<()> {
    let mut ctx = Context::new(data, state);
    if let Err(e) = dispatch(&mut ctx, route).await {
        error!(?e, "command error");
        ctx.say("Something went wrong while running this command.");
    }

    for reply in ctx.into_replies() {
        println!("{reply}");
    }
    Ok(())
}

fn log_level() -> tracing::Level {
    match env::var("CONNECTHUB_LOG")
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
        .as_str()
    {
        "error" => tracing::Level::ERROR,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
