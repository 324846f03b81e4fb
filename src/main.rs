//! UCSB API - REST backend for course and campus-life records
//!
//! Serves CRUD endpoints for help requests, dining commons menu items and
//! reviews, student organizations, articles and recommendation requests.

use std::env;
use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use axum::{http::HeaderValue, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use config::LogFormat;
use ucsb_api::{api, config, db, middleware::auth::create_access_token, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for --help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    // Check for --version flag
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("UCSB API {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Check for --issue-token flag
    if let Some(pos) = args.iter().position(|arg| arg == "--issue-token") {
        return issue_token(&config, &args[pos + 1..]);
    }

    // Initialize logging based on configuration
    // The guard must be kept alive for the duration of the program
    // to ensure log messages are flushed to files
    let _log_guard = init_logging(&config);

    info!("UCSB API starting up");
    info!("Configuration loaded successfully");
    if config.auth.admin_emails.is_empty() {
        warn!("No admin emails configured; only tokens with the admin role can modify data");
    }

    // Ensure data directory exists
    ensure_data_directory(&config)?;

    // Initialize database connection pool
    info!("Initializing database connection");
    let db = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    // Create application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build the router
    let app = create_router(state, &config)?;

    // Start the server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    info!("Starting HTTP server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Resolve on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Print a signed access token for `<email> [--admin]`
fn issue_token(config: &AppConfig, args: &[String]) -> Result<()> {
    let Some(email) = args.first().filter(|a| !a.starts_with("--")) else {
        bail!("--issue-token requires an email address");
    };

    let roles = if args.iter().any(|arg| arg == "--admin") {
        vec!["admin".to_string()]
    } else {
        Vec::new()
    };

    let token = create_access_token(
        email,
        email,
        roles,
        &config.auth.jwt_secret,
        config.auth.token_expiry_hours,
    )
    .context("Failed to sign token")?;

    println!("{}", token);
    Ok(())
}

/// Initialize the logging/tracing infrastructure
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use config::LogTarget;
    use tracing_subscriber::{prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let log_config = &config.logging;

    match &log_config.target {
        LogTarget::Console => {
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_console_logging(subscriber, &log_config.format);
            None
        }
        LogTarget::File => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_file_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
        LogTarget::Both => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_both_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    log_config: &config::LoggingConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

/// Initialize console-only logging
fn init_console_logging<S>(subscriber: S, format: &LogFormat)
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false))
            .init(),
        LogFormat::Pretty => subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init(),
    }
}

/// Initialize file-only logging
fn init_file_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false).with_writer(writer))
            .init(),
        LogFormat::Pretty => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init(),
    }
}

/// Initialize both console and file logging
fn init_both_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true)) // Console
            .with(fmt::layer().json().with_target(true).with_writer(writer)) // File
            .init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(false)) // Console
            .with(fmt::layer().compact().with_target(false).with_writer(writer)) // File
            .init(),
        LogFormat::Pretty => subscriber
            .with(fmt::layer().with_target(true)) // Console
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            ) // File
            .init(),
    }
}

/// Directory holding the SQLite file named by a `sqlite://` URL, if any
fn sqlite_data_dir(url: &str) -> Option<&std::path::Path> {
    let path = url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or(path);
    if path.starts_with(':') {
        return None;
    }
    std::path::Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
}

/// Ensure the data directory exists
fn ensure_data_directory(config: &AppConfig) -> Result<()> {
    if let Some(parent) = sqlite_data_dir(&config.database.url) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
            info!("Created data directory: {:?}", parent);
        }
    }
    Ok(())
}

/// Create the application router with all routes and middleware
fn create_router(state: AppState, config: &AppConfig) -> Result<Router> {
    // Any origin unless the configuration lists allowed origins
    let origins = if config.server.cors_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let list = config
            .server
            .cors_origins
            .iter()
            .map(|o| HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o)))
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(list)
    };

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    // Configure tracing for HTTP requests
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Apply global middleware layers:
    // 1. Compression
    // 2. Request tracing
    // 3. CORS
    Ok(api::router(state)
        .layer(CompressionLayer::new())
        .layer(trace_layer)
        .layer(cors))
}

/// Print help message
fn print_help() {
    println!(
        r#"UCSB API {}

USAGE:
    ucsb-api [OPTIONS]

OPTIONS:
    -h, --help                      Print this help message
    -V, --version                   Print version information
    --issue-token <EMAIL> [--admin] Print a signed access token for EMAIL and
                                    exit. With --admin the token carries the
                                    administrator role.

ENVIRONMENT:
    UCSB_API_CONFIG     Path to configuration file (default: config.yaml)
    UCSB_API_HOST       Listen address
    UCSB_API_PORT       Listen port
    DATABASE_URL        SQLite connection URL
    JWT_SECRET          Token signing secret (at least 32 characters)
    ADMIN_EMAILS        Comma-separated administrator emails
    RUST_LOG            Log filter, e.g. "info,ucsb_api=debug"

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by UCSB_API_CONFIG environment variable
    2. ./config.yaml
    3. ./config/config.yaml
    4. /etc/ucsb-api/config.yaml"#,
        env!("CARGO_PKG_VERSION")
    );
}
