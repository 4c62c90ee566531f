use anyhow::{Context, Result};
use clap::Parser;
use file_gateway::{
    adapters::{inbound::http::router::{AppState, create_router}, outbound::storage::S3Config},
    app::{AppBuilder, AppConfig},
    ports::services::FileService,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "file-gateway")]
#[command(about = "HTTP gateway for uploading, listing, linking and deleting files in S3", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "9000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// S3 region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-2")]
    region: String,

    /// S3 bucket name
    #[arg(long, env = "S3_BUCKET_NAME", default_value = "innovatech-file-storage")]
    bucket: String,

    /// S3 access key
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Endpoint URL for S3-compatible stores (MinIO, LocalStack)
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint: Option<String>,

    /// Directory holding the landing page and other static assets
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage: S3Config {
                bucket: self.bucket.clone(),
                region: self.region.clone(),
                access_key: self.access_key.clone(),
                secret_key: self.secret_key.clone(),
                endpoint: self.endpoint.clone(),
            },
        }
    }

    fn init_logging(&self) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.log_level.to_lowercase()))
            .context("Invalid log level")?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

fn print_banner(cli: &Cli) {
    let rule = "=".repeat(60);
    info!("{}", rule);
    info!("FILE GATEWAY");
    info!("{}", rule);
    info!("Port: {}", cli.port);
    info!("S3 bucket: {}", cli.bucket);
    info!("Region: {}", cli.region);
    if let Some(endpoint) = &cli.endpoint {
        info!("Endpoint: {}", endpoint);
    }
    info!("{}", rule);
}

/// One best-effort probe of the bucket; failure only warns
async fn verify_backend(file_service: &dyn FileService, bucket: &str) {
    match file_service.verify_access().await {
        Ok(()) => info!("Verified access to bucket {}", bucket),
        Err(e) => {
            warn!("Could not access bucket {}: {}", bucket, e);
            warn!("Check that the bucket exists, the credentials are valid and they grant read/write access");
            warn!("The server will start, but storage operations may fail");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    print_banner(&cli);

    let app_services = AppBuilder::new(cli.to_app_config())
        .build()
        .context("Failed to build application")?;
    let file_service: Arc<dyn FileService> = Arc::new(app_services.file_service);

    verify_backend(file_service.as_ref(), &cli.bucket).await;

    let router = create_router(AppState::new(file_service), &cli.static_dir);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("Web interface: http://localhost:{}", cli.port);
    info!("API health: http://localhost:{}/api/health", cli.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "file-gateway",
            "--port",
            "8080",
            "--bucket",
            "test-bucket",
            "--region",
            "eu-west-1",
            "--access-key",
            "test-key",
            "--secret-key",
            "test-secret",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.bucket, "test-bucket");
        assert_eq!(cli.region, "eu-west-1");
        assert_eq!(cli.access_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_app_config_from_cli() {
        let cli = Cli::parse_from([
            "file-gateway",
            "--bucket",
            "test-bucket",
            "--region",
            "eu-west-1",
            "--endpoint",
            "http://localhost:9001",
        ]);

        let config = cli.to_app_config();
        assert_eq!(config.storage.bucket, "test-bucket");
        assert_eq!(config.storage.region, "eu-west-1");
        assert_eq!(config.storage.endpoint.as_deref(), Some("http://localhost:9001"));
    }
}
