use std::sync::Arc;

use anyhow::Context;
use chatter::server::serve;
use chatter_config::AppConfig;
use chatter_db::{PgCredentialStore, init_db_pool, run_migrations};
use chatter_observability::{
    init_basic_console_logging, init_metrics, init_tracing, is_observability_enabled,
    shutdown_tracer,
};
use clap::Parser;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "chatter")]
#[command(about = "Chatter API server", long_about = None)]
struct Args {
    /// Host to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Apply pending database migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Args::parse();

    if is_observability_enabled() {
        init_tracing();
    } else {
        init_basic_console_logging();
    }

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let pool = init_db_pool(&config.database).await?;
    if args.migrate {
        run_migrations(&pool).await?;
    }

    let store = Arc::new(PgCredentialStore::new(pool));
    let metrics = init_metrics();

    let result = serve(config, store, metrics).await;

    shutdown_tracer().await;
    result
}
