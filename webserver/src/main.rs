//! PitchBridge backend entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use shared::{ComponentId, component_info, logging};

use webserver::{MemoryDocumentStore, WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "PitchBridge REST backend")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// JSON seed file (users, startups, investors, notifications, matches, sessions)
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ComponentId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::ServerStartup(format!("Invalid address: {e}")))?;

    let store = match &args.seed {
        Some(path) => {
            component_info!(ComponentId::current(), "🌱 Loading seed from {}", path.display());
            MemoryDocumentStore::load_seed_file(path).await?
        }
        None => MemoryDocumentStore::new(),
    };

    logging::log_startup(ComponentId::current(), &format!("REST backend on {address}"));

    let webserver = WebServer::new(address, store);
    if let Err(e) = webserver.run().await {
        logging::log_error(ComponentId::current(), "Server", &e);
        return Err(e);
    }

    logging::log_success(ComponentId::current(), "WebServer stopped gracefully");
    Ok(())
}
