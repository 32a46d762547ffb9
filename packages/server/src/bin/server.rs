//! In-memory room presence server.
//!
//! Clients check users into rooms, refresh their presence TTL and list rooms with
//! their active users.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin presence-server
//! cargo run --bin presence-server -- --host 0.0.0.0 --port 3000 --default-ttl-secs 60
//! ```

use std::sync::Arc;

use clap::Parser;
use presence_server::{
    config::ServerConfig,
    domain::{DEFAULT_TTL_SECS, PresenceRegistry},
    infrastructure::repository::InMemoryPresenceRepository,
    ui::Server,
    usecase::{CheckInUseCase, ListRoomsUseCase, UpdatePresenceUseCase},
};
use presence_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "presence-server")]
#[command(about = "In-memory room presence server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Presence TTL in seconds for check-ins and refreshes without `expires_in`
    #[arg(long, default_value_t = DEFAULT_TTL_SECS)]
    default_ttl_secs: i64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = match ServerConfig::new(args.host, args.port, args.default_ttl_secs) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!("Default presence TTL: {}s", config.default_ttl.as_secs());

    // Initialize dependencies in order:
    // 1. Registry + Repository
    // 2. UseCases
    // 3. Server

    // 1. Create Repository (in-memory presence store)
    let registry: Arc<PresenceRegistry> =
        Arc::new(PresenceRegistry::new(Arc::new(SystemClock)));
    let repository = Arc::new(InMemoryPresenceRepository::new(registry));

    // 2. Create UseCases
    let ttl_policy = config.ttl_policy();
    let check_in_usecase = Arc::new(CheckInUseCase::new(repository.clone(), ttl_policy));
    let update_presence_usecase =
        Arc::new(UpdatePresenceUseCase::new(repository.clone(), ttl_policy));
    let list_rooms_usecase = Arc::new(ListRoomsUseCase::new(repository));

    // 3. Create and run the server
    let server = Server::new(check_in_usecase, update_presence_usecase, list_rooms_usecase);
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
