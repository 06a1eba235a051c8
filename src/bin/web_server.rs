use eppstein_ksp::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port from the first argument
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    log::info!(
        "starting k-th path server: port {}, cors {}, limits {} nodes / {} edges",
        config.port,
        config.enable_cors,
        config.max_nodes,
        config.max_edges
    );

    start_server(config).await?;

    Ok(())
}
