use booking_server::{Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, logging)
    let _ = dotenvy::dotenv();
    init_logger();

    print_banner();

    // 2. Load configuration
    let config = Config::from_env();
    tracing::info!("Starting booking-server (env: {})", config.environment);

    // 3. Run the HTTP server (initializes state and the database)
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
