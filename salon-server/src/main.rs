use salon_server::{setup_environment, Config, Server, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, work dir, logging)
    setup_environment()?;

    tracing::info!("Bristle Salon Server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. Server state (database, Stripe client)
    let state = ServerState::initialize(&config)?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
