//! Runs the fixture application on a local port for manual poking.
//!
//! ```bash
//! cargo run -p taskboard-fixture
//! ```

use taskboard_fixture::FixtureServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_fixture=debug".into()),
        )
        .init();

    let server = FixtureServer::start().await;
    println!("fixture running at {}/issues (Ctrl-C to stop)", server.url());

    tokio::signal::ctrl_c().await.expect("failed to listen for Ctrl-C");
    server.shutdown();
}
