// Shared scenario harness.
//
// Starts the seeded fixture application and launches a session against it,
// or targets a live deployment when TASKBOARD_BASE_URL is set (no fixture
// started in that case — the deployment brings its own data).

// Note: functions appear "unused" because each test binary compiles
// separately, but they ARE used across multiple test files.
#![allow(dead_code)]

use std::time::Duration;

use taskboard_e2e::{Session, SessionConfig};
use taskboard_fixture::FixtureServer;

pub struct Harness {
    pub session: Session,
    server: Option<FixtureServer>,
}

/// Launches the browser session and, unless an external deployment is
/// configured, the fixture application.
pub async fn start() -> Harness {
    init_tracing();

    if std::env::var("TASKBOARD_BASE_URL").is_ok() {
        let session = Session::launch(SessionConfig::from_env())
            .await
            .expect("failed to launch session");
        return Harness {
            session,
            server: None,
        };
    }

    let server = FixtureServer::start().await;
    // The fixture filters synchronously, so the debounce allowance can be
    // close to zero.
    let config = SessionConfig::new(server.url()).settle_delay(Duration::from_millis(50));
    let session = Session::launch(config)
        .await
        .expect("failed to launch session");
    Harness {
        session,
        server: Some(server),
    }
}

impl Harness {
    /// Tears the session down and stops the fixture.
    pub async fn finish(self) {
        self.session.close().await.expect("failed to close session");
        if let Some(server) = self.server {
            server.shutdown();
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
