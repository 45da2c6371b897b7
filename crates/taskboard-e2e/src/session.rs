// Session lifecycle: one engine process and one browser per session,
// isolated contexts handed out per test.
//
// No hidden singleton: the session is an owned value threaded through test
// setup and teardown, so the init/close contract is enforced by ownership.
// If a test panics before `close`, the engine's own Drop kills the server
// process, which takes its contexts with it.

use std::sync::Arc;
use std::time::Duration;

use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Playwright, Viewport,
};

use crate::error::Result;
use crate::page::BasePage;

/// Deployment the suite runs against when `TASKBOARD_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://avito-tech-internship-psi.vercel.app";

/// Per-session settings. Constructed once and shared read-only by every
/// page object of the session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Root of the application under test.
    pub base_url: String,
    pub headless: bool,
    /// Per-operation delay injected by the engine, for debugging runs.
    pub slow_mo: Option<Duration>,
    /// Context viewport, width by height.
    pub viewport: (u32, u32),
    /// Bound for navigations and page-load waits.
    pub navigation_timeout: Duration,
    /// Bound for element visibility waits, modal construction included.
    pub wait_timeout: Duration,
    /// Polling step inside bounded waits.
    pub poll_interval: Duration,
    /// Post-mutation delay for debounced inputs (see `BasePage::settle`).
    pub settle_delay: Duration,
}

impl SessionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        SessionConfig {
            base_url: base_url.into(),
            headless: true,
            slow_mo: None,
            viewport: (1920, 1080),
            navigation_timeout: Duration::from_secs(30),
            wait_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(100),
            settle_delay: Duration::from_millis(250),
        }
    }

    /// Configuration for the default deployment, honoring the
    /// `TASKBOARD_BASE_URL` override.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TASKBOARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        SessionConfig::new(base_url)
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn slow_mo(mut self, delay: Duration) -> Self {
        self.slow_mo = Some(delay);
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::new(DEFAULT_BASE_URL)
    }
}

/// One browser process for the whole session. Created once, closed exactly
/// once; spawns an isolated [`TestContext`] per test.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    config: Arc<SessionConfig>,
}

impl Session {
    pub async fn launch(config: SessionConfig) -> Result<Self> {
        let config = Arc::new(config);
        tracing::debug!(base_url = %config.base_url, "launching session");
        let playwright = Playwright::launch().await?;

        let mut options = LaunchOptions::new();
        options.headless = Some(config.headless);
        if let Some(delay) = config.slow_mo {
            options.slow_mo = Some(delay.as_millis() as f64);
        }
        let browser = playwright.chromium().launch_with_options(options).await?;

        Ok(Session {
            playwright,
            browser,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Creates an isolated browsing context with exactly one page.
    ///
    /// Contexts never share cookies or storage, so tests are independent
    /// by construction rather than by cooperation.
    pub async fn new_context(&self) -> Result<TestContext> {
        let (width, height) = self.config.viewport;
        let options = BrowserContextOptions::builder()
            .viewport(Viewport { width, height })
            .build();
        let context = self.browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;
        Ok(TestContext {
            context,
            base: BasePage::new(page, Arc::clone(&self.config)),
        })
    }

    /// Closes the browser and shuts the engine process down.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("closing session");
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

/// One test's isolated context and its single page.
///
/// Destroyed via [`close`](TestContext::close) after the test regardless
/// of outcome; the owning session's teardown is the crash backstop.
pub struct TestContext {
    context: BrowserContext,
    base: BasePage,
}

impl TestContext {
    /// The shared primitives bound to this context's page.
    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        Ok(())
    }
}
