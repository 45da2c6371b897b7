// Shared page primitives.
//
// `BasePage` is a view over one live engine page plus the session
// configuration; every screen object composes it. It owns no state beyond
// the handle, so it is cheap to clone and a page object never outlives or
// owns the page it wraps.
//
// Two contracts run through everything here:
// - lenient reads (`is_visible`, `count`, `text`, …) treat an absent
//   element set as empty/zero/false and never fail on absence;
// - strict actions (`click`, `fill`, `select`, …) require a present,
//   visible and enabled target and surface Interaction/ElementNotFound
//   conditions otherwise.
//
// Every action lands on the first match of the chosen alternative: the
// engine's locators are strict, and the permissive tail of a fallback
// group routinely matches more than one node.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use playwright_rs::{GotoOptions, Locator, Page, WaitUntil};

use crate::error::{Error, Result};
use crate::selector::{self, ElementProbe, SelectorGroup};
use crate::session::SessionConfig;

#[derive(Clone)]
pub struct BasePage {
    page: Page,
    config: Arc<SessionConfig>,
}

impl BasePage {
    pub(crate) fn new(page: Page, config: Arc<SessionConfig>) -> Self {
        BasePage { page, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current page URL. Non-suspending.
    pub fn current_url(&self) -> String {
        self.page.url()
    }

    /// Navigates to a route under the configured base URL and waits for
    /// the load event, bounded by the navigation timeout.
    pub async fn goto(&self, path: &str) -> Result<()> {
        let url = url::Url::parse(&self.config.base_url)?.join(path)?;
        tracing::debug!(%url, "navigating");
        let options = GotoOptions::new()
            .timeout(self.config.navigation_timeout)
            .wait_until(WaitUntil::Load);
        self.page.goto(url.as_str(), Some(options)).await?;
        Ok(())
    }

    /// Suspends until the document reports a complete load state.
    pub async fn wait_for_page_load(&self) -> Result<()> {
        let start = Instant::now();
        loop {
            let state = self.page.evaluate_value("document.readyState").await?;
            if state.contains("complete") {
                return Ok(());
            }
            if start.elapsed() >= self.config.navigation_timeout {
                return Err(Error::timeout("page load", self.config.navigation_timeout));
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Suspends until some alternative of the group is visible.
    pub async fn wait_for_visible(&self, group: &SelectorGroup) -> Result<()> {
        self.wait_for_visibility(group, true).await
    }

    /// Suspends until no alternative of the group is visible.
    pub async fn wait_for_hidden(&self, group: &SelectorGroup) -> Result<()> {
        self.wait_for_visibility(group, false).await
    }

    async fn wait_for_visibility(&self, group: &SelectorGroup, target: bool) -> Result<()> {
        let start = Instant::now();
        loop {
            if self.is_visible(group).await? == target {
                return Ok(());
            }
            if start.elapsed() >= self.config.wait_timeout {
                let state = if target { "visible" } else { "hidden" };
                return Err(Error::timeout(
                    format!("'{}' to become {state}", group.name()),
                    self.config.wait_timeout,
                ));
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    // ------------------------------------------------------------------
    // Lenient reads: absence is a valid negative, never an error.
    // ------------------------------------------------------------------

    pub async fn is_visible(&self, group: &SelectorGroup) -> Result<bool> {
        match selector::try_resolve(self, group).await? {
            Some(sel) => ElementProbe::is_visible(self, &sel).await,
            None => Ok(false),
        }
    }

    pub async fn count(&self, group: &SelectorGroup) -> Result<usize> {
        match selector::try_resolve(self, group).await? {
            Some(sel) => ElementProbe::count(self, &sel).await,
            None => Ok(0),
        }
    }

    /// Trimmed text content of the first match, or empty when absent.
    pub async fn text(&self, group: &SelectorGroup) -> Result<String> {
        match selector::try_resolve(self, group).await? {
            Some(sel) => {
                let content = self.first(&sel).await.text_content().await?;
                Ok(content.unwrap_or_default().trim().to_string())
            }
            None => Ok(String::new()),
        }
    }

    /// Trimmed text content of every match, or empty when absent.
    pub async fn texts(&self, group: &SelectorGroup) -> Result<Vec<String>> {
        let Some(sel) = selector::try_resolve(self, group).await? else {
            return Ok(Vec::new());
        };
        let locator = self.page.locator(&sel).await;
        let total = locator.count().await?;
        let mut collected = Vec::with_capacity(total);
        for index in 0..total {
            let content = locator.nth(index as i32).text_content().await?;
            collected.push(content.unwrap_or_default().trim().to_string());
        }
        Ok(collected)
    }

    /// Attribute of the first match, or `None` when the group is absent.
    pub async fn attribute(&self, group: &SelectorGroup, name: &str) -> Result<Option<String>> {
        match selector::try_resolve(self, group).await? {
            Some(sel) => Ok(self.first(&sel).await.get_attribute(name).await?),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Strict operations: the target must exist (reads) and be actionable
    // (mutations).
    // ------------------------------------------------------------------

    pub async fn click(&self, group: &SelectorGroup) -> Result<()> {
        let sel = selector::resolve_actionable(self, group).await?;
        self.first(&sel).await.click(None).await?;
        Ok(())
    }

    pub async fn fill(&self, group: &SelectorGroup, text: &str) -> Result<()> {
        let sel = selector::resolve_actionable(self, group).await?;
        self.first(&sel).await.fill(text, None).await?;
        Ok(())
    }

    pub async fn clear(&self, group: &SelectorGroup) -> Result<()> {
        let sel = selector::resolve_actionable(self, group).await?;
        self.first(&sel).await.clear(None).await?;
        Ok(())
    }

    pub async fn select(&self, group: &SelectorGroup, value: &str) -> Result<()> {
        let sel = selector::resolve_actionable(self, group).await?;
        self.first(&sel).await.select_option(value, None).await?;
        Ok(())
    }

    /// Presses a key with the group's first match focused.
    pub async fn press(&self, group: &SelectorGroup, key: &str) -> Result<()> {
        let sel = selector::resolve_actionable(self, group).await?;
        self.first(&sel).await.press(key, None).await?;
        Ok(())
    }

    /// Presses a key at page level, without a target element.
    pub async fn press_key(&self, key: &str) -> Result<()> {
        self.page.keyboard().press(key, None).await?;
        Ok(())
    }

    /// Value of the first matching input/select. Strict on presence.
    pub async fn input_value(&self, group: &SelectorGroup) -> Result<String> {
        let sel = selector::resolve(self, group).await?;
        Ok(self.first(&sel).await.input_value(None).await?)
    }

    /// Whether the first match is enabled. Strict on presence.
    pub async fn is_enabled(&self, group: &SelectorGroup) -> Result<bool> {
        let sel = selector::resolve(self, group).await?;
        ElementProbe::is_enabled(self, &sel).await
    }

    /// One configured post-mutation delay for debounced UIs (search and
    /// filter inputs); expressed once here instead of scattered through
    /// scenarios.
    pub async fn settle(&self) {
        tokio::time::sleep(self.config.settle_delay).await;
    }

    async fn first(&self, selector: &str) -> Locator {
        self.page.locator(selector).await.first()
    }
}

#[async_trait]
impl ElementProbe for BasePage {
    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.locator(selector).await.count().await?)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.first(selector).await.is_visible().await?)
    }

    async fn is_enabled(&self, selector: &str) -> Result<bool> {
        Ok(self.first(selector).await.is_enabled().await?)
    }
}

impl std::fmt::Debug for BasePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasePage")
            .field("url", &self.page.url())
            .finish()
    }
}
