// Selector groups and the fallback resolver.
//
// The target application's markup is heterogeneous: some screens carry
// explicit test attributes, others only class names or localized button
// labels. A single hard-coded selector breaks on minor UI variation, so
// every logical element is described by an ordered list of alternatives —
// most specific first, most permissive text match last — and resolution
// walks the list until one matches the live DOM.
//
// The resolver is a single algorithm parameterized by data: groups are
// plain values, and the DOM is reached through the `ElementProbe` trait,
// so resolution is unit-testable with no live page behind it.

use async_trait::async_trait;

use crate::error::{Error, Result};

/// An ordered list of equivalent locator expressions for one logical
/// element. Order encodes priority and is fixed at definition time.
#[derive(Debug, Clone)]
pub struct SelectorGroup {
    name: String,
    alternatives: Vec<String>,
}

impl SelectorGroup {
    pub fn new(name: impl Into<String>, alternatives: &[&str]) -> Self {
        let name = name.into();
        debug_assert!(!alternatives.is_empty(), "selector group '{name}' is empty");
        SelectorGroup {
            name,
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Logical element name, used in error messages and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(String::as_str)
    }

    /// Narrows every alternative to elements containing the given text.
    pub fn containing(&self, text: &str) -> SelectorGroup {
        let quoted = escape_text(text);
        SelectorGroup {
            name: format!("{} containing '{text}'", self.name),
            alternatives: self
                .alternatives
                .iter()
                .map(|alt| format!("{alt}:has-text('{quoted}')"))
                .collect(),
        }
    }

    /// Scopes this group under an ancestor group (descendant combinator).
    ///
    /// The cross product is ancestor-major: all of this group's
    /// alternatives under the ancestor's best alternative come first.
    pub fn inside(&self, ancestor: &SelectorGroup) -> SelectorGroup {
        let mut alternatives = Vec::with_capacity(self.alternatives.len() * ancestor.alternatives.len());
        for outer in &ancestor.alternatives {
            for inner in &self.alternatives {
                alternatives.push(format!("{outer} {inner}"));
            }
        }
        SelectorGroup {
            name: format!("{} inside {}", self.name, ancestor.name),
            alternatives,
        }
    }
}

/// Escapes a string for embedding in a `:has-text('…')` clause.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Minimal DOM introspection needed by the resolver. Implemented by
/// [`BasePage`](crate::page::BasePage) over the live engine and by
/// in-memory fakes in unit tests.
#[async_trait]
pub trait ElementProbe {
    /// Number of elements matching the raw selector.
    async fn count(&self, selector: &str) -> Result<usize>;
    /// Whether the first match is visible. False when nothing matches.
    async fn is_visible(&self, selector: &str) -> Result<bool>;
    /// Whether the first match is enabled. False when nothing matches.
    async fn is_enabled(&self, selector: &str) -> Result<bool>;
}

/// First alternative with a non-zero match count, or `None`.
///
/// The lenient form: existence and visibility queries treat "not present"
/// as a valid negative result, not an error.
pub async fn try_resolve<P>(probe: &P, group: &SelectorGroup) -> Result<Option<String>>
where
    P: ElementProbe + ?Sized,
{
    for (rank, alternative) in group.alternatives().enumerate() {
        if probe.count(alternative).await? > 0 {
            if rank > 0 {
                tracing::debug!(
                    group = group.name(),
                    selector = alternative,
                    rank,
                    "resolved via fallback selector"
                );
            }
            return Ok(Some(alternative.to_string()));
        }
        tracing::trace!(group = group.name(), selector = alternative, "selector miss");
    }
    Ok(None)
}

/// First alternative with a non-zero match count, or `ElementNotFound`.
pub async fn resolve<P>(probe: &P, group: &SelectorGroup) -> Result<String>
where
    P: ElementProbe + ?Sized,
{
    match try_resolve(probe, group).await? {
        Some(selector) => Ok(selector),
        None => Err(not_found(group)),
    }
}

/// First alternative that is present, visible and enabled.
///
/// Used by action methods: `Interaction` when elements exist but none are
/// actionable, `ElementNotFound` when nothing matches at all.
pub async fn resolve_actionable<P>(probe: &P, group: &SelectorGroup) -> Result<String>
where
    P: ElementProbe + ?Sized,
{
    let mut first_present: Option<String> = None;
    for alternative in group.alternatives() {
        if probe.count(alternative).await? == 0 {
            continue;
        }
        if probe.is_visible(alternative).await? && probe.is_enabled(alternative).await? {
            return Ok(alternative.to_string());
        }
        if first_present.is_none() {
            first_present = Some(alternative.to_string());
        }
    }
    match first_present {
        Some(selector) => Err(Error::Interaction {
            group: group.name().to_string(),
            selector,
        }),
        None => Err(not_found(group)),
    }
}

fn not_found(group: &SelectorGroup) -> Error {
    Error::ElementNotFound {
        group: group.name().to_string(),
        tried: group.alternatives().map(str::to_string).collect(),
    }
}
