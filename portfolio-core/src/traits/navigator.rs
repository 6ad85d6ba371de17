//! Host navigation abstraction

use crate::error::{CoreError, CoreResult};

/// Navigator Trait
///
/// Performs a full navigation (the current page is torn down and the
/// destination loaded from scratch). Not a client-side router.
pub trait Navigator {
    /// Navigate to a document URL such as `layerlens.html` or `index.html`
    fn navigate(&mut self, url: &str) -> CoreResult<()>;

    /// Reload the current document
    fn reload(&mut self);
}

/// In-memory navigator
///
/// Records every navigation; can be told to fail the next one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNavigator {
    history: Vec<String>,
    reloads: usize,
    fail_next: Option<String>,
}

impl InMemoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `navigate` call fail with this message
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    /// URLs navigated to, oldest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    #[must_use]
    pub fn reloads(&self) -> usize {
        self.reloads
    }
}

impl Navigator for InMemoryNavigator {
    fn navigate(&mut self, url: &str) -> CoreResult<()> {
        if let Some(message) = self.fail_next.take() {
            return Err(CoreError::NavigationFailed(message));
        }
        self.history.push(url.to_string());
        Ok(())
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_next_applies_once() {
        let mut nav = InMemoryNavigator::new();
        nav.fail_next("offline");

        assert_eq!(
            nav.navigate("layerlens.html"),
            Err(CoreError::NavigationFailed("offline".into()))
        );
        assert!(nav.navigate("layerlens.html").is_ok());
        assert_eq!(nav.history(), ["layerlens.html".to_string()]);
    }
}
