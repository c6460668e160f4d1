//! Shared test utilities for the folio test suite.
//!
//! Builds sessions and rendered pages over the stock content so state
//! machine and renderer tests start from the same page.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut state = page_state();
//! state.dispatch(UiEvent::ProjectTitleClicked(0)).unwrap();
//! let html = render_stock(&state.view());
//! assert_eq!(count_occurrences(&html, " hidden>"), 1);
//! ```

use crate::config::SiteConfig;
use crate::content::Content;
use crate::render::{self, RenderContext};
use crate::shell::{PageState, PageView};

/// Year every test render uses, so footers are stable.
pub const TEST_YEAR: i32 = 2026;

/// A fresh session over the stock content and the page's real anchors.
pub fn page_state() -> PageState {
    PageState::new(Content::default().project_count(), render::page_anchors())
}

/// Stock project titles in carousel order.
pub fn project_titles() -> Vec<String> {
    Content::default()
        .projects
        .into_iter()
        .map(|p| p.title)
        .collect()
}

/// Render the stock page for `view` with default config.
pub fn render_stock(view: &PageView) -> String {
    let ctx = RenderContext {
        year: TEST_YEAR,
        avatar_src: "avatar.png",
    };
    render::render_page(&Content::default(), &SiteConfig::default(), view, &ctx)
        .unwrap_or_else(|e| panic!("stock page failed to render: {e}"))
        .into_string()
}

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::UiEvent;

    #[test]
    fn session_state_renders_open_modal() {
        let mut state = page_state();
        state.dispatch(UiEvent::ProjectTitleClicked(0)).unwrap();
        let html = render_stock(&state.view());
        // Contact overlay still hidden, project modal shown.
        assert_eq!(count_occurrences(&html, " hidden>"), 1);
        assert!(html.contains("metasploitable2-pentesting-lab"));
    }

    #[test]
    fn count_occurrences_counts() {
        assert_eq!(count_occurrences("a-a-a", "a"), 3);
        assert_eq!(count_occurrences("", "a"), 0);
    }
}
