//! # Folio
//!
//! A static generator for a single-page developer portfolio: a dark grid of
//! cards (profile, experience, education, skills, projects, contact,
//! credentials) with a sticky navigation header, a highlight sweep that
//! marks the card the visitor navigated to, a project carousel modal and a
//! contact overlay.
//!
//! # Architecture
//!
//! ```text
//! content.toml + config.toml  →  Content + SiteConfig  →  render  →  dist/index.html
//! ```
//!
//! The page's interactive behaviour is modelled in Rust as explicit state
//! machines ([`highlight`], [`carousel`], [`overlay`]) composed by
//! [`shell::PageState`]. The renderer draws any [`shell::PageView`] of that
//! state, and the small runtime script shipped with the page mirrors the
//! same transitions in the browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Section keys and the fixed navigation table |
//! | [`config`] | `config.toml` loading, merging over stock defaults, CSS variables |
//! | [`content`] | `content.toml`: profile, timeline, skills, projects, socials |
//! | [`highlight`] | Highlight engine: one active section, sweep generations |
//! | [`carousel`] | Project modal state: open index, cyclic navigation, keys |
//! | [`overlay`] | Focused overlay chrome and contact overlay state |
//! | [`shell`] | Page state: UI events in, effects out |
//! | [`icons`] | Inline SVG glyphs |
//! | [`render`] | Maud rendering of the page, stylesheet and runtime payload |
//! | [`generate`] | Writes the rendered site and copies avatar and assets |
//! | [`output`] | CLI output formatting |

pub mod carousel;
pub mod config;
pub mod content;
pub mod generate;
pub mod highlight;
pub mod icons;
pub mod output;
pub mod overlay;
pub mod render;
pub mod shell;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
