//! Inline SVG glyphs (24×24 stroke icons).

use crate::content::Icon;
use maud::{Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Github,
    Linkedin,
    Mail,
    External,
    ArrowRight,
    Briefcase,
    GraduationCap,
    Sparkles,
    Close,
    ChevronLeft,
    ChevronRight,
}

impl From<Icon> for Glyph {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Github => Glyph::Github,
            Icon::Linkedin => Glyph::Linkedin,
            Icon::Mail => Glyph::Mail,
            Icon::External => Glyph::External,
        }
    }
}

impl Glyph {
    fn paths(self) -> &'static str {
        match self {
            Glyph::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Glyph::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Glyph::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Glyph::External => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Glyph::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Glyph::Briefcase => {
                r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/><rect width="20" height="14" x="2" y="6" rx="2"/>"#
            }
            Glyph::GraduationCap => {
                r#"<path d="M22 10 12 5 2 10l10 5 10-5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Glyph::Sparkles => {
                r#"<path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z"/><path d="M5 3v4"/><path d="M3 5h4"/>"#
            }
            Glyph::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Glyph::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Glyph::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        }
    }
}

/// Render `glyph` at `size` pixels. Decorative: hidden from assistive tech.
pub fn icon(glyph: impl Into<Glyph>, size: u32) -> Markup {
    let glyph = glyph.into();
    html! {
        svg.icon xmlns="http://www.w3.org/2000/svg" width=(size) height=(size)
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(glyph.paths()))
        }
    }
}
