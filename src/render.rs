//! HTML rendering for the portfolio page.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! all interpolated text is escaped. The page is one document:
//!
//! ```text
//! header   nav (seven sections) + "Contactame"
//! main     card grid: avatar, about, experience, education, skills,
//!          projects (3 cols), contact, credentials
//! footer   copyright + social icons
//! overlays project modal, contact focus (rendered hidden unless open)
//! scripts  JSON payload for the runtime, then the runtime itself
//! ```
//!
//! Rendering takes a [`PageView`] so the same functions can draw any state
//! of a session. The generator renders the initial (all closed) view; tests
//! render open states to check what the runtime will show.

use crate::carousel::{KEY_BINDINGS, KeyAction};
use crate::config::{self, SiteConfig};
use crate::content::{Content, Project, SocialLink, TimelineEntry};
use crate::highlight::{AnchorSet, SweepStyle};
use crate::icons::{Glyph, icon};
use crate::overlay::{Dismissal, OverlayKind, closing_dismissals, render_overlay};
use crate::shell::PageView;
use crate::types::{SECTIONS, Section, SectionKey};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};
use serde::Serialize;
use std::collections::BTreeMap;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/folio.js");

/// Id of the `<script type="application/json">` the runtime reads.
pub const PAYLOAD_ID: &str = "folio-data";

/// Values that are not content but still end up in the markup.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Year shown in the footer copyright.
    pub year: i32,
    /// Avatar `src`, relative to `index.html`.
    pub avatar_src: &'a str,
}

/// Everything the runtime needs that is not already in the DOM.
#[derive(Debug, Serialize)]
struct Payload<'a> {
    projects: Vec<ProjectPayload<'a>>,
    sections: Vec<SectionPayload>,
    sweep: SweepStyle,
    /// View the page was rendered in; the runtime's starting state.
    state: PageView,
    rules: RuntimeRules,
}

/// Transition rules the runtime reads instead of hard-coding.
#[derive(Debug, Serialize)]
struct RuntimeRules {
    /// DOM key name to modal action.
    keys: BTreeMap<&'static str, KeyAction>,
    /// Overlay name to the dismissals that close it.
    dismissals: BTreeMap<&'static str, Vec<Dismissal>>,
}

impl RuntimeRules {
    fn new() -> Self {
        Self {
            keys: KEY_BINDINGS
                .iter()
                .filter_map(|(name, key)| key.action().map(|action| (*name, action)))
                .collect(),
            dismissals: OverlayKind::ALL
                .iter()
                .map(|kind| (kind.as_str(), closing_dismissals(*kind)))
                .collect(),
        }
    }
}

/// A project as the carousel swaps it in: description pre-rendered.
#[derive(Debug, Serialize)]
struct ProjectPayload<'a> {
    title: &'a str,
    description_html: String,
    tags: &'a [String],
    href: &'a str,
}

#[derive(Debug, Serialize)]
struct SectionPayload {
    key: SectionKey,
    anchor: &'static str,
}

// ============================================================================
// Stylesheet and payload
// ============================================================================

/// Full stylesheet: generated custom properties, sweep keyframes, then the
/// static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_animation_css(&config.animation),
        SweepStyle::from_config(&config.animation).keyframes_css(),
        CSS_STATIC
    )
}

/// Runtime payload as JSON that is safe to inline in a `<script>` element.
pub fn payload_json(
    content: &Content,
    config: &SiteConfig,
    view: &PageView,
) -> Result<String, serde_json::Error> {
    let payload = Payload {
        projects: content
            .projects
            .iter()
            .map(|p| ProjectPayload {
                title: &p.title,
                description_html: inline_markdown(&p.description).into_string(),
                tags: &p.tags,
                href: &p.href,
            })
            .collect(),
        sections: SECTIONS
            .iter()
            .map(|s| SectionPayload {
                key: s.key,
                anchor: s.anchor,
            })
            .collect(),
        sweep: SweepStyle::from_config(&config.animation),
        state: *view,
        rules: RuntimeRules::new(),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(json.replace("</", "<\\/"))
}

/// Ids the rendered page carries, for highlight scroll lookups.
pub fn page_anchors() -> AnchorSet {
    SECTIONS
        .iter()
        .map(|s| s.anchor)
        .chain(["about", "home"])
        .collect()
}

/// Render inline markdown (emphasis, code, links) without a wrapping `<p>`.
///
/// Text that is more than one paragraph (lists, several paragraphs) keeps
/// its block markup, so callers place the result in a `div`.
pub fn inline_markdown(text: &str) -> Markup {
    // Raw HTML in content is shown as text, never injected.
    let events = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, events);
    let trimmed = out.trim_end();
    let inner = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|s| !s.contains("<p>"))
        .unwrap_or(trimmed);
    PreEscaped(inner.to_string())
}

// ============================================================================
// Presentational primitives
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Card container with the hover lift; `order` drives the reveal stagger.
///
/// Every card belongs to a section and plays the sweep while that section
/// is the active highlight.
fn card(
    key: SectionKey,
    active: Option<SectionKey>,
    id: &str,
    class: &str,
    order: usize,
    body: Markup,
) -> Markup {
    let style = format!("--i: {order};");
    html! {
        div class={ "card " (class) } id=(id) style=(style) data-highlight-key=(key.as_str()) {
            @if active == Some(key) {
                div.sweep aria-hidden="true" { div.sweep-band {} }
            }
            div.card-inner { (body) }
        }
    }
}

fn section_title(glyph: Option<Glyph>, text: &str) -> Markup {
    html! {
        div.section-title {
            @if let Some(glyph) = glyph {
                (icon(glyph, 16))
            }
            span { (text) }
        }
    }
}

fn badge(text: &str) -> Markup {
    html! { span.badge { (text) } }
}

/// A header entry. The runtime intercepts the click; without it the
/// fragment link still works.
pub fn nav_link(section: &Section) -> Markup {
    html! {
        a.nav-link href=(section.selector()) data-nav-key=(section.key.as_str()) {
            (section.label)
        }
    }
}

fn outbound(href: &str, class: &str, body: Markup) -> Markup {
    html! {
        a class=(class) href=(href) target="_blank" rel="noreferrer" { (body) }
    }
}

fn social_chip(link: &SocialLink) -> Markup {
    outbound(
        &link.href,
        "social-chip",
        html! { (icon(link.icon, 14)) " " (link.label) },
    )
}

fn timeline(entries: &[TimelineEntry]) -> Markup {
    html! {
        ul.timeline {
            @for entry in entries {
                li {
                    div.timeline-head {
                        p.timeline-title { (entry.title) }
                        span.timeline-period { (entry.period) }
                    }
                    p.timeline-place { (entry.place) }
                }
            }
        }
    }
}

// ============================================================================
// Page regions
// ============================================================================

/// Sticky header: centred nav plus the contact call-to-action.
pub fn site_header() -> Markup {
    html! {
        header.site-header {
            div.header-grid {
                div {}
                nav.site-nav {
                    @for section in &SECTIONS {
                        (nav_link(section))
                    }
                }
                div.header-cta {
                    button.cta #contact-cta type="button" {
                        "Contactame " (icon(Glyph::ArrowRight, 16))
                    }
                }
            }
        }
    }
}

/// Contact call-to-action: blurb and social buttons. Used in the contact
/// card and inside the contact overlay.
pub fn contact_block(content: &Content) -> Markup {
    html! {
        (section_title(Some(Glyph::Mail), "CONTACTO"))
        div.contact-blurb { (inline_markdown(&content.contact.blurb)) }
        div.contact-links {
            @for link in &content.socials {
                (outbound(&link.href, "button-link", html! { (icon(link.icon, 16)) " " (link.label) }))
            }
        }
    }
}

fn project_tile(index: usize, project: &Project) -> Markup {
    html! {
        div.project-tile {
            div.project-head {
                button.project-title type="button" data-project-index=(index) {
                    (project.title)
                }
                (icon(Glyph::External, 16))
            }
            div.project-description { (inline_markdown(&project.description)) }
            div.badges {
                @for tag in &project.tags {
                    (badge(tag))
                }
            }
        }
    }
}

fn main_grid(content: &Content, view: &PageView, ctx: &RenderContext) -> Markup {
    let active = view.active_highlight;
    let profile = &content.profile;

    html! {
        main #home {
            div.grid {
                (card(SectionKey::Profile, active, "sobremi", "span-1 avatar-card", 0, html! {
                    div.avatar {
                        img src=(ctx.avatar_src) alt=(profile.avatar_alt);
                    }
                }))
                (card(SectionKey::Profile, active, "about", "span-2", 1, html! {
                    div.about {
                        h1 { (profile.name) }
                        p.profile-title { (profile.title) }
                        div.tagline { (inline_markdown(&profile.tagline)) }
                        div.socials {
                            @for link in &content.socials {
                                (social_chip(link))
                            }
                        }
                    }
                }))
                (card(SectionKey::Experience, active, "experiencia", "span-1", 2, html! {
                    (section_title(Some(Glyph::Briefcase), "EXPERIENCIA"))
                    (timeline(&content.experience))
                }))
                (card(SectionKey::Education, active, "educacion", "span-1", 3, html! {
                    (section_title(Some(Glyph::GraduationCap), "EDUCACIÓN"))
                    (timeline(&content.education))
                }))
                (card(SectionKey::Skills, active, "conocimientos", "span-1", 4, html! {
                    (section_title(Some(Glyph::Sparkles), "CONOCIMIENTOS"))
                    div.skills-blurb { (inline_markdown(&content.skills.blurb)) }
                    div.badges {
                        @for tech in &content.skills.techs {
                            (badge(tech))
                        }
                    }
                }))
                (card(SectionKey::Projects, active, "projects", "span-3", 5, html! {
                    (section_title(Some(Glyph::External), "PROYECTOS"))
                    div.project-grid {
                        @for (index, project) in content.projects.iter().enumerate() {
                            (project_tile(index, project))
                        }
                    }
                }))
                (card(SectionKey::Contact, active, "contact", "span-2", 6, contact_block(content)))
                (card(SectionKey::Credentials, active, "credenciales", "span-1", 7, html! {
                    (section_title(Some(Glyph::External), "CREDENCIALES"))
                    ul.credentials {
                        @for line in &content.credentials {
                            li { "• " (line) }
                        }
                    }
                }))
            }
        }
    }
}

fn site_footer(content: &Content, ctx: &RenderContext) -> Markup {
    html! {
        footer.site-footer {
            div.footer-row {
                p { "© " (ctx.year) " " (content.profile.name) ". Todos los derechos reservados." }
                div.footer-icons {
                    @for link in &content.socials {
                        a href=(link.href) target="_blank" rel="noreferrer" aria-label=(link.label) {
                            (icon(link.icon, 18))
                        }
                    }
                }
            }
        }
    }
}

/// Project modal body for `project`.
///
/// Fields carry `data-field` so the runtime can swap the shown project in
/// place when the carousel moves.
fn project_modal_body(project: &Project) -> Markup {
    html! {
        div.modal-head {
            h3 data-field="title" { (project.title) }
            div.modal-nav {
                button.icon-button type="button" data-carousel="prev" aria-label="Anterior" {
                    (icon(Glyph::ChevronLeft, 18))
                }
                button.icon-button type="button" data-carousel="next" aria-label="Siguiente" {
                    (icon(Glyph::ChevronRight, 18))
                }
            }
        }
        div.modal-description data-field="description" { (inline_markdown(&project.description)) }
        div.badges data-field="tags" {
            @for tag in &project.tags {
                (badge(tag))
            }
        }
        a.repo-link data-field="href" href=(project.href) target="_blank" rel="noreferrer" {
            "Ver repositorio " (icon(Glyph::External, 16))
        }
    }
}

/// The project overlay, or nothing when there are no projects to show.
pub fn project_modal(content: &Content, view: &PageView) -> Markup {
    let shown = view.open_project.unwrap_or(0);
    match content.projects.get(shown) {
        Some(project) => render_overlay(
            OverlayKind::Project,
            view.open_project.is_some(),
            "Proyecto",
            project_modal_body(project),
        ),
        None => html! {},
    }
}

pub fn contact_focus(content: &Content, view: &PageView) -> Markup {
    render_overlay(
        OverlayKind::Contact,
        view.contact_open,
        "Contacto",
        contact_block(content),
    )
}

/// Render the whole page for `view`.
pub fn render_page(
    content: &Content,
    config: &SiteConfig,
    view: &PageView,
    ctx: &RenderContext,
) -> Result<Markup, serde_json::Error> {
    let payload = payload_json(content, config, view)?;
    let css = stylesheet(config);
    let title = format!("{} — {}", content.profile.name, content.profile.title);

    let body = html! {
        div.page {
            (site_header())
            (main_grid(content, view, ctx))
            (site_footer(content, ctx))
        }
        (project_modal(content, view))
        (contact_focus(content, view))
        script type="application/json" id=(PAYLOAD_ID) { (PreEscaped(payload)) }
        script { (PreEscaped(JS)) }
    };

    Ok(base_document(&title, &config.site.lang, &css, body))
}

// ============================================================================
// Tests
// ============================================================================
