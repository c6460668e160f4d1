//! CLI output formatting for the check and build commands.
//!
//! # Information-First Display
//!
//! Output reads as a content inventory: every entity (section, timeline
//! entry, project) is shown by positional index and title, with secondary
//! details on indented lines beneath it. Filesystem paths only appear where
//! they are the identity, as in the config listing and the build report.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Mariano Rasgido: Pentesting & Desarrollo Web
//!
//! Sections
//! 001 Sobre Mi → #sobremi
//! 002 Experiencia → #experiencia
//!
//! Projects
//! 001 Lab de Pentesting – Metasploitable 2 (4 tags)
//!     Link: https://github.com/...
//!     Description: Reconocimiento (Nmap), explotación...
//!
//! Config
//!     config.toml
//!     content.toml (stock)
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html (48211 bytes)
//! Avatar → avatar.png
//! Assets
//!     001 favicon.ico
//!
//! Generated 1 page, 3 projects, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::content::{Content, TimelineEntry};
use crate::generate::{AvatarStatus, GenerateReport};
use crate::render;
use crate::types::SECTIONS;
use std::path::Path;

const DESC_MAX: usize = 60;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional tag count.
///
/// ```text
/// 001 Password Hashing CLI (3 tags)
/// 001 Pentester en formación
/// ```
fn entity_header(index: usize, title: &str, tags: Option<usize>) -> String {
    match tags {
        Some(1) => format!("{} {} (1 tag)", format_index(index), title),
        Some(n) => format!("{} {} ({} tags)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Plain-text rendering of an inline-markdown field, for terminal display.
fn plain_text(markdown: &str) -> String {
    strip_html_tags(&render::inline_markdown(markdown).into_string())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

fn timeline_lines(lines: &mut Vec<String>, heading: &str, entries: &[TimelineEntry]) {
    if entries.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    for (i, entry) in entries.iter().enumerate() {
        lines.push(entity_header(i + 1, &entry.title, None));
        lines.push(format!("{}{} · {}", indent(1), entry.period, entry.place));
    }
    lines.push(String::new());
}

fn config_line(root: &Path, file_name: &str) -> String {
    if root.join(file_name).is_file() {
        format!("{}{}", indent(1), file_name)
    } else {
        format!("{}{} (stock)", indent(1), file_name)
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the content inventory shown by `check`.
pub fn format_check_output(content: &Content, config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!(
        "{}{}: {}",
        indent(1),
        content.profile.name,
        content.profile.title
    ));
    lines.push(String::new());

    lines.push("Sections".to_string());
    for (i, section) in SECTIONS.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} #{}",
            format_index(i + 1),
            section.label,
            section.anchor
        ));
    }
    lines.push(String::new());

    timeline_lines(&mut lines, "Experience", &content.experience);
    timeline_lines(&mut lines, "Education", &content.education);

    lines.push(format!("Skills ({})", content.skills.techs.len()));
    if !content.skills.techs.is_empty() {
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(&content.skills.techs.join(", "), DESC_MAX)
        ));
    }
    lines.push(String::new());

    if content.projects.is_empty() {
        lines.push("Projects: none (carousel disabled)".to_string());
    } else {
        lines.push("Projects".to_string());
        for (i, project) in content.projects.iter().enumerate() {
            lines.push(entity_header(i + 1, &project.title, Some(project.tags.len())));
            lines.push(format!("{}Link: {}", indent(1), project.href));
            let desc = plain_text(&project.description);
            if !desc.is_empty() {
                lines.push(format!(
                    "{}Description: {}",
                    indent(1),
                    truncate_desc(&desc, DESC_MAX)
                ));
            }
        }
    }
    lines.push(String::new());

    if !content.credentials.is_empty() {
        lines.push("Credentials".to_string());
        for (i, credential) in content.credentials.iter().enumerate() {
            lines.push(entity_header(i + 1, credential, None));
        }
        lines.push(String::new());
    }

    if !content.socials.is_empty() {
        lines.push("Socials".to_string());
        for social in &content.socials {
            lines.push(format!("{}{} \u{2192} {}", indent(1), social.label, social.href));
        }
        lines.push(String::new());
    }

    lines.push("Config".to_string());
    lines.push(config_line(source_root, "config.toml"));
    lines.push(config_line(source_root, "content.toml"));
    if source_root.join(&config.site.avatar).is_file() {
        lines.push(format!("{}{}", indent(1), config.site.avatar));
    } else {
        lines.push(format!("{}{} (missing)", indent(1), config.site.avatar));
    }
    if source_root.join(&config.site.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), config.site.assets_dir));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(content: &Content, config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(content, config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the report for a finished build.
pub fn format_generate_output(report: &GenerateReport, content: &Content) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Home \u{2192} index.html ({} bytes)", report.index_bytes));
    match &report.avatar {
        AvatarStatus::Copied(path) => lines.push(format!("Avatar \u{2192} {}", path)),
        AvatarStatus::Missing(path) => {
            lines.push(format!("Avatar: {} not found, image will show as broken", path))
        }
    }

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for (i, asset) in report.assets.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(i + 1),
                asset.display()
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(content.projects.len(), "project", "projects"),
        plural(report.assets.len(), "asset", "assets")
    ));

    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport, content: &Content) {
    for line in format_generate_output(report, content) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn strip_html_tags_removes_tags() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn strip_html_tags_no_tags() {
        assert_eq!(strip_html_tags("plain text"), "plain text");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("explotación", 10), "explotació...");
        assert_eq!(truncate_desc("ñññ", 3), "ñññ");
    }

    #[test]
    fn entity_header_tag_counts() {
        assert_eq!(entity_header(1, "CLI", Some(3)), "001 CLI (3 tags)");
        assert_eq!(entity_header(2, "CLI", Some(1)), "002 CLI (1 tag)");
        assert_eq!(entity_header(12, "UTN", None), "012 UTN");
    }

    #[test]
    fn plain_text_drops_markdown_markup() {
        assert_eq!(plain_text("uses **Nmap** and `hydra`"), "uses Nmap and hydra");
    }

    // =========================================================================
    // Check output
    // =========================================================================

    #[test]
    fn check_lists_sections_in_page_order() {
        let dir = TempDir::new().unwrap();
        let lines = format_check_output(&Content::default(), &SiteConfig::default(), dir.path());
        assert!(lines.contains(&"001 Sobre Mi \u{2192} #sobremi".to_string()));
        assert!(lines.contains(&"005 Proyectos \u{2192} #projects".to_string()));
        assert!(lines.contains(&"007 Credenciales \u{2192} #credenciales".to_string()));
    }

    #[test]
    fn check_lists_projects_with_links() {
        let dir = TempDir::new().unwrap();
        let lines = format_check_output(&Content::default(), &SiteConfig::default(), dir.path());
        assert!(lines.contains(&"002 Password Hashing CLI (3 tags)".to_string()));
        assert!(lines.contains(&"    Link: https://github.com/mariannorasg/passhash".to_string()));
    }

    #[test]
    fn check_flags_stock_files_and_missing_avatar() {
        let dir = TempDir::new().unwrap();
        let lines = format_check_output(&Content::default(), &SiteConfig::default(), dir.path());
        assert!(lines.contains(&"    config.toml (stock)".to_string()));
        assert!(lines.contains(&"    avatar.png (missing)".to_string()));
    }

    #[test]
    fn check_shows_present_files_plainly() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        std::fs::write(dir.path().join("avatar.png"), b"png").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let lines = format_check_output(&Content::default(), &SiteConfig::default(), dir.path());
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    avatar.png".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn check_without_projects_says_so() {
        let dir = TempDir::new().unwrap();
        let content = Content {
            projects: Vec::new(),
            ..Content::default()
        };
        let lines = format_check_output(&content, &SiteConfig::default(), dir.path());
        assert!(lines.contains(&"Projects: none (carousel disabled)".to_string()));
    }

    // =========================================================================
    // Build output
    // =========================================================================

    fn report(avatar: AvatarStatus, assets: &[&str]) -> GenerateReport {
        GenerateReport {
            index_path: PathBuf::from("dist/index.html"),
            index_bytes: 1234,
            avatar,
            assets: assets.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn generate_output_summarises_build() {
        let lines = format_generate_output(
            &report(AvatarStatus::Copied("avatar.png".into()), &["favicon.ico"]),
            &Content::default(),
        );
        assert_eq!(lines[0], "Home \u{2192} index.html (1234 bytes)");
        assert_eq!(lines[1], "Avatar \u{2192} avatar.png");
        assert!(lines.contains(&"    001 favicon.ico".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 page, 3 projects, 1 asset"
        );
    }

    #[test]
    fn generate_output_warns_on_missing_avatar() {
        let lines = format_generate_output(
            &report(AvatarStatus::Missing("me.png".into()), &[]),
            &Content::default(),
        );
        assert_eq!(lines[1], "Avatar: me.png not found, image will show as broken");
        assert!(!lines.contains(&"Assets".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 page, 3 projects, 0 assets"
        );
    }
}
