//! Page content: who the page is about and what it lists.
//!
//! The stock content is compiled in ([`Content::default`]). A `content.toml`
//! in the source directory is merged over it with the same sparse-overlay
//! rules as `config.toml`: tables merge key by key, arrays replace wholesale.
//! So overriding `projects` replaces the whole project list, while overriding
//! `profile.tagline` leaves the name and title alone.
//!
//! ```toml
//! [profile]
//! tagline = "Builds small, careful tools."
//!
//! [[projects]]
//! title = "Only project"
//! description = "Replaces the stock list."
//! tags = ["Rust"]
//! href = "https://example.com/only"
//! ```
//!
//! Free-text fields (tagline, blurbs, project descriptions) accept inline
//! markdown. Technologies and project tags are sets: validation drops
//! duplicates and keeps the first occurrence.

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the page says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Content {
    /// Credential lines shown in the "Credenciales" card.
    pub credentials: Vec<String>,
    pub profile: Profile,
    pub skills: Skills,
    pub contact: ContactInfo,
    pub socials: Vec<SocialLink>,
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    /// Projects; identity is the position in this list.
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Alt text for the avatar image.
    pub avatar_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Skills {
    pub blurb: String,
    /// Technology badges. Set semantics; order is display order only.
    pub techs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactInfo {
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Icon,
}

/// One row of the experience or education lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Repository link, opened in a new browsing context.
    pub href: String,
}

/// Glyphs the page knows how to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    #[default]
    External,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            credentials: vec![
                "Cert. Google Cybersecurity (en curso)".to_string(),
                "Curso Linux Essentials".to_string(),
                "Inglés B1/B2".to_string(),
            ],
            profile: Profile::default(),
            skills: Skills::default(),
            contact: ContactInfo::default(),
            socials: vec![
                social("GitHub", "https://github.com/mariannorasg", Icon::Github),
                social(
                    "LinkedIn",
                    "https://www.linkedin.com/in/mariano-rasgido-a48213297/",
                    Icon::Linkedin,
                ),
                social("Email", "mailto:mariano.rasggido@gmail.com", Icon::Mail),
            ],
            experience: vec![
                entry(
                    "2023 — 2025",
                    "Pentester en formación",
                    "Laboratorio personal (Kali + Metasploitable)",
                ),
                entry("2021 — 2023", "Front‑End Developer", "Freelance"),
            ],
            education: vec![
                entry(
                    "2025 — 2026",
                    "Tecnicatura En Programacion (en curso)",
                    "UTN",
                ),
                entry(
                    "Cursos",
                    "Seguridad Ofensiva, Redes, Linux",
                    "Autodidacta / Plataformas online",
                ),
            ],
            projects: vec![
                project(
                    "Lab de Pentesting – Metasploitable 2",
                    "Reconocimiento (Nmap), explotación (vsftpd, Samba), post‑explotación y reporte.",
                    &["Nmap", "Hydra", "SMB", "Metasploit"],
                    "https://github.com/mariannorasg/metasploitable2-pentesting-lab",
                ),
                project(
                    "Password Hashing CLI",
                    "Herramienta en Python para generar y verificar hashes PBKDF2‑SHA256.",
                    &["Python", "CLI", "Criptografía"],
                    "https://github.com/mariannorasg/passhash",
                ),
                project(
                    "Landing minimalista",
                    "Plantilla responsive oscura con Tailwind y animaciones.",
                    &["Tailwind", "React", "UI"],
                    "https://github.com/tuusuario/landing-dark-grid",
                ),
            ],
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mariano Rasgido".to_string(),
            title: "Pentesting & Desarrollo Web".to_string(),
            tagline: "Creo soluciones limpias y seguras. Me enfoco en pentesting, \
                      desarrollo front‑end y automatización."
                .to_string(),
            avatar_alt: "Avatar".to_string(),
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            blurb: "Tecnologías y herramientas que uso frecuentemente.".to_string(),
            techs: [
                "Kali Linux",
                "Nmap",
                "Hydra",
                "Metasploit",
                "Burp Suite",
                "Dirb / Gobuster",
                "SMB / FTP",
                "Python",
                "Bash",
                "Git / GitHub",
                "React",
                "TailwindCSS",
                "Framer Motion",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            blurb: "¿Tenés una idea o proyecto? Escribime y coordinamos una reunión.".to_string(),
        }
    }
}

fn social(label: &str, href: &str, icon: Icon) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        href: href.to_string(),
        icon,
    }
}

fn entry(period: &str, title: &str, place: &str) -> TimelineEntry {
    TimelineEntry {
        period: period.to_string(),
        title: title.to_string(),
        place: place.to_string(),
    }
}

fn project(title: &str, description: &str, tags: &[&str], href: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        href: href.to_string(),
    }
}

impl Content {
    /// Validate required fields and collapse set-valued lists.
    ///
    /// Consumes and returns the content so callers can chain it after
    /// deserialization.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.profile.name.trim().is_empty() {
            return Err(ConfigError::Validation("profile.name must not be empty".into()));
        }
        for (i, link) in self.socials.iter().enumerate() {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "socials[{i}] needs both a label and an href"
                )));
            }
        }
        for (i, project) in self.projects.iter_mut().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "projects[{i}].title must not be empty"
                )));
            }
            if project.href.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "projects[{i}] ({}) has no href",
                    project.title
                )));
            }
            dedup_keep_first(&mut project.tags);
        }
        dedup_keep_first(&mut self.skills.techs);
        Ok(self)
    }

    /// Number of projects the carousel cycles through.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Drop repeated labels, keeping the first occurrence of each.
fn dedup_keep_first(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// Returns the stock content as a `toml::Value::Table`.
pub fn stock_content_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(Content::default())
        .map_err(|e| ConfigError::Validation(format!("stock content does not serialize: {e}")))
}

/// Load `content.toml` from the given directory, merged over stock content.
pub fn load_content(root: &Path) -> Result<Content, ConfigError> {
    let base = stock_content_value()?;
    let merged = match config::load_raw_toml(root, "content.toml")? {
        Some(overlay) => config::merge_toml(base, overlay),
        None => base,
    };
    let content: Content = merged.try_into()?;
    content.validated()
}

/// Stock content rendered as a `content.toml` document.
///
/// Used by the `gen-content` CLI command as a starting point for edits.
pub fn stock_content_toml() -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(&Content::default())
        .map_err(|e| ConfigError::Validation(format!("stock content does not serialize: {e}")))?;
    Ok(format!(
        "# Folio content\n\
         # Every key is optional; arrays replace the stock list wholesale.\n\n{body}"
    ))
}
