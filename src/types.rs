//! Shared types used by the state machines, the renderer and the CLI output.
//!
//! The page has a fixed, ordered set of sections. Each one has a stable key
//! (used by the highlight engine and serialized into the page runtime), a nav
//! label and a DOM anchor. The header renders them in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for one of the seven named content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
    Credentials,
}

impl SectionKey {
    /// All keys in header order.
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Profile,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Contact,
        SectionKey::Credentials,
    ];

    /// Key as written into `data-highlight-key` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Profile => "profile",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Contact => "contact",
            SectionKey::Credentials => "credentials",
        }
    }

    /// The header entry for this key.
    pub fn section(self) -> &'static Section {
        // SECTIONS is declared in the same order as ALL.
        &SECTIONS[self as usize]
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header entry: what the nav shows and where it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub key: SectionKey,
    pub label: &'static str,
    /// DOM id of the card the section scrolls to (without `#`).
    pub anchor: &'static str,
}

impl Section {
    /// Anchor as a CSS id selector / fragment link.
    pub fn selector(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// The header's sections, in display order.
pub const SECTIONS: [Section; 7] = [
    Section {
        key: SectionKey::Profile,
        label: "Sobre Mi",
        anchor: "sobremi",
    },
    Section {
        key: SectionKey::Experience,
        label: "Experiencia",
        anchor: "experiencia",
    },
    Section {
        key: SectionKey::Education,
        label: "Educación",
        anchor: "educacion",
    },
    Section {
        key: SectionKey::Skills,
        label: "Conocimientos",
        anchor: "conocimientos",
    },
    Section {
        key: SectionKey::Projects,
        label: "Proyectos",
        anchor: "projects",
    },
    Section {
        key: SectionKey::Contact,
        label: "Contacto",
        anchor: "contact",
    },
    Section {
        key: SectionKey::Credentials,
        label: "Credenciales",
        anchor: "credenciales",
    },
];
