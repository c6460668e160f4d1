//! Focused overlays: a dialog above a dimmed, blurred backdrop.
//!
//! The project modal and the contact overlay share the same chrome, so it is
//! rendered once here and parameterised by [`OverlayKind`] and the body
//! markup. Dismissal controls are marked with `data-dismiss` attributes; the
//! page runtime turns clicks on them into [`Dismissal`] events.

use crate::icons::{Glyph, icon};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Project,
    Contact,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 2] = [OverlayKind::Project, OverlayKind::Contact];

    /// Name used in `data-overlay` and in the runtime rules.
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Project => "project",
            OverlayKind::Contact => "contact",
        }
    }

    /// DOM id of the overlay root.
    pub fn dom_id(self) -> &'static str {
        match self {
            OverlayKind::Project => "project-modal",
            OverlayKind::Contact => "contact-focus",
        }
    }

    /// Stacking order. Contact sits above the project modal.
    pub fn z_index(self) -> u32 {
        match self {
            OverlayKind::Project => 80,
            OverlayKind::Contact => 85,
        }
    }

    fn panel_class(self) -> &'static str {
        match self {
            OverlayKind::Project => "overlay-panel panel-wide",
            OverlayKind::Contact => "overlay-panel panel-narrow",
        }
    }

    /// Only the project modal listens to the keyboard.
    pub fn closes_on_escape(self) -> bool {
        matches!(self, OverlayKind::Project)
    }
}

/// How the user asked an overlay to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dismissal {
    Backdrop,
    #[serde(rename = "close")]
    CloseButton,
    Escape,
}

impl Dismissal {
    pub const ALL: [Dismissal; 3] = [Dismissal::Backdrop, Dismissal::CloseButton, Dismissal::Escape];

    /// Name used in `data-dismiss` and in the runtime rules.
    pub fn as_str(self) -> &'static str {
        match self {
            Dismissal::Backdrop => "backdrop",
            Dismissal::CloseButton => "close",
            Dismissal::Escape => "escape",
        }
    }
}

/// Whether `dismissal` closes an overlay of `kind`.
pub fn dismisses(kind: OverlayKind, dismissal: Dismissal) -> bool {
    match dismissal {
        Dismissal::Backdrop | Dismissal::CloseButton => true,
        Dismissal::Escape => kind.closes_on_escape(),
    }
}

/// Every dismissal that closes an overlay of `kind`.
pub fn closing_dismissals(kind: OverlayKind) -> Vec<Dismissal> {
    Dismissal::ALL
        .into_iter()
        .filter(|d| dismisses(kind, *d))
        .collect()
}

/// The contact overlay's only state: open or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactOverlay {
    open: bool,
}

impl ContactOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Returns `true` if the overlay was open and this dismissal closed it.
    pub fn close(&mut self, dismissal: Dismissal) -> bool {
        if !dismisses(OverlayKind::Contact, dismissal) {
            return false;
        }
        std::mem::replace(&mut self.open, false)
    }
}

/// Render the overlay chrome around `body`.
///
/// A closed overlay is still emitted (with `hidden`) so the runtime can open
/// it without building DOM.
pub fn render_overlay(kind: OverlayKind, open: bool, label: &str, body: Markup) -> Markup {
    let style = format!("z-index: {};", kind.z_index());
    html! {
        div.overlay id=(kind.dom_id()) data-overlay=(kind.as_str()) style=(style) hidden[!open] {
            div.overlay-backdrop data-dismiss=(Dismissal::Backdrop.as_str()) {}
            div class=(kind.panel_class()) role="dialog" aria-modal="true" aria-label=(label) {
                div.overlay-card {
                    button.overlay-close type="button" data-dismiss=(Dismissal::CloseButton.as_str()) aria-label="Cerrar" {
                        (icon(Glyph::Close, 18))
                    }
                    (body)
                }
            }
        }
    }
}
