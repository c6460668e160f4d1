//! Highlight engine: which section the nav last targeted.
//!
//! The engine is a two-state machine:
//!
//! ```text
//!            trigger(k)                      complete(k, g) with g current
//!   Idle ─────────────────▶ Active{k, g} ─────────────────────────────────▶ Idle
//!                              │    ▲
//!                              └────┘ trigger(k') → Active{k', g+1}
//! ```
//!
//! Every trigger mints a new generation. Cards whose key equals the active
//! key play the sweep; the page runtime tags each sweep element with the
//! generation it was started for and reports it back on completion. Only a
//! completion carrying the current generation returns the engine to `Idle`,
//! so a sweep that was restarted (remounted) cannot be cleared by the
//! animation it replaced. Completion while `Idle` is a no-op.
//!
//! Scrolling is best-effort: if the section's anchor is not on the page the
//! trigger still activates the key but requests no scroll.

use crate::config::AnimationConfig;
use crate::types::{Section, SectionKey};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepState {
    #[default]
    Idle,
    Active { key: SectionKey, generation: u64 },
}

/// How to bring an anchor into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub anchor: &'static str,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Center,
}

/// The ids present in a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorSet(BTreeSet<String>);

impl AnchorSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether `anchor` is an id on the rendered page.
    pub fn has_anchor(&self, anchor: &str) -> bool {
        self.0.contains(anchor)
    }
}

impl<S: Into<String>> FromIterator<S> for AnchorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Result of a trigger: the sweep to start and where to scroll, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub key: SectionKey,
    pub generation: u64,
    pub scroll: Option<ScrollRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct HighlightEngine {
    state: SweepState,
    last_generation: u64,
}

impl HighlightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn active_key(&self) -> Option<SectionKey> {
        match self.state {
            SweepState::Idle => None,
            SweepState::Active { key, .. } => Some(key),
        }
    }

    /// Whether cards keyed `key` should be rendering the sweep.
    pub fn is_sweeping(&self, key: SectionKey) -> bool {
        self.active_key() == Some(key)
    }

    /// Activate `section` and ask for a centred smooth scroll to its anchor.
    ///
    /// Triggering while already active restarts the sweep under a new
    /// generation, whether or not the key changed.
    pub fn trigger(&mut self, section: &Section, anchors: &AnchorSet) -> Trigger {
        let generation = self.activate(section.key);
        let scroll = anchors.has_anchor(section.anchor).then_some(ScrollRequest {
            anchor: section.anchor,
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        });
        Trigger {
            key: section.key,
            generation,
            scroll,
        }
    }

    /// Activate `key` without scrolling. Returns the new generation.
    pub fn activate(&mut self, key: SectionKey) -> u64 {
        self.last_generation += 1;
        self.state = SweepState::Active {
            key,
            generation: self.last_generation,
        };
        self.last_generation
    }

    /// A sweep finished. Clears the engine if the sweep is the current one.
    ///
    /// Returns `true` when this call moved the engine to `Idle`.
    pub fn complete(&mut self, key: SectionKey, generation: u64) -> bool {
        match self.state {
            SweepState::Active {
                key: active,
                generation: current,
            } if active == key && current == generation => {
                self.state = SweepState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Visual parameters of the sweep band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepStyle {
    pub duration_ms: u32,
    pub easing: String,
    /// Horizontal start and end of the band, as % of the card width.
    pub from_pct: i32,
    pub to_pct: i32,
    pub rotate_deg: i32,
    /// Peak opacity of the white band at its centre.
    pub band_alpha: f32,
}

impl SweepStyle {
    pub fn from_config(animation: &AnimationConfig) -> Self {
        Self {
            duration_ms: animation.sweep_duration_ms,
            easing: animation.sweep_easing.clone(),
            from_pct: -60,
            to_pct: 60,
            rotate_deg: 12,
            band_alpha: 0.08,
        }
    }

    /// The gradient painted on the band.
    pub fn gradient_css(&self) -> String {
        format!(
            "linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,{}) 50%, rgba(255,255,255,0) 100%)",
            self.band_alpha
        )
    }

    /// `@keyframes folio-sweep` plus the rule that drives it.
    pub fn keyframes_css(&self) -> String {
        format!(
            r#"@keyframes folio-sweep {{
    from {{ transform: translateX({from}%) rotate({rot}deg); }}
    to {{ transform: translateX({to}%) rotate({rot}deg); }}
}}
@keyframes folio-sweep-fade {{
    0% {{ opacity: 0; }}
    15% {{ opacity: 1; }}
    85% {{ opacity: 1; }}
    100% {{ opacity: 0; }}
}}
.sweep {{
    animation: folio-sweep-fade {duration}ms linear forwards;
}}
.sweep-band {{
    background: {gradient};
    animation: folio-sweep {duration}ms {easing} forwards;
}}"#,
            from = self.from_pct,
            to = self.to_pct,
            rot = self.rotate_deg,
            gradient = self.gradient_css(),
            duration = self.duration_ms,
            easing = self.easing,
        )
    }
}
