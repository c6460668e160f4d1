//! Page shell: the single owner of the page's interaction state.
//!
//! Three fields make up the whole state of a page session: the active
//! highlight key, the open project index and the contact flag. They live in
//! one [`PageState`]; children get a read-only [`PageView`] and request
//! changes by dispatching [`UiEvent`]s. Each dispatch returns the
//! [`Effect`]s the surface has to carry out (scroll, start a sweep, show an
//! overlay, attach or detach the modal key listener).
//!
//! The generated page's runtime follows the same event table. The parts of
//! it that are data (key bindings, which dismissals close which overlay, the
//! starting view) are serialized into the page payload from here.

use crate::carousel::{Carousel, CarouselError, Key, KeyOutcome};
use crate::highlight::{AnchorSet, HighlightEngine, ScrollRequest};
use crate::overlay::{ContactOverlay, Dismissal, OverlayKind, dismisses};
use crate::types::SectionKey;
use serde::Serialize;

/// Something the user (or an animation) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A header entry was clicked; default link navigation is suppressed.
    NavClicked(SectionKey),
    /// The header's "Contactame" button.
    ContactCtaClicked,
    /// A project title in the showcase grid.
    ProjectTitleClicked(usize),
    ProjectPrevClicked,
    ProjectNextClicked,
    /// A key press reaching the window.
    KeyPressed(Key),
    /// Backdrop or close-button click on an overlay.
    Dismissed(OverlayKind, Dismissal),
    /// A card's sweep animation finished.
    SweepFinished { key: SectionKey, generation: u64 },
}

/// Work for the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollTo(ScrollRequest),
    /// (Re)mount the sweep on every card keyed `key`.
    StartSweep { key: SectionKey, generation: u64 },
    /// Unmount any sweep still showing.
    ClearSweep,
    ShowProject(usize),
    ShowOverlay(OverlayKind),
    HideOverlay(OverlayKind),
    AttachKeyListener,
    DetachKeyListener,
}

/// Read-only snapshot handed to views. The page runtime starts from the
/// rendered snapshot, serialized with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub active_highlight: Option<SectionKey>,
    pub open_project: Option<usize>,
    pub contact_open: bool,
}

#[derive(Debug, Clone)]
pub struct PageState {
    highlight: HighlightEngine,
    carousel: Carousel,
    contact: ContactOverlay,
    anchors: AnchorSet,
}

impl PageState {
    /// Fresh session over `project_count` projects and the page's anchors.
    pub fn new(project_count: usize, anchors: AnchorSet) -> Self {
        Self {
            highlight: HighlightEngine::new(),
            carousel: Carousel::new(project_count),
            contact: ContactOverlay::default(),
            anchors,
        }
    }

    pub fn view(&self) -> PageView {
        PageView {
            active_highlight: self.highlight.active_key(),
            open_project: self.carousel.open_index(),
            contact_open: self.contact.is_open(),
        }
    }

    pub fn highlight(&self) -> &HighlightEngine {
        &self.highlight
    }

    /// Whether the modal's window key listener is attached.
    pub fn key_listener_attached(&self) -> bool {
        self.carousel.is_open()
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Result<Vec<Effect>, CarouselError> {
        let was_listening = self.key_listener_attached();
        let mut effects = Vec::new();

        match event {
            UiEvent::NavClicked(key) => {
                let trigger = self.highlight.trigger(key.section(), &self.anchors);
                effects.push(Effect::StartSweep {
                    key,
                    generation: trigger.generation,
                });
                effects.extend(trigger.scroll.map(Effect::ScrollTo));
            }
            UiEvent::ContactCtaClicked => {
                // Opening and highlighting are not ordered against the
                // overlay's later dismissal.
                self.contact.open();
                effects.push(Effect::ShowOverlay(OverlayKind::Contact));
                let generation = self.highlight.activate(SectionKey::Contact);
                effects.push(Effect::StartSweep {
                    key: SectionKey::Contact,
                    generation,
                });
            }
            UiEvent::ProjectTitleClicked(index) => {
                self.carousel.open(index)?;
                if !was_listening {
                    effects.push(Effect::ShowOverlay(OverlayKind::Project));
                }
                effects.push(Effect::ShowProject(index));
            }
            UiEvent::ProjectPrevClicked => {
                effects.extend(self.carousel.prev().map(Effect::ShowProject));
            }
            UiEvent::ProjectNextClicked => {
                effects.extend(self.carousel.next().map(Effect::ShowProject));
            }
            UiEvent::KeyPressed(key) => match self.carousel.handle_key(key) {
                KeyOutcome::Closed => effects.push(Effect::HideOverlay(OverlayKind::Project)),
                KeyOutcome::Moved(index) => effects.push(Effect::ShowProject(index)),
                KeyOutcome::Ignored => {}
            },
            UiEvent::Dismissed(OverlayKind::Project, dismissal) => {
                if self.carousel.is_open() && dismisses(OverlayKind::Project, dismissal) {
                    self.carousel.close();
                    effects.push(Effect::HideOverlay(OverlayKind::Project));
                }
            }
            UiEvent::Dismissed(OverlayKind::Contact, dismissal) => {
                if self.contact.close(dismissal) {
                    effects.push(Effect::HideOverlay(OverlayKind::Contact));
                }
            }
            UiEvent::SweepFinished { key, generation } => {
                if self.highlight.complete(key, generation) {
                    effects.push(Effect::ClearSweep);
                }
            }
        }

        match (was_listening, self.key_listener_attached()) {
            (false, true) => effects.push(Effect::AttachKeyListener),
            (true, false) => effects.push(Effect::DetachKeyListener),
            _ => {}
        }
        Ok(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{page_state, project_titles};

    fn sweep_generation(effects: &[Effect]) -> u64 {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::StartSweep { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("no sweep started")
    }

    #[test]
    fn nav_click_scrolls_and_sweeps_one_section() {
        let mut state = page_state();
        let effects = state
            .dispatch(UiEvent::NavClicked(SectionKey::Experience))
            .unwrap();
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::ScrollTo(ScrollRequest { anchor: "experiencia", .. })
        )));
        assert_eq!(state.view().active_highlight, Some(SectionKey::Experience));

        let generation = sweep_generation(&effects);
        let done = state
            .dispatch(UiEvent::SweepFinished {
                key: SectionKey::Experience,
                generation,
            })
            .unwrap();
        assert_eq!(done, vec![Effect::ClearSweep]);
        assert_eq!(state.view().active_highlight, None);
    }

    #[test]
    fn nav_click_without_anchor_still_highlights() {
        let mut state = PageState::new(3, AnchorSet::default());
        let effects = state
            .dispatch(UiEvent::NavClicked(SectionKey::Skills))
            .unwrap();
        assert!(!effects.iter().any(|e| matches!(e, Effect::ScrollTo(_))));
        assert_eq!(state.view().active_highlight, Some(SectionKey::Skills));
    }

    #[test]
    fn carousel_scenario_wraps_through_all_projects() {
        let titles = project_titles();
        let mut state = page_state();
        state.dispatch(UiEvent::ProjectTitleClicked(0)).unwrap();
        let mut seen = vec![titles[state.view().open_project.unwrap()].clone()];
        for _ in 0..3 {
            state
                .dispatch(UiEvent::KeyPressed(Key::ArrowRight))
                .unwrap();
            seen.push(titles[state.view().open_project.unwrap()].clone());
        }
        assert_eq!(
            seen,
            vec![
                "Lab de Pentesting – Metasploitable 2",
                "Password Hashing CLI",
                "Landing minimalista",
                "Lab de Pentesting – Metasploitable 2",
            ]
        );
    }

    #[test]
    fn escape_closes_modal_and_detaches_listener() {
        let mut state = page_state();
        let opened = state.dispatch(UiEvent::ProjectTitleClicked(2)).unwrap();
        assert!(opened.contains(&Effect::AttachKeyListener));
        assert!(state.key_listener_attached());

        let closed = state.dispatch(UiEvent::KeyPressed(Key::Escape)).unwrap();
        assert_eq!(
            closed,
            vec![
                Effect::HideOverlay(OverlayKind::Project),
                Effect::DetachKeyListener
            ]
        );
        assert_eq!(state.view().open_project, None);
        assert!(!state.key_listener_attached());
    }

    #[test]
    fn listener_effects_balance_over_cycles() {
        let mut state = page_state();
        let mut attached = 0i32;
        let events = [
            UiEvent::ProjectTitleClicked(0),
            UiEvent::ProjectTitleClicked(1),
            UiEvent::ProjectNextClicked,
            UiEvent::Dismissed(OverlayKind::Project, Dismissal::Backdrop),
            UiEvent::KeyPressed(Key::ArrowRight),
            UiEvent::ProjectTitleClicked(2),
            UiEvent::Dismissed(OverlayKind::Project, Dismissal::CloseButton),
            UiEvent::ProjectTitleClicked(1),
            UiEvent::KeyPressed(Key::Escape),
        ];
        for event in events {
            for effect in state.dispatch(event).unwrap() {
                match effect {
                    Effect::AttachKeyListener => attached += 1,
                    Effect::DetachKeyListener => attached -= 1,
                    _ => {}
                }
                assert!((0..=1).contains(&attached), "listener leaked");
            }
        }
        assert_eq!(attached, 0);
    }

    #[test]
    fn modal_buttons_cycle() {
        let mut state = page_state();
        state.dispatch(UiEvent::ProjectTitleClicked(0)).unwrap();
        let effects = state.dispatch(UiEvent::ProjectPrevClicked).unwrap();
        assert_eq!(effects, vec![Effect::ShowProject(2)]);
        let effects = state.dispatch(UiEvent::ProjectNextClicked).unwrap();
        assert_eq!(effects, vec![Effect::ShowProject(0)]);
    }

    #[test]
    fn keys_do_nothing_while_modal_closed() {
        let mut state = page_state();
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight] {
            assert!(state.dispatch(UiEvent::KeyPressed(key)).unwrap().is_empty());
        }
        assert_eq!(state.view(), PageView::default());
    }

    #[test]
    fn contact_cta_opens_overlay_and_highlights_contact() {
        let mut state = page_state();
        let effects = state.dispatch(UiEvent::ContactCtaClicked).unwrap();
        assert!(effects.contains(&Effect::ShowOverlay(OverlayKind::Contact)));
        let view = state.view();
        assert!(view.contact_open);
        assert_eq!(view.active_highlight, Some(SectionKey::Contact));

        let effects = state
            .dispatch(UiEvent::Dismissed(OverlayKind::Contact, Dismissal::Backdrop))
            .unwrap();
        assert_eq!(effects, vec![Effect::HideOverlay(OverlayKind::Contact)]);
        assert!(!state.view().contact_open);
    }

    #[test]
    fn contact_flag_false_after_every_close_action() {
        for dismissal in [Dismissal::Backdrop, Dismissal::CloseButton] {
            let mut state = page_state();
            state.dispatch(UiEvent::ContactCtaClicked).unwrap();
            state
                .dispatch(UiEvent::Dismissed(OverlayKind::Contact, dismissal))
                .unwrap();
            assert!(!state.view().contact_open);
        }
    }

    #[test]
    fn escape_does_not_touch_contact_overlay() {
        let mut state = page_state();
        state.dispatch(UiEvent::ContactCtaClicked).unwrap();
        state.dispatch(UiEvent::KeyPressed(Key::Escape)).unwrap();
        assert!(state.view().contact_open);
    }

    #[test]
    fn out_of_range_title_click_is_rejected() {
        let mut state = page_state();
        let err = state.dispatch(UiEvent::ProjectTitleClicked(9)).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 9, count: 3 });
        assert!(!state.key_listener_attached());
    }

    #[test]
    fn stale_sweep_completion_keeps_new_highlight() {
        let mut state = page_state();
        let first = state
            .dispatch(UiEvent::NavClicked(SectionKey::Profile))
            .unwrap();
        state
            .dispatch(UiEvent::NavClicked(SectionKey::Projects))
            .unwrap();
        let effects = state
            .dispatch(UiEvent::SweepFinished {
                key: SectionKey::Profile,
                generation: sweep_generation(&first),
            })
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.view().active_highlight, Some(SectionKey::Projects));
        assert_eq!(state.highlight().active_key(), Some(SectionKey::Projects));
    }

    #[test]
    fn retargeting_open_modal_keeps_single_listener() {
        let mut state = page_state();
        state.dispatch(UiEvent::ProjectTitleClicked(1)).unwrap();
        let effects = state.dispatch(UiEvent::ProjectTitleClicked(2)).unwrap();
        assert_eq!(effects, vec![Effect::ShowProject(2)]);
        assert_eq!(state.view().open_project, Some(2));
    }
}
