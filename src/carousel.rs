//! Project modal / carousel state machine.
//!
//! ```text
//!   Closed ──open(i)──▶ Open(i) ──next()──▶ Open((i + 1) mod N)
//!     ▲                   │     ──prev()──▶ Open((i + N - 1) mod N)
//!     └─────close()───────┘
//! ```
//!
//! Navigation is cyclic, so the buttons are never disabled and an index
//! outside `[0, N)` cannot be reached by `next`/`prev`. `next` and `prev` are
//! no-ops while closed. The keyboard surface (Escape, ArrowLeft, ArrowRight)
//! only exists while the modal is open; [`Carousel::handle_key`] ignores
//! everything else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("there are no projects to show")]
    Empty,
    #[error("project {index} does not exist (only {count} projects)")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

/// Keys the page runtime forwards while the modal listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Anything else; always ignored.
    Other,
}

/// What a bound key asks the open modal to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    /// Dismiss the modal, as [`crate::overlay::Dismissal::Escape`].
    Dismiss,
    Next,
    Prev,
}

/// DOM `KeyboardEvent.key` names the modal listens for. Shipped to the page
/// runtime as its key map.
pub const KEY_BINDINGS: [(&str, Key); 4] = [
    ("Escape", Key::Escape),
    ("Esc", Key::Escape),
    ("ArrowRight", Key::ArrowRight),
    ("ArrowLeft", Key::ArrowLeft),
];

impl Key {
    pub fn action(self) -> Option<KeyAction> {
        match self {
            Key::Escape => Some(KeyAction::Dismiss),
            Key::ArrowRight => Some(KeyAction::Next),
            Key::ArrowLeft => Some(KeyAction::Prev),
            Key::Other => None,
        }
    }
}

/// What a key press did to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Closed,
    Moved(usize),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    state: ModalState,
    count: usize,
}

impl Carousel {
    /// A closed carousel over `count` projects.
    pub fn new(count: usize) -> Self {
        Self {
            state: ModalState::Closed,
            count,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.state {
            ModalState::Closed => None,
            ModalState::Open(i) => Some(i),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_index().is_some()
    }

    /// Show project `index`. Opening while already open retargets.
    pub fn open(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.count == 0 {
            return Err(CarouselError::Empty);
        }
        if index >= self.count {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.count,
            });
        }
        self.state = ModalState::Open(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Advance one project, wrapping after the last. No-op while closed.
    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Go back one project, wrapping before the first. No-op while closed.
    pub fn prev(&mut self) -> Option<usize> {
        self.step(-1)
    }

    fn step(&mut self, dir: isize) -> Option<usize> {
        let current = self.open_index()?;
        let next = wrap(current, dir, self.count);
        self.state = ModalState::Open(next);
        Some(next)
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key.action() {
            Some(KeyAction::Dismiss) => {
                self.close();
                KeyOutcome::Closed
            }
            Some(KeyAction::Next) => self.next().map_or(KeyOutcome::Ignored, KeyOutcome::Moved),
            Some(KeyAction::Prev) => self.prev().map_or(KeyOutcome::Ignored, KeyOutcome::Moved),
            None => KeyOutcome::Ignored,
        }
    }
}

/// `(index + dir + count) mod count`, for `count >= 1`.
fn wrap(index: usize, dir: isize, count: usize) -> usize {
    let count = count as isize;
    ((index as isize + dir).rem_euclid(count)) as usize
}
