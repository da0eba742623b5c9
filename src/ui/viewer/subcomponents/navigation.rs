// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component for moving through the photo sequence.
//!
//! Navigation never wraps. At either end the move is refused with
//! [`NavigationOutcome::AtBoundary`] and the index is left unchanged.

/// Direction of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the next photo.
    Next,
    /// Navigate to the previous photo.
    Previous,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The index moved.
    Moved { from: usize, to: usize },
    /// Already at the first or last photo.
    AtBoundary,
    /// The session is closed.
    Closed,
}

impl NavigationOutcome {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Position within a sequence of `len` photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    current: usize,
    len: usize,
}

impl State {
    /// Starts at `start`, clamped into the sequence. `len` must be non-zero.
    #[must_use]
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            current: start.min(len.saturating_sub(1)),
            len,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.current + 1 < self.len
    }

    /// Index a move in `direction` would land on.
    #[must_use]
    pub fn target(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Next => self.can_next().then(|| self.current + 1),
            Direction::Previous => self.can_prev().then(|| self.current - 1),
        }
    }

    /// Moves one step in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> NavigationOutcome {
        match self.target(direction) {
            Some(to) => {
                let from = self.current;
                self.current = to;
                NavigationOutcome::Moved { from, to }
            }
            None => NavigationOutcome::AtBoundary,
        }
    }

    /// `"3 / 10"` for the third of ten photos.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }

    /// Fraction of the sequence seen so far, in `(0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let progress = (self.current + 1) as f32 / self.len as f32;
        progress
    }
}
