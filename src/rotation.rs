//! Testimonial rotation state machine. The carousel component owns the
//! timers; this module owns every index transition so the bounds invariant
//! (`active < len` whenever `len > 0`) lives in one place.

/// Auto-advance cadence.
pub const AUTO_ADVANCE_MS: u32 = 5_000;
/// Delay before auto-play resumes after a manual interaction.
pub const RESUME_COOLDOWN_MS: u32 = 10_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
    len: usize,
    active: usize,
    auto_playing: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RotationAction {
    /// Interval tick; a no-op unless auto-playing over two or more entries.
    Tick,
    /// Manual next: pauses auto-play.
    Next,
    /// Manual previous: pauses auto-play, wraps to the end at index 0.
    Previous,
    /// Indicator jump: pauses auto-play, sets the index directly.
    Jump(usize),
    /// Cooldown elapsed.
    Resume,
    /// The displayable list changed size; the index must never go stale.
    Resize(usize),
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            auto_playing: true,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Controls are inert with fewer than two entries.
    pub fn navigable(&self) -> bool {
        self.len > 1
    }

    pub fn apply(self, action: RotationAction) -> Self {
        match action {
            RotationAction::Tick => self.ticked(),
            RotationAction::Next => self.manual(self.step_forward()),
            RotationAction::Previous => self.manual(self.step_back()),
            RotationAction::Jump(index) => self.manual(index.min(self.len.saturating_sub(1))),
            RotationAction::Resume => Self {
                auto_playing: true,
                ..self
            },
            RotationAction::Resize(len) => self.resized(len),
        }
    }

    fn ticked(self) -> Self {
        if !self.auto_playing || !self.navigable() {
            return self;
        }
        Self {
            active: self.step_forward(),
            ..self
        }
    }

    fn manual(self, index: usize) -> Self {
        if !self.navigable() {
            return self;
        }
        Self {
            active: index,
            auto_playing: false,
            ..self
        }
    }

    fn resized(self, len: usize) -> Self {
        let active = if len == 0 { 0 } else { self.active % len };
        Self {
            len,
            active,
            ..self
        }
    }

    fn step_forward(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.active + 1) % self.len
        }
    }

    fn step_back(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.active + self.len - 1) % self.len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_cycles_back_to_start() {
        let mut rotation = Rotation::new(4);
        for _ in 0..4 {
            rotation = rotation.apply(RotationAction::Tick);
        }
        assert_eq!(rotation.active(), 0);
        assert!(rotation.is_auto_playing());
    }

    #[test]
    fn index_stays_in_bounds_across_transitions() {
        let mut rotation = Rotation::new(3);
        let actions = [
            RotationAction::Tick,
            RotationAction::Next,
            RotationAction::Previous,
            RotationAction::Jump(2),
            RotationAction::Tick,
            RotationAction::Resume,
        ];
        for action in actions {
            rotation = rotation.apply(action);
            assert!(rotation.active() < rotation.len());
        }
    }

    #[test]
    fn previous_wraps_to_last_entry() {
        let rotation = Rotation::new(5).apply(RotationAction::Previous);
        assert_eq!(rotation.active(), 4);
        assert!(!rotation.is_auto_playing());
    }

    #[test]
    fn manual_navigation_pauses_until_resume() {
        let rotation = Rotation::new(3).apply(RotationAction::Next);
        assert!(!rotation.is_auto_playing());
        // A tick during the cooldown must not move the index.
        let parked = rotation.apply(RotationAction::Tick);
        assert_eq!(parked.active(), rotation.active());
        let resumed = parked.apply(RotationAction::Resume);
        assert!(resumed.is_auto_playing());
        assert_eq!(resumed.apply(RotationAction::Tick).active(), 2);
    }

    #[test]
    fn jump_clamps_out_of_range_targets() {
        let rotation = Rotation::new(3).apply(RotationAction::Jump(99));
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn single_entry_is_inert() {
        let rotation = Rotation::new(1);
        assert!(!rotation.navigable());
        assert_eq!(rotation.apply(RotationAction::Tick).active(), 0);
        assert_eq!(rotation.apply(RotationAction::Next).active(), 0);
        // Manual actions on an inert list must not strand auto-play off.
        assert!(rotation.apply(RotationAction::Next).is_auto_playing());
    }

    #[test]
    fn empty_list_never_panics() {
        let rotation = Rotation::new(0);
        assert_eq!(rotation.apply(RotationAction::Tick).active(), 0);
        assert_eq!(rotation.apply(RotationAction::Previous).active(), 0);
    }

    #[test]
    fn resize_reclamps_a_stale_index() {
        let rotation = Rotation::new(5).apply(RotationAction::Jump(4));
        let shrunk = rotation.apply(RotationAction::Resize(2));
        assert!(shrunk.active() < 2);
        let emptied = shrunk.apply(RotationAction::Resize(0));
        assert_eq!(emptied.active(), 0);
        let regrown = emptied.apply(RotationAction::Resize(3));
        assert_eq!(regrown.active(), 0);
    }
}
