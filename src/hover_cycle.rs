// src/hover_cycle.rs

/// Default delay between two cover swaps while the pointer rests on a card.
pub const HOVER_INTERVAL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Cycling,
}

/// Per-card cover rotation. The card owns the actual timer; this only decides
/// which image index the cover should show next.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverCycle {
    image_count: usize,
    phase: HoverPhase,
    index: usize,
}

impl HoverCycle {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            phase: HoverPhase::Idle,
            index: 0,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Index the next tick will display.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pointer entered the card. Returns `true` when a timer should be
    /// (re)started; items without images never leave `Idle`.
    pub fn enter(&mut self) -> bool {
        if self.image_count == 0 {
            return false;
        }
        self.index = 1 % self.image_count;
        self.phase = HoverPhase::Cycling;
        true
    }

    /// Timer fired. Returns the image index to swap the cover to.
    pub fn tick(&mut self) -> Option<usize> {
        if self.phase != HoverPhase::Cycling || self.image_count == 0 {
            return None;
        }
        let shown = self.index;
        self.index = (self.index + 1) % self.image_count;
        Some(shown)
    }

    /// Pointer left the card. Returns the index the cover returns to, if any.
    pub fn leave(&mut self) -> Option<usize> {
        self.phase = HoverPhase::Idle;
        self.index = 0;
        (self.image_count > 0).then_some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Visible,
    /// `fade` class applied, waiting for the opacity transition to end.
    FadingOut,
    /// New source assigned, `fade` is removed on the next animation frame.
    Swapped,
}

/// What the card has to schedule after a fade step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    /// Wait for `transitionend`, with a guard timeout for this generation.
    AwaitTransition(u64),
    /// Cover swapped; fade back in on the next frame for this generation.
    Swapped(u64),
}

/// Cover fade-out / swap / fade-in sequence. Every new fade bumps the
/// generation, and guard or frame callbacks from older fades are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverFade {
    phase: FadePhase,
    generation: u64,
    shown: usize,
    pending: Option<usize>,
}

impl Default for CoverFade {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverFade {
    pub fn new() -> Self {
        Self {
            phase: FadePhase::Visible,
            generation: 0,
            shown: 0,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Image index the cover currently displays.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether the cover carries the `fade` class.
    pub fn is_faded(&self) -> bool {
        self.phase != FadePhase::Visible
    }

    /// Start fading towards `index`. A fade already in progress is
    /// retargeted; a cover that is already invisible swaps at once.
    pub fn begin(&mut self, index: usize) -> FadeStep {
        self.generation += 1;
        self.pending = Some(index);
        match self.phase {
            FadePhase::Visible | FadePhase::FadingOut => {
                self.phase = FadePhase::FadingOut;
                FadeStep::AwaitTransition(self.generation)
            }
            FadePhase::Swapped => FadeStep::Swapped(self.swap()),
        }
    }

    /// `transitionend` on the cover. Only the end of a fade-out swaps; the
    /// end of the fade-in returns `None`.
    pub fn faded_out(&mut self) -> Option<u64> {
        (self.phase == FadePhase::FadingOut).then(|| self.swap())
    }

    /// Guard timeout for `generation` fired without a `transitionend`.
    pub fn guard(&mut self, generation: u64) -> Option<u64> {
        if generation != self.generation {
            return None;
        }
        self.faded_out()
    }

    /// Animation frame after a swap. Returns whether the fade-in happened.
    pub fn frame(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != FadePhase::Swapped {
            return false;
        }
        self.phase = FadePhase::Visible;
        true
    }

    fn swap(&mut self) -> u64 {
        if let Some(index) = self.pending.take() {
            self.shown = index;
        }
        self.phase = FadePhase::Swapped;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_has_period_k() {
        for k in 1..=4 {
            let mut cycle = HoverCycle::new(k);
            assert!(cycle.enter());
            let start = cycle.index();
            let shown: Vec<usize> = (0..k).filter_map(|_| cycle.tick()).collect();
            assert_eq!(shown.len(), k);
            assert_eq!(cycle.index(), start);
            // every image is visited once per period
            let mut sorted = shown.clone();
            sorted.sort();
            assert_eq!(sorted, (0..k).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_cycle_starts_at_second_image() {
        let mut cycle = HoverCycle::new(3);
        cycle.enter();
        assert_eq!(cycle.tick(), Some(1));
        assert_eq!(cycle.tick(), Some(2));
        assert_eq!(cycle.tick(), Some(0));
        assert_eq!(cycle.tick(), Some(1));
    }

    #[test]
    fn test_single_image_never_changes() {
        let mut cycle = HoverCycle::new(1);
        assert!(cycle.enter());
        for _ in 0..5 {
            assert_eq!(cycle.tick(), Some(0));
        }
        assert_eq!(cycle.leave(), Some(0));
    }

    #[test]
    fn test_no_images_stays_idle() {
        let mut cycle = HoverCycle::new(0);
        assert!(!cycle.enter());
        assert_eq!(cycle.phase(), HoverPhase::Idle);
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.leave(), None);
    }

    #[test]
    fn test_leave_resets() {
        let mut cycle = HoverCycle::new(4);
        cycle.enter();
        cycle.tick();
        cycle.tick();
        assert_eq!(cycle.leave(), Some(0));
        assert_eq!(cycle.phase(), HoverPhase::Idle);
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.tick(), None);
    }

    #[test]
    fn test_reenter_restarts_from_second_image() {
        let mut cycle = HoverCycle::new(3);
        cycle.enter();
        cycle.tick();
        cycle.tick();
        assert!(cycle.enter());
        assert_eq!(cycle.tick(), Some(1));
    }

    #[test]
    fn test_fade_swaps_after_transition() {
        let mut fade = CoverFade::new();
        let FadeStep::AwaitTransition(generation) = fade.begin(2) else {
            panic!("visible cover must wait for its transition");
        };
        assert!(fade.is_faded());
        assert_eq!(fade.shown(), 0);
        assert_eq!(fade.faded_out(), Some(generation));
        assert_eq!(fade.shown(), 2);
        assert!(fade.frame(generation));
        assert_eq!(fade.phase(), FadePhase::Visible);
        assert!(!fade.is_faded());
    }

    #[test]
    fn test_leave_during_fade_out_retargets() {
        let mut fade = CoverFade::new();
        fade.begin(1);
        let step = fade.begin(0);
        assert!(matches!(step, FadeStep::AwaitTransition(_)));
        assert_eq!(fade.phase(), FadePhase::FadingOut);
        fade.faded_out();
        assert_eq!(fade.shown(), 0);
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let mut fade = CoverFade::new();
        fade.begin(1);
        let old = fade.faded_out().unwrap();
        let FadeStep::Swapped(current) = fade.begin(2) else {
            panic!("swapped cover must swap at once");
        };
        assert_ne!(old, current);
        assert!(!fade.frame(old));
        assert_eq!(fade.phase(), FadePhase::Swapped);
        assert!(fade.frame(current));
    }

    #[test]
    fn test_fade_from_swapped_swaps_at_once() {
        let mut fade = CoverFade::new();
        fade.begin(1);
        fade.faded_out();
        assert_eq!(fade.shown(), 1);
        assert!(matches!(fade.begin(3), FadeStep::Swapped(_)));
        assert_eq!(fade.shown(), 3);
        assert_eq!(fade.phase(), FadePhase::Swapped);
    }

    #[test]
    fn test_fade_in_transition_end_does_not_swap() {
        let mut fade = CoverFade::new();
        fade.begin(1);
        let generation = fade.faded_out().unwrap();
        fade.frame(generation);
        assert_eq!(fade.faded_out(), None);
        assert_eq!(fade.phase(), FadePhase::Visible);
        assert_eq!(fade.shown(), 1);
    }

    #[test]
    fn test_guard_swaps_only_for_current_generation() {
        let mut fade = CoverFade::new();
        let FadeStep::AwaitTransition(first) = fade.begin(1) else {
            panic!("visible cover must wait for its transition");
        };
        fade.begin(2);
        assert_eq!(fade.guard(first), None);
        assert_eq!(fade.phase(), FadePhase::FadingOut);
        let generation = first + 1;
        assert_eq!(fade.guard(generation), Some(generation));
        assert_eq!(fade.shown(), 2);
        // a guard after the swap already happened does nothing
        assert_eq!(fade.guard(generation), None);
    }
}
