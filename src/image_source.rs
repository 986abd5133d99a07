// src/image_source.rs
//
// Ordered candidate retry for a single image slot. The browser reports
// load/error asynchronously, so the chain is driven by those events instead
// of owning any callbacks itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The candidate at this index is currently being requested.
    Trying(usize),
    /// The candidate at this index loaded.
    Succeeded(usize),
    /// Every candidate failed (or there were none); the slot should be hidden.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackChain {
    candidates: Vec<String>,
    state: LoadState,
}

impl FallbackChain {
    pub fn new(candidates: Vec<String>) -> Self {
        let state = if candidates.is_empty() {
            LoadState::Exhausted
        } else {
            LoadState::Trying(0)
        };
        Self { candidates, state }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// URL that should be assigned to the slot, `None` once exhausted.
    pub fn current_url(&self) -> Option<&str> {
        match self.state {
            LoadState::Trying(i) | LoadState::Succeeded(i) => {
                self.candidates.get(i).map(String::as_str)
            }
            LoadState::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == LoadState::Exhausted
    }

    /// The candidate being tried failed. Moves on to the next one and returns
    /// it, or `None` when there is nothing left to try. Errors outside of the
    /// `Trying` state are ignored so a candidate is never requested twice.
    pub fn fail(&mut self) -> Option<&str> {
        let LoadState::Trying(i) = self.state else {
            return None;
        };
        let next = i + 1;
        if next < self.candidates.len() {
            self.state = LoadState::Trying(next);
            self.candidates.get(next).map(String::as_str)
        } else {
            self.state = LoadState::Exhausted;
            None
        }
    }

    /// The candidate being tried loaded.
    pub fn succeed(&mut self) {
        if let LoadState::Trying(i) = self.state {
            self.state = LoadState::Succeeded(i);
        }
    }
}

/// A fallback chain tagged with a generation. Each time the slot is pointed
/// at a new candidate list the generation moves on, and load/error reports
/// issued for an older generation are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    generation: u64,
    chain: FallbackChain,
}

impl ImageSlot {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            generation: 0,
            chain: FallbackChain::new(candidates),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    /// Point the slot at a new candidate list. Returns `false` when the list
    /// is the one already loaded, in which case nothing changes.
    pub fn reset(&mut self, candidates: Vec<String>) -> bool {
        if self.chain.candidates() == candidates.as_slice() {
            return false;
        }
        self.generation += 1;
        self.chain = FallbackChain::new(candidates);
        true
    }

    /// Apply an error report. Returns whether it was current.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            log::debug!(
                "Dropping stale image error (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        if self.chain.fail().is_none() && self.chain.is_exhausted() {
            log::debug!(
                "All {} image candidates failed, hiding slot",
                self.chain.candidates().len()
            );
        }
        true
    }

    /// Apply a load report. Returns whether it was current.
    pub fn succeed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.chain.succeed();
        true
    }
}
