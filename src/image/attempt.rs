//! Sequential load attempts over an image's candidates.
//!
//! ```text
//! Trying(0) --error--> Trying(1) --error--> ... --error--> Exhausted
//!     |                    |
//!     +------load----------+------------------------------> Succeeded(i)
//! ```
//!
//! Every in-flight attempt carries a [`Ticket`]. Re-targeting to a new path
//! bumps the generation, so a late notification for the old path no longer
//! matches and is dropped instead of overwriting the newer state.

use super::candidates::resolve_candidates;
use super::loader::ImageLoader;

/// Where a load sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Waiting on the load of candidate `i`.
    Trying(usize),
    /// Candidate `i` loaded. Terminal.
    Succeeded(usize),
    /// Every candidate failed. Terminal; the placeholder is shown.
    Exhausted,
}

/// Identifies one in-flight attempt: candidate `index` of path `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    index: usize,
}

/// Result of feeding a notification into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Start loading this candidate next.
    Next(Ticket, String),
    /// Candidate at this index loaded.
    Succeeded(usize),
    /// All candidates failed.
    Exhausted,
    /// Notification did not belong to the current attempt.
    Stale,
}

/// Load-attempt state for one image element.
#[derive(Debug, Clone)]
pub struct LoadAttempt {
    path: String,
    modern: String,
    candidates: Vec<String>,
    generation: u64,
    state: AttemptState,
}

impl LoadAttempt {
    /// Start a sequence for `path` at `Trying(0)`.
    pub fn new(path: &str, modern: &str) -> Self {
        Self {
            path: path.to_string(),
            modern: modern.to_string(),
            candidates: resolve_candidates(path, modern),
            generation: 0,
            state: AttemptState::Trying(0),
        }
    }

    /// Start a sequence over an explicit candidate list.
    ///
    /// An empty list is immediately exhausted.
    pub fn from_candidates(candidates: Vec<String>) -> Self {
        let state = if candidates.is_empty() {
            AttemptState::Exhausted
        } else {
            AttemptState::Trying(0)
        };
        Self {
            path: candidates.first().cloned().unwrap_or_default(),
            modern: String::new(),
            candidates,
            generation: 0,
            state,
        }
    }

    /// Switch to a new path, abandoning whatever is in flight.
    ///
    /// Returns the first attempt of the new sequence, or `None` when the
    /// path is unchanged and the current sequence keeps running.
    pub fn retarget(&mut self, path: &str) -> Option<(Ticket, &str)> {
        if self.path == path {
            return None;
        }
        self.path = path.to_string();
        self.candidates = resolve_candidates(path, &self.modern);
        self.generation += 1;
        self.state = AttemptState::Trying(0);
        self.current()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The attempt in flight, if the sequence is still running.
    pub fn current(&self) -> Option<(Ticket, &str)> {
        match self.state {
            AttemptState::Trying(index) => Some((self.ticket(index), &self.candidates[index])),
            _ => None,
        }
    }

    /// Whether a loading indicator should still be shown.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AttemptState::Trying(_))
    }

    /// URL to put on the element right now.
    pub fn display_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.state {
            AttemptState::Trying(i) | AttemptState::Succeeded(i) => &self.candidates[i],
            AttemptState::Exhausted => placeholder,
        }
    }

    /// Platform reported a successful load.
    pub fn on_load(&mut self, ticket: Ticket) -> Transition {
        if !self.is_current(ticket) {
            return Transition::Stale;
        }
        self.state = AttemptState::Succeeded(ticket.index);
        Transition::Succeeded(ticket.index)
    }

    /// Platform reported a load error.
    pub fn on_error(&mut self, ticket: Ticket) -> Transition {
        if !self.is_current(ticket) {
            return Transition::Stale;
        }
        let next = ticket.index + 1;
        if next < self.candidates.len() {
            self.state = AttemptState::Trying(next);
            Transition::Next(self.ticket(next), self.candidates[next].clone())
        } else {
            self.state = AttemptState::Exhausted;
            Transition::Exhausted
        }
    }

    /// Drive the current sequence to a terminal state with a synchronous
    /// loader. See [`attempt_load`].
    ///
    /// A sequence that is already terminal is left alone; neither callback
    /// runs.
    pub fn run<L, S, E>(&mut self, loader: &L, on_success: S, on_exhausted: E) -> AttemptState
    where
        L: ImageLoader + ?Sized,
        S: FnOnce(usize),
        E: FnOnce(),
    {
        if !self.is_loading() {
            return self.state;
        }

        let mut next = self.current().map(|(t, u)| (t, u.to_string()));
        while let Some((ticket, url)) = next {
            let transition = match loader.load(&url) {
                Ok(()) => self.on_load(ticket),
                Err(e) => {
                    crate::debug!("image"; "candidate {} failed: {}", url, e);
                    self.on_error(ticket)
                }
            };
            next = match transition {
                Transition::Next(ticket, url) => Some((ticket, url)),
                Transition::Succeeded(index) => {
                    on_success(index);
                    return self.state;
                }
                Transition::Exhausted => {
                    on_exhausted();
                    return self.state;
                }
                Transition::Stale => None,
            };
        }
        self.state
    }

    fn ticket(&self, index: usize) -> Ticket {
        Ticket {
            generation: self.generation,
            index,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.state == AttemptState::Trying(ticket.index)
    }
}

/// Drive a full sequence with a synchronous loader.
///
/// Candidates are tried strictly one after another. `on_success` receives
/// the index of the first candidate that loads; `on_exhausted` runs once if
/// none does. Exactly one of the two callbacks is invoked.
pub fn attempt_load<L, S, E>(
    candidates: &[String],
    loader: &L,
    on_success: S,
    on_exhausted: E,
) -> AttemptState
where
    L: ImageLoader + ?Sized,
    S: FnOnce(usize),
    E: FnOnce(),
{
    if candidates.is_empty() {
        on_exhausted();
        return AttemptState::Exhausted;
    }
    LoadAttempt::from_candidates(candidates.to_vec()).run(loader, on_success, on_exhausted)
}
