//! Client-side listing controller for the infinite-scroll lead table.
//!
//! Drives successive page fetches as the user scrolls or edits the search
//! box, merges pages into one de-duplicated display sequence, and applies
//! optimistic mutations. The controller owns no I/O and no clock: the shell
//! feeds it input events and timestamps, performs the [`PageRequest`]s it
//! emits, and reports results back. That keeps every transition a plain
//! function call and every guarantee a unit test.
//!
//! Per search-term session the controller is a small state machine:
//!
//! ```text
//! Idle -> Fetching        (sentinel visible, or a committed search edit)
//! Fetching -> Idle        (page loaded, more pages exist)
//! Fetching -> Exhausted   (page loaded, next_cursor = None; terminal)
//! Fetching -> Failed      (fetch failed; rows untouched)
//! Failed -> Fetching      (sentinel re-entered / input re-committed)
//! ```
//!
//! Each session carries a generation number; results tagged with a stale
//! generation are discarded wholesale. That is the whole cancellation story:
//! superseded fetches are ignored, not aborted.

use std::time::{Duration, Instant};

use crate::domain::lead::LeadStatus;
use crate::dto::leads::{LeadDto, LeadsPage};

/// Quiet period a search edit must survive before a fetch is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A fetch the shell should perform against `GET /api/v1/leads`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Session this request belongs to; echo it back into
    /// [`ListingController::page_loaded`] / [`ListingController::page_failed`].
    pub generation: u64,
    pub term: String,
    pub cursor: Option<String>,
}

/// Fetch state of the current search-term session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Failed(String),
    /// `next_cursor` came back `None`; no further fetches for this term.
    Exhausted,
}

#[derive(Debug)]
pub struct ListingController {
    quiet_period: Duration,
    /// Most recent un-committed search edit.
    pending_input: Option<(String, Instant)>,
    term: String,
    generation: u64,
    phase: Phase,
    cursor: Option<String>,
    /// Whether the current session has replaced the rows yet.
    loaded_for_session: bool,
    rows: Vec<LeadDto>,
    /// Last surfaced mutation error, for the shell to display.
    mutation_error: Option<String>,
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingController {
    pub fn new() -> Self {
        Self::with_debounce(SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending_input: None,
            term: String::new(),
            generation: 0,
            phase: Phase::Idle,
            cursor: None,
            loaded_for_session: false,
            rows: Vec::new(),
            mutation_error: None,
        }
    }

    /// The flattened, de-duplicated display sequence.
    pub fn rows(&self) -> &[LeadDto] {
        &self.rows
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Committed search term of the current session.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mutation_error(&self) -> Option<&str> {
        self.mutation_error.as_deref()
    }

    /// Record a search-box edit. Nothing is fetched until the edit survives
    /// the quiet period; successive edits reset the clock.
    pub fn input_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_input = Some((text.into(), now));
    }

    /// Advance the debounce clock. Returns a first-page request when a
    /// changed term has been stable for the quiet period.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<PageRequest> {
        let (text, edited_at) = self.pending_input.as_ref()?;
        if now.duration_since(*edited_at) < self.quiet_period {
            return None;
        }
        let text = text.clone();
        self.pending_input = None;
        if text == self.term {
            // Same term re-committed: not a new session, nothing to fetch.
            return None;
        }
        Some(self.start_session(text))
    }

    /// The scroll sentinel became visible. Returns the next-page request when
    /// one is warranted: never while a fetch is in flight, never after
    /// exhaustion, and never before page N's cursor is known.
    pub fn sentinel_reached(&mut self) -> Option<PageRequest> {
        match self.phase {
            Phase::Idle if !self.loaded_for_session || self.cursor.is_some() => {
                self.phase = Phase::Fetching;
                Some(PageRequest {
                    generation: self.generation,
                    term: self.term.clone(),
                    cursor: self.cursor.clone(),
                })
            }
            // Re-entering the sentinel is the user-triggered retry.
            Phase::Failed(_) => {
                self.phase = Phase::Fetching;
                Some(PageRequest {
                    generation: self.generation,
                    term: self.term.clone(),
                    cursor: self.cursor.clone(),
                })
            }
            _ => None,
        }
    }

    /// A page fetch succeeded. Stale generations are discarded even though
    /// they arrive later: last-applied-wins by term identity, not by arrival
    /// order.
    pub fn page_loaded(&mut self, generation: u64, page: LeadsPage) {
        if generation != self.generation {
            return;
        }
        if !self.loaded_for_session {
            // First page of a new session replaces the previous term's rows.
            self.rows.clear();
            self.loaded_for_session = true;
        }
        for lead in page.leads {
            if !self.rows.iter().any(|row| row.id == lead.id) {
                self.rows.push(lead);
            }
        }
        self.cursor = page.next_cursor;
        self.phase = if self.cursor.is_some() {
            Phase::Idle
        } else {
            Phase::Exhausted
        };
    }

    /// A page fetch failed. Accumulated rows are left untouched; the failure
    /// is surfaced through [`Self::phase`].
    pub fn page_failed(&mut self, generation: u64, message: impl Into<String>) {
        if generation != self.generation {
            return;
        }
        self.phase = Phase::Failed(message.into());
    }

    /// Optimistically flip a row's status ahead of server confirmation.
    pub fn set_status_optimistic(&mut self, lead_id: &str, status: LeadStatus) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == lead_id) {
            row.status = status;
        }
    }

    /// Optimistically drop a row ahead of server confirmation.
    pub fn remove_optimistic(&mut self, lead_id: &str) {
        self.rows.retain(|row| row.id != lead_id);
    }

    /// A mutation was confirmed by the server: invalidate and refetch so the
    /// server-confirmed state becomes authoritative.
    pub fn refresh(&mut self) -> PageRequest {
        self.mutation_error = None;
        self.start_session_same_term()
    }

    /// A mutation failed. The optimistic edit stays visible locally; the
    /// error must be surfaced so the discrepancy is not silent, and the next
    /// authoritative refresh restores server truth.
    pub fn mutation_failed(&mut self, message: impl Into<String>) {
        self.mutation_error = Some(message.into());
    }

    fn start_session(&mut self, term: String) -> PageRequest {
        self.term = term;
        self.start_session_same_term()
    }

    fn start_session_same_term(&mut self) -> PageRequest {
        self.generation += 1;
        self.cursor = None;
        self.loaded_for_session = false;
        self.phase = Phase::Fetching;
        PageRequest {
            generation: self.generation,
            term: self.term.clone(),
            cursor: None,
        }
    }
}
