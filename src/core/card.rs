//! Card model: identity, orientation, match state, bonus-time bookkeeping.
//!
//! A [`Card`] is identified by a stable [`CardId`], never by its position in
//! the deck (shuffling permutes positions, ids survive).
//!
//! ## Bonus Time
//!
//! Each card has a 5-second bonus budget ([`BONUS_TIME_LIMIT`]) that drains
//! while the card is face-up and unmatched. Matching a card while budget
//! remains earns the bonus; the budget freezes at the moment of the match.
//! Flipping a card back face-down pauses the drain and preserves the time
//! already spent.
//!
//! All time-derived values are pure functions of the stored bookkeeping and
//! an explicit `now` timestamp. The card never reads the clock itself and
//! nothing here runs a timer; callers pass `Instant::now()` (or a simulated
//! instant in tests) at evaluation time.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Per-card bonus budget. Drains while the card is face-up and unmatched.
pub const BONUS_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Unique identifier for a card, stable for the card's lifetime.
///
/// Ids are assigned at deck construction: pair index `p` produces the two
/// ids `2p` and `2p + 1`. Lookup and equality go through the id, not the
/// deck position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card in the deck.
///
/// Identity (`id`, `content`) is immutable. Orientation and match state are
/// mutated only by the engine's `choose` transitions; `matched` is terminal
/// and never reset.
#[derive(Clone, Debug)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    matched: bool,
    /// Face-up time accumulated during previous face-up sessions.
    past_face_up_time: Duration,
    /// Start of the current accrual session. `None` when not accruing.
    last_face_up_at: Option<Instant>,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card with zero accrued bonus time.
    #[must_use]
    pub(crate) fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            past_face_up_time: Duration::ZERO,
            last_face_up_at: None,
        }
    }

    /// This card's stable identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card's face content. Two cards sharing content form a pair.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Is the card currently face-up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has the card been resolved as part of a correct pair?
    ///
    /// Terminal: once true, never reset.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    // === Derived bonus-time values ===

    /// Total face-up time as of `now`: past sessions plus the current one.
    #[must_use]
    pub fn face_up_time(&self, now: Instant) -> Duration {
        match self.last_face_up_at {
            Some(started) => self.past_face_up_time + now.saturating_duration_since(started),
            None => self.past_face_up_time,
        }
    }

    /// Bonus budget left as of `now`. Zero once the budget is exhausted.
    #[must_use]
    pub fn bonus_time_remaining(&self, now: Instant) -> Duration {
        BONUS_TIME_LIMIT.saturating_sub(self.face_up_time(now))
    }

    /// Fraction of the bonus budget left as of `now`, in `0.0..=1.0`.
    ///
    /// Presentation layers animate this directly (e.g. a shrinking pie).
    /// Zero if the budget itself is zero.
    #[must_use]
    pub fn bonus_percent_remaining(&self, now: Instant) -> f64 {
        if BONUS_TIME_LIMIT.is_zero() {
            return 0.0;
        }
        self.bonus_time_remaining(now).as_secs_f64() / BONUS_TIME_LIMIT.as_secs_f64()
    }

    /// Was the card matched before its bonus budget ran out?
    #[must_use]
    pub fn has_earned_bonus(&self, now: Instant) -> bool {
        self.matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Is the bonus budget currently draining?
    ///
    /// True while the card is face-up, unmatched, and budget remains.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Instant) -> bool {
        self.face_up && !self.matched && !self.bonus_time_remaining(now).is_zero()
    }

    // === Transitions (driven exclusively by the engine's choose) ===

    /// Flip the card. Flipping up starts bonus accrual, flipping down stops
    /// it and folds the elapsed session into `past_face_up_time`.
    pub(crate) fn set_face_up(&mut self, face_up: bool, now: Instant) {
        self.face_up = face_up;
        if face_up {
            self.start_bonus_accrual(now);
        } else {
            self.stop_bonus_accrual(now);
        }
    }

    /// Resolve the card as matched. Freezes the bonus clock.
    pub(crate) fn set_matched(&mut self, now: Instant) {
        self.matched = true;
        self.stop_bonus_accrual(now);
    }

    fn start_bonus_accrual(&mut self, now: Instant) {
        if self.is_consuming_bonus_time(now) && self.last_face_up_at.is_none() {
            self.last_face_up_at = Some(now);
        }
    }

    fn stop_bonus_accrual(&mut self, now: Instant) {
        self.past_face_up_time = self.face_up_time(now);
        self.last_face_up_at = None;
    }
}
