//! Core engine types: cards, bonus-time bookkeeping, RNG.
//!
//! This module contains the content-agnostic building blocks. The match
//! rule itself lives in `crate::game`; nothing here mutates a card except
//! through the crate-internal transitions the game drives.

pub mod card;
pub mod rng;

pub use card::{Card, CardId, BONUS_TIME_LIMIT};
pub use rng::{DeckRng, DeckRngState};
