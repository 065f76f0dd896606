//! # concentration
//!
//! A memory-matching (Concentration) card game engine.
//!
//! A deck of paired cards is revealed two at a time: a correct pair becomes
//! matched and stays resolved, a wrong pair is flipped back on the next
//! choice. Each card carries a decaying 5-second bonus budget that rewards
//! quick matches.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, input handling, or persistence.
//!    A presentation layer holds a [`GameSession`], forwards player intents
//!    (`choose`, `shuffle`, `restart`), and reads the card list back.
//!
//! 2. **Content-Agnostic**: The engine is generic over the card content
//!    type; any `PartialEq` payload works (emoji, image ids, words).
//!
//! 3. **Timer-Free**: Bonus time is a pure function of stored bookkeeping
//!    and an explicit `now` timestamp. Nothing inside the engine ticks;
//!    countdown animation is the presentation layer's problem.
//!
//! 4. **Total Operations**: Every intent is a total function over its
//!    preconditions. Unknown ids and re-chosen cards are tolerated no-ops,
//!    not errors.
//!
//! ## Modules
//!
//! - `core`: Card model, bonus-time bookkeeping, deterministic RNG
//! - `game`: `MemoryGame` - deck ownership and the match-resolution rule
//! - `session`: `GameSession` - configuration, restart, change notification
//! - `games`: Ready-made game presets

pub mod core;
pub mod game;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{Card, CardId, DeckRng, DeckRngState, BONUS_TIME_LIMIT};
pub use crate::game::MemoryGame;
pub use crate::session::GameSession;
