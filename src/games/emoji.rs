//! Emoji memory game preset.
//!
//! The classic setup: a vehicle-emoji palette, four pairs per deal. Exists
//! both as the obvious out-of-the-box game and as a concrete consumer
//! exercising the whole engine surface.

use crate::session::GameSession;

/// Vehicle palette, indexed by pair number.
pub const VEHICLES: [&str; 11] = [
    "\u{1F682}",        // 🚂 locomotive
    "\u{1F680}",        // 🚀 rocket
    "\u{1F681}",        // 🚁 helicopter
    "\u{1F69C}",        // 🚜 tractor
    "\u{1F697}",        // 🚗 car
    "\u{1F3CE}\u{FE0F}", // 🏎️ race car
    "\u{1F69A}",        // 🚚 truck
    "\u{1F6F5}",        // 🛵 scooter
    "\u{1F68E}",        // 🚎 trolleybus
    "\u{1F691}",        // 🚑 ambulance
    "\u{1F692}",        // 🚒 fire engine
];

/// Pairs dealt per game.
pub const NUMBER_OF_PAIRS: usize = 4;

/// Start an emoji session with a random deal.
#[must_use]
pub fn new_session() -> GameSession<&'static str> {
    GameSession::new(NUMBER_OF_PAIRS, |pair| VEHICLES[pair])
}

/// Start an emoji session with a reproducible deal.
#[must_use]
pub fn new_session_with_seed(seed: u64) -> GameSession<&'static str> {
    GameSession::with_seed(NUMBER_OF_PAIRS, seed, |pair| VEHICLES[pair])
}
