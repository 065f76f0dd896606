//! Owning game session: configuration, restart, change notification.
//!
//! A [`GameSession`] is what a presentation layer actually holds. It
//! remembers how the game was configured (pair count, content generator,
//! optional shuffle seed) so that `restart` can rebuild the engine from
//! scratch, and it tells subscribers that state changed after every
//! completed intent.
//!
//! The engine itself knows nothing about observers; notification lives
//! entirely at this level.

use crate::core::{Card, CardId};
use crate::game::MemoryGame;

/// A running game plus the configuration needed to restart it.
///
/// Intents (`choose`, `shuffle`, `restart`) delegate to the owned
/// [`MemoryGame`] and then fire every subscribed callback once. A view
/// layer subscribes, re-reads [`cards`] in its callback, and re-renders.
///
/// [`cards`]: GameSession::cards
///
/// ```
/// use concentration::session::GameSession;
///
/// let mut session = GameSession::with_seed(2, 7, |pair| ["A", "B"][pair]);
/// session.subscribe(|| println!("redraw"));
///
/// let first = session.cards()[0].id();
/// session.choose(first); // prints "redraw"
/// session.restart();     // prints "redraw"; all cards face-down again
/// ```
pub struct GameSession<C> {
    number_of_pairs: usize,
    seed: Option<u64>,
    content: Box<dyn Fn(usize) -> C>,
    game: MemoryGame<C>,
    observers: Vec<Box<dyn FnMut()>>,
}

impl<C: Clone + PartialEq> GameSession<C> {
    /// Start a session with an entropy-seeded shuffle.
    ///
    /// `restart` reseeds from entropy each time, so every game deals a
    /// fresh order.
    #[must_use]
    pub fn new(number_of_pairs: usize, content: impl Fn(usize) -> C + 'static) -> Self {
        let game = MemoryGame::new(number_of_pairs, &content);
        Self {
            number_of_pairs,
            seed: None,
            content: Box::new(content),
            game,
            observers: Vec::new(),
        }
    }

    /// Start a session with a fixed shuffle seed.
    ///
    /// `restart` reuses the same seed, reproducing the same deal.
    #[must_use]
    pub fn with_seed(
        number_of_pairs: usize,
        seed: u64,
        content: impl Fn(usize) -> C + 'static,
    ) -> Self {
        let game = MemoryGame::with_seed(number_of_pairs, seed, &content);
        Self {
            number_of_pairs,
            seed: Some(seed),
            content: Box::new(content),
            game,
            observers: Vec::new(),
        }
    }

    /// The current deck, in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        self.game.cards()
    }

    /// Direct access to the owned engine.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<C> {
        &self.game
    }

    /// Register a callback to run after each completed intent.
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Intents ===

    /// Choose a card by id, then notify subscribers.
    pub fn choose(&mut self, id: CardId) {
        self.game.choose(id);
        self.notify();
    }

    /// Reshuffle the current deck in place, then notify subscribers.
    pub fn shuffle(&mut self) {
        self.game.shuffle();
        self.notify();
    }

    /// Discard the game and deal a fresh one from the same configuration,
    /// then notify subscribers.
    ///
    /// Every card comes back face-down, unmatched, with a full bonus
    /// budget. The content generator is invoked again, once per pair.
    pub fn restart(&mut self) {
        let content = &self.content;
        let game = match self.seed {
            Some(seed) => MemoryGame::with_seed(self.number_of_pairs, seed, |p| content(p)),
            None => MemoryGame::new(self.number_of_pairs, |p| content(p)),
        };
        self.game = game;
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn session() -> GameSession<&'static str> {
        GameSession::with_seed(4, 42, |pair| ["A", "B", "C", "D"][pair])
    }

    #[test]
    fn test_each_intent_notifies_once() {
        let mut session = session();
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        session.subscribe(move || counter.set(counter.get() + 1));

        let id = session.cards()[0].id();
        session.choose(id);
        assert_eq!(fired.get(), 1);

        session.shuffle();
        assert_eq!(fired.get(), 2);

        session.restart();
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn test_multiple_subscribers_all_fire() {
        let mut session = session();
        let a = Rc::new(Cell::new(0u32));
        let b = Rc::new(Cell::new(0u32));
        let (ca, cb) = (Rc::clone(&a), Rc::clone(&b));
        session.subscribe(move || ca.set(ca.get() + 1));
        session.subscribe(move || cb.set(cb.get() + 1));

        session.shuffle();
        assert_eq!((a.get(), b.get()), (1, 1));
    }

    #[test]
    fn test_fixed_seed_restart_reproduces_the_deal() {
        let mut session = session();
        let before: Vec<_> = session.cards().iter().map(|c| c.id()).collect();

        session.restart();
        let after: Vec<_> = session.cards().iter().map(|c| c.id()).collect();

        assert_eq!(before, after);
    }
}
