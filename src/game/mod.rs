//! The memory game engine: deck ownership and the match-resolution rule.
//!
//! ## Match Rule
//!
//! At most one unmatched card is face-up between choices (the "open card").
//! Choosing a card when an open card exists resolves a match attempt:
//! equal content marks both cards matched, and either way the chosen card
//! is revealed alongside it. Choosing a card with no open card flips every
//! unmatched card face-down and reveals only the choice, which is what
//! clears a failed pair off the table.
//!
//! Matched cards are out of the game: they stay face-up, never count as the
//! open card, and are never flipped back down.
//!
//! "Exactly one open card" is computed by scanning the whole deck rather
//! than tracked as separate state. If the scan ever finds more than one
//! unmatched face-up card the engine treats it the same as zero and resets
//! via the flip-down branch.

use std::time::Instant;

use smallvec::SmallVec;

use crate::core::{Card, CardId, DeckRng};

/// A memory-matching game: a shuffled deck of paired cards plus the
/// choose/shuffle intents that drive it.
///
/// Generic over the card content; anything `Clone + PartialEq` works. The
/// deck is
/// owned exclusively by the engine - callers read it through [`cards`] and
/// mutate it only through the intents.
///
/// [`cards`]: MemoryGame::cards
///
/// ```
/// use concentration::game::MemoryGame;
///
/// let mut game = MemoryGame::with_seed(2, 7, |pair| ["A", "B"][pair]);
/// assert_eq!(game.cards().len(), 4);
///
/// let first = game.cards()[0].id();
/// game.choose(first);
/// assert!(game.cards().iter().any(|card| card.is_face_up()));
/// ```
pub struct MemoryGame<C> {
    cards: Vec<Card<C>>,
    rng: DeckRng,
}

impl<C: Clone> MemoryGame<C> {
    /// Create a shuffled deck of `2 * number_of_pairs` cards, seeding the
    /// shuffle from OS entropy.
    ///
    /// `content` is called exactly once per pair index in
    /// `0..number_of_pairs`; each value is duplicated onto the two cards
    /// with ids `2p` and `2p + 1`. A pair count of zero yields an empty,
    /// fully functional deck.
    #[must_use]
    pub fn new(number_of_pairs: usize, content: impl Fn(usize) -> C) -> Self {
        Self::with_rng(number_of_pairs, DeckRng::from_entropy(), content)
    }

    /// Create a shuffled deck with a fixed shuffle seed.
    ///
    /// Same seed, same pair count: same card order. Used by tests and
    /// reproducible demos.
    #[must_use]
    pub fn with_seed(number_of_pairs: usize, seed: u64, content: impl Fn(usize) -> C) -> Self {
        Self::with_rng(number_of_pairs, DeckRng::new(seed), content)
    }

    fn with_rng(number_of_pairs: usize, rng: DeckRng, content: impl Fn(usize) -> C) -> Self {
        let mut cards = Vec::with_capacity(number_of_pairs * 2);
        for pair_index in 0..number_of_pairs {
            let value = content(pair_index);
            cards.push(Card::new(CardId::new(pair_index as u32 * 2), value.clone()));
            cards.push(Card::new(CardId::new(pair_index as u32 * 2 + 1), value));
        }

        let mut game = Self { cards, rng };
        game.shuffle();
        game
    }
}

impl<C> MemoryGame<C> {
    /// The current deck, in display order.
    ///
    /// A read-only view: all mutation goes through [`choose`] and
    /// [`shuffle`].
    ///
    /// [`choose`]: MemoryGame::choose
    /// [`shuffle`]: MemoryGame::shuffle
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Randomly permute the deck's display order in place.
    ///
    /// Only positions change; identity, content, orientation, match state,
    /// and bonus bookkeeping are untouched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// Index of the one and only unmatched face-up card, if there is
    /// exactly one. Zero or several face-up cards both yield `None`.
    fn open_card_index(&self) -> Option<usize> {
        let face_up: SmallVec<[usize; 2]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_face_up() && !card.is_matched())
            .map(|(index, _)| index)
            .collect();

        match face_up.as_slice() {
            [index] => Some(*index),
            _ => None,
        }
    }
}

impl<C: PartialEq> MemoryGame<C> {
    /// Choose a card, timestamping bonus accrual with `Instant::now()`.
    pub fn choose(&mut self, id: CardId) {
        self.choose_at(id, Instant::now());
    }

    /// Choose a card with an explicit timestamp for bonus accrual.
    ///
    /// Unknown ids and cards that are already face-up or matched are
    /// no-ops. Otherwise:
    ///
    /// - With exactly one open card: equal content marks both cards
    ///   matched (freezing their bonus clocks); the chosen card is flipped
    ///   face-up either way. The open card stays up - a failed pair is
    ///   cleared on the *next* choice.
    /// - With no open card: every unmatched card is flipped face-down and
    ///   the chosen card is revealed.
    pub fn choose_at(&mut self, id: CardId, now: Instant) {
        let Some(chosen) = self.cards.iter().position(|card| card.id() == id) else {
            return;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            return;
        }

        if let Some(open) = self.open_card_index() {
            if self.cards[chosen].content() == self.cards[open].content() {
                self.cards[chosen].set_matched(now);
                self.cards[open].set_matched(now);
            }
            self.cards[chosen].set_face_up(true, now);
        } else {
            for index in 0..self.cards.len() {
                if !self.cards[index].is_matched() {
                    self.cards[index].set_face_up(index == chosen, now);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> MemoryGame<&'static str> {
        MemoryGame::with_seed(4, 42, |pair| ["A", "B", "C", "D"][pair])
    }

    fn id_of(game: &MemoryGame<&'static str>, content: &str, instance: usize) -> CardId {
        game.cards()
            .iter()
            .filter(|card| *card.content() == content)
            .map(Card::id)
            .nth(instance)
            .unwrap()
    }

    #[test]
    fn test_open_card_index_single() {
        let mut game = game();
        let now = Instant::now();

        assert_eq!(game.open_card_index(), None);

        game.choose_at(id_of(&game, "A", 0), now);
        let open = game.open_card_index().unwrap();
        assert_eq!(*game.cards()[open].content(), "A");
    }

    #[test]
    fn test_matched_cards_never_count_as_open() {
        let mut game = game();
        let now = Instant::now();

        game.choose_at(id_of(&game, "A", 0), now);
        game.choose_at(id_of(&game, "A", 1), now);

        // Both A cards face-up but matched: no open card.
        assert_eq!(game.open_card_index(), None);
    }

    #[test]
    fn test_defensive_multiple_face_up_falls_through_to_reset() {
        let mut game = game();
        let now = Instant::now();

        // Force the inconsistent state the engine never produces itself.
        game.cards[0].set_face_up(true, now);
        game.cards[1].set_face_up(true, now);
        assert_eq!(game.open_card_index(), None);

        let chosen = game.cards[5].id();
        game.choose_at(chosen, now);

        for card in game.cards() {
            assert_eq!(card.is_face_up(), card.id() == chosen);
        }
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut game = game();
        let now = Instant::now();

        game.choose_at(CardId::new(999), now);
        assert!(game.cards().iter().all(|card| !card.is_face_up()));
    }

    #[test]
    fn test_empty_deck_operations_are_well_defined() {
        let mut game: MemoryGame<&'static str> = MemoryGame::with_seed(0, 1, |_| unreachable!());

        assert!(game.cards().is_empty());
        game.choose_at(CardId::new(0), Instant::now());
        game.shuffle();
        assert!(game.cards().is_empty());
    }
}
