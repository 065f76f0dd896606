//! Session-level tests: restart semantics and change notification.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use concentration::{GameSession, BONUS_TIME_LIMIT};

fn session() -> GameSession<&'static str> {
    GameSession::with_seed(4, 42, |pair| ["A", "B", "C", "D"][pair])
}

#[test]
fn test_restart_resets_all_card_state() {
    let mut session = session();

    // Play a bit: one match, one dangling pick.
    let ids: Vec<_> = session.cards().iter().map(|c| c.id()).collect();
    for id in &ids {
        session.choose(*id);
    }

    session.restart();

    let now = Instant::now();
    assert_eq!(session.cards().len(), 8);
    for card in session.cards() {
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert_eq!(card.bonus_time_remaining(now), BONUS_TIME_LIMIT);
    }
}

#[test]
fn test_restart_reinvokes_the_generator_once_per_pair() {
    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);
    let mut session = GameSession::with_seed(4, 42, move |pair| {
        counter.set(counter.get() + 1);
        ["A", "B", "C", "D"][pair]
    });
    assert_eq!(calls.get(), 4);

    session.restart();
    assert_eq!(calls.get(), 8);
}

#[test]
fn test_notification_fires_after_every_intent() {
    let mut session = session();
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    session.subscribe(move || counter.set(counter.get() + 1));

    let id = session.cards()[0].id();
    session.choose(id);
    session.shuffle();
    session.restart();

    assert_eq!(fired.get(), 3);
}

#[test]
fn test_notification_fires_even_for_no_op_chooses() {
    let mut session = session();
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    session.subscribe(move || counter.set(counter.get() + 1));

    let id = session.cards()[0].id();
    session.choose(id);
    // Already face-up: the engine ignores it, the intent still completed.
    session.choose(id);

    assert_eq!(fired.get(), 2);
}

#[test]
fn test_reads_go_through_the_engine() {
    let session = session();

    // Session and engine expose the same deck view.
    let via_session: Vec<_> = session.cards().iter().map(|c| c.id()).collect();
    let via_engine: Vec<_> = session.game().cards().iter().map(|c| c.id()).collect();
    assert_eq!(via_session, via_engine);
}

#[test]
fn test_matched_state_survives_session_shuffle() {
    let mut session = session();

    // Find and resolve one pair.
    let first = session.cards()[0].id();
    let content = *session.cards()[0].content();
    let partner = session
        .cards()
        .iter()
        .find(|c| *c.content() == content && c.id() != first)
        .map(|c| c.id())
        .unwrap();

    session.choose(first);
    session.choose(partner);
    session.shuffle();

    let matched = session.cards().iter().filter(|c| c.is_matched()).count();
    assert_eq!(matched, 2);
}
