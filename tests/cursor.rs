use numtext::{
    error::CursorError,
    interpreter::cursor::{CharCursor, Scan},
};

fn at_end(text: &str) -> CharCursor {
    let mut cursor = CharCursor::skipping_spaces(text);
    while cursor.next().is_ok() {}
    cursor
}

#[test]
fn walks_both_directions() {
    let mut cursor = CharCursor::new("ab");
    assert_eq!(cursor.current(), Scan::BeforeStart);
    assert_eq!(cursor.next(), Ok(Scan::At('a')));
    assert_eq!(cursor.next(), Ok(Scan::At('b')));
    assert_eq!(cursor.next(), Ok(Scan::PastEnd));
    assert_eq!(cursor.previous(), Ok(Scan::At('b')));
    assert_eq!(cursor.previous(), Ok(Scan::At('a')));
    assert_eq!(cursor.previous(), Ok(Scan::BeforeStart));
}

#[test]
fn sentinels_are_exhausted() {
    let mut cursor = CharCursor::new("ab");
    assert_eq!(cursor.previous(), Err(CursorError::Exhausted { position: 0 }));
    assert_eq!(cursor.current(), Scan::BeforeStart);

    let mut cursor = at_end("ab");
    assert_eq!(cursor.current(), Scan::PastEnd);
    assert_eq!(cursor.next(), Err(CursorError::Exhausted { position: 2 }));
    assert_eq!(cursor.current(), Scan::PastEnd);
}

#[test]
fn neighbours_at_the_sentinels() {
    let mut cursor = CharCursor::new("ab");
    assert!(cursor.has_next());
    assert!(!cursor.has_previous());

    cursor.next().unwrap();
    assert!(cursor.has_next());
    assert!(!cursor.has_previous());

    cursor.next().unwrap();
    assert!(!cursor.has_next());
    assert!(cursor.has_previous());

    cursor.next().unwrap();
    assert_eq!(cursor.current(), Scan::PastEnd);
    assert!(!cursor.has_next());
    assert!(cursor.has_previous());

    let empty = CharCursor::new("");
    assert!(empty.is_empty());
    assert!(!empty.has_next());
    assert!(!empty.has_previous());
}

#[test]
fn reverse_eat_skips_spaces() {
    let mut cursor = at_end("a  b");
    assert!(cursor.reverse_eat('b'));
    assert_eq!(cursor.current(), Scan::At(' '));
    assert!(cursor.reverse_eat('a'));
    assert_eq!(cursor.current(), Scan::BeforeStart);
    assert!(!cursor.reverse_eat('a'));
    assert_eq!(cursor.current(), Scan::BeforeStart);
}

#[test]
fn reverse_eat_keeps_spaces_without_skip_mode() {
    let mut cursor = CharCursor::new("a  b");
    while cursor.next().is_ok() {}
    cursor.previous().unwrap();
    assert!(cursor.reverse_eat('b'));
    assert!(!cursor.reverse_eat('a'));
    assert_eq!(cursor.current(), Scan::At(' '));
}

#[test]
fn failed_eat_keeps_position() {
    let mut cursor = CharCursor::skipping_spaces("1 +  2");
    cursor.next().unwrap();
    assert!(cursor.eat('1'));
    let position = cursor.position();

    assert!(!cursor.eat('*'));
    assert_eq!(cursor.position(), position);
    assert_eq!(cursor.current(), Scan::At(' '));

    assert!(cursor.eat('+'));
    assert_eq!(cursor.peek_significant(), Scan::At('2'));
}

#[test]
fn failed_reverse_eat_keeps_position() {
    let mut cursor = at_end("a  b");
    let position = cursor.position();
    assert!(!cursor.reverse_eat('a'));
    assert_eq!(cursor.position(), position);
    assert_eq!(cursor.current(), Scan::PastEnd);

    assert!(cursor.reverse_eat('b'));
    let position = cursor.position();
    assert!(!cursor.reverse_eat('b'));
    assert_eq!(cursor.position(), position);
    assert_eq!(cursor.current(), Scan::At(' '));
}

#[test]
fn marks_and_slices() {
    let mut cursor = CharCursor::new("sqrt(4)");
    cursor.next().unwrap();
    let start = cursor.mark();
    while cursor.current().is(char::is_alphabetic) {
        cursor.next().unwrap();
    }
    assert_eq!(cursor.slice(0, cursor.position()), "sqrt");
    assert_eq!(cursor.slice(5, 100), "4)");
    assert_eq!(cursor.slice(9, 3), "");

    cursor.reset(start);
    assert_eq!(cursor.current(), Scan::At('s'));
}
