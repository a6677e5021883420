use crate::error::CursorError;

/// What the cursor is looking at.
///
/// The two sentinels can never be confused with a character of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Before the first character.
    BeforeStart,
    /// On a character of the text.
    At(char),
    /// After the last character.
    PastEnd,
}

impl Scan {
    /// Returns the character under the cursor, if any.
    #[must_use]
    pub const fn char(self) -> Option<char> {
        match self {
            Self::At(c) => Some(c),
            Self::BeforeStart | Self::PastEnd => None,
        }
    }

    /// Returns `true` if the cursor is on a character matching `predicate`.
    pub fn is(self, predicate: impl FnOnce(char) -> bool) -> bool {
        self.char().is_some_and(predicate)
    }
}

/// A saved cursor location, restored with [`CharCursor::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// A bidirectional scanner over an immutable character sequence.
///
/// The cursor starts on [`Scan::BeforeStart`]. Internally the offset `0` is
/// the leading sentinel, offsets `1..=len` are the characters, and `len + 1`
/// is the trailing sentinel.
///
/// In skip-space mode [`eat`](Self::eat) and [`reverse_eat`](Self::reverse_eat)
/// step over runs of spaces before comparing.
///
/// # Example
/// ```
/// use numtext::interpreter::cursor::{CharCursor, Scan};
///
/// let mut cursor = CharCursor::skipping_spaces("1 +  2");
/// cursor.next().unwrap();
/// assert_eq!(cursor.current(), Scan::At('1'));
/// cursor.next().unwrap();
/// assert!(cursor.eat('+'));
/// assert!(!cursor.eat('*'));
/// assert!(cursor.eat('2'));
/// assert_eq!(cursor.current(), Scan::PastEnd);
/// ```
#[derive(Debug, Clone)]
pub struct CharCursor {
    chars:       Vec<char>,
    offset:      usize,
    skip_spaces: bool,
}

impl CharCursor {
    /// Creates a cursor that treats spaces like any other character.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars:       text.chars().collect(),
               offset:      0,
               skip_spaces: false, }
    }

    /// Creates a cursor in skip-space mode.
    #[must_use]
    pub fn skipping_spaces(text: &str) -> Self {
        Self { skip_spaces: true,
               ..Self::new(text) }
    }

    /// Number of characters in the text.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The current register.
    #[must_use]
    pub fn current(&self) -> Scan {
        match self.offset {
            0 => Scan::BeforeStart,
            n if n > self.chars.len() => Scan::PastEnd,
            n => Scan::At(self.chars[n - 1]),
        }
    }

    /// Zero-based index of the current character. The leading sentinel
    /// reports `0` and the trailing sentinel reports the text length.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset.saturating_sub(1)
    }

    /// Moves one character forward.
    ///
    /// # Errors
    /// Returns [`CursorError::Exhausted`] when already past the end.
    pub fn next(&mut self) -> Result<Scan, CursorError> {
        if self.offset > self.chars.len() {
            return Err(CursorError::Exhausted { position: self.position() });
        }
        self.offset += 1;
        Ok(self.current())
    }

    /// Moves one character backward.
    ///
    /// # Errors
    /// Returns [`CursorError::Exhausted`] when already before the start.
    pub fn previous(&mut self) -> Result<Scan, CursorError> {
        if self.offset == 0 {
            return Err(CursorError::Exhausted { position: self.position() });
        }
        self.offset -= 1;
        Ok(self.current())
    }

    /// Returns `true` if a real character follows the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.offset < self.chars.len()
    }

    /// Returns `true` if a real character precedes the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.offset > 1
    }

    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark(self.offset)
    }

    pub const fn reset(&mut self, mark: Mark) {
        self.offset = mark.0;
    }

    /// The characters from position `from` up to, but excluding, `to`.
    /// Out-of-range bounds are clamped to the text.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> String {
        let to = to.min(self.chars.len());
        self.chars.get(from.min(to)..to).map_or_else(String::new, |s| s.iter().collect())
    }

    /// Advances over spaces in skip-space mode.
    pub fn skip_spaces(&mut self) {
        if !self.skip_spaces {
            return;
        }
        if self.offset == 0 {
            self.offset = 1;
        }
        while self.current() == Scan::At(' ') {
            self.offset += 1;
        }
    }

    /// Consumes `target` if it is the next significant character.
    ///
    /// On failure the cursor is left exactly where it was.
    pub fn eat(&mut self, target: char) -> bool {
        let start = self.mark();
        self.skip_spaces();
        if self.current() == Scan::At(target) {
            self.offset += 1;
            return true;
        }
        self.reset(start);
        false
    }

    /// Consumes `target` scanning backward.
    ///
    /// On failure the cursor is left exactly where it was.
    ///
    /// # Example
    /// ```
    /// use numtext::interpreter::cursor::{CharCursor, Scan};
    ///
    /// let mut cursor = CharCursor::skipping_spaces("a  b");
    /// while cursor.next().is_ok() {}
    /// assert_eq!(cursor.current(), Scan::PastEnd);
    ///
    /// assert!(cursor.reverse_eat('b'));
    /// assert!(!cursor.reverse_eat('b'));
    /// assert!(cursor.reverse_eat('a'));
    /// assert_eq!(cursor.current(), Scan::BeforeStart);
    /// ```
    pub fn reverse_eat(&mut self, target: char) -> bool {
        let start = self.mark();
        if self.skip_spaces {
            if self.offset > self.chars.len() {
                self.offset = self.chars.len();
            }
            while self.current() == Scan::At(' ') {
                self.offset -= 1;
            }
        }
        if self.current() == Scan::At(target) {
            self.offset -= 1;
            return true;
        }
        self.reset(start);
        false
    }

    /// Returns the next significant character without consuming anything.
    #[must_use]
    pub fn peek_significant(&self) -> Scan {
        let mut offset = self.offset.max(1);
        while self.skip_spaces && self.chars.get(offset - 1) == Some(&' ') {
            offset += 1;
        }
        self.chars.get(offset - 1).map_or(Scan::PastEnd, |&c| Scan::At(c))
    }
}
