#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised by [`CharCursor`](crate::interpreter::cursor::CharCursor) when it
/// is asked to move beyond one of its sentinels.
pub enum CursorError {
    /// The cursor already sits on a sentinel in the requested direction.
    Exhausted {
        /// The cursor position at the time of the request.
        position: usize,
    },
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { position } => {
                write!(f, "Error at position {position}: No more characters to scan.")
            },
        }
    }
}

impl std::error::Error for CursorError {}
