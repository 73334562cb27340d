use crate::{Mark, FIRST_POSITION, LAST_POSITION};

/// The error type for [`Board::value_at()`](crate::Board::value_at), i.e. for looking up a position
/// that is not on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    // Wide enough for any number typed in, not only `u8` positions.
    pub position: i64,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside the board ({} to {})",
            self.position, FIRST_POSITION, LAST_POSITION
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The error type for [`Board::place()`](crate::Board::place).
pub enum InvalidMove {
    OutOfRange(OutOfRange),
    Occupied { position: u8, mark: Mark },
}

impl InvalidMove {
    /// The position that was rejected.
    pub fn position(&self) -> i64 {
        match self {
            InvalidMove::OutOfRange(OutOfRange { position }) => *position,
            InvalidMove::Occupied { position, .. } => i64::from(*position),
        }
    }
}

impl From<OutOfRange> for InvalidMove {
    fn from(err: OutOfRange) -> InvalidMove {
        InvalidMove::OutOfRange(err)
    }
}

impl std::error::Error for InvalidMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidMove::OutOfRange(err) => Some(err),
            InvalidMove::Occupied { .. } => None,
        }
    }
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(err) => write!(f, "{}", err),
            InvalidMove::Occupied { position, mark } => {
                write!(f, "Position {} is already taken by {}", position, mark)
            }
        }
    }
}
