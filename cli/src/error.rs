use tictactoe::{InvalidMove, FIRST_POSITION, LAST_POSITION};

#[derive(Debug, PartialEq, Eq)]
/// Why a line typed by the human did not result in a move.
pub enum RejectedInput {
    Malformed { input: String },
    InvalidMove(InvalidMove),
}

impl RejectedInput {
    /// The rejected position, if the input was a number at all.
    pub fn position(&self) -> Option<i64> {
        match self {
            RejectedInput::Malformed { .. } => None,
            RejectedInput::InvalidMove(err) => Some(err.position()),
        }
    }
}

impl From<InvalidMove> for RejectedInput {
    fn from(err: InvalidMove) -> RejectedInput {
        RejectedInput::InvalidMove(err)
    }
}

impl std::error::Error for RejectedInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RejectedInput::InvalidMove(err) => Some(err),
            RejectedInput::Malformed { .. } => None,
        }
    }
}

impl std::fmt::Display for RejectedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectedInput::Malformed { input } => write!(
                f,
                "'{}' is not a position between {} and {}",
                input, FIRST_POSITION, LAST_POSITION
            ),
            RejectedInput::InvalidMove(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use tictactoe::{Mark, OutOfRange};

    use super::*;

    #[test]
    fn position_of_rejected_input() {
        let malformed = RejectedInput::Malformed {
            input: String::from("abc"),
        };
        assert_eq!(malformed.position(), None);

        let occupied = RejectedInput::from(InvalidMove::Occupied {
            position: 4,
            mark: Mark::O,
        });
        assert_eq!(occupied.position(), Some(4));

        let off_board = RejectedInput::from(InvalidMove::from(OutOfRange { position: -3 }));
        assert_eq!(off_board.position(), Some(-3));
        assert_eq!(off_board.to_string(), "Position -3 is outside the board (1 to 9)");
    }
}
