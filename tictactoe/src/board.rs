use crate::{render_board, InvalidMove, Mark, OutOfRange};

pub const FIRST_POSITION: u8 = 1;
pub const LAST_POSITION: u8 = 9;
pub const NUM_POSITIONS: usize = 9;

/// The content of a single cell. `None` is an empty cell.
pub type Cell = Option<Mark>;

/// Represents the 3 x 3 playing field.
///
/// Positions are numbered 1 to 9, row by row, starting in the top-left corner:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
//
// A mark is never removed once placed, and `place()` is the only way to set one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_POSITIONS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given position, or `None` if the cell is empty.
    pub fn value_at(&self, position: u8) -> Result<Cell, OutOfRange> {
        Ok(self.cells[index(position)?])
    }

    /// All positions that do not have a mark yet, in ascending order.
    pub fn empty_positions(&self) -> Vec<u8> {
        (FIRST_POSITION..=LAST_POSITION)
            .zip(self.cells.iter())
            .filter_map(|(position, cell)| cell.is_none().then_some(position))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Puts a mark on an empty position.
    ///
    /// If the position is occupied or not on the board, the board is left
    /// unchanged and an error is returned.
    pub fn place(&mut self, position: u8, mark: Mark) -> Result<(), InvalidMove> {
        let cell = &mut self.cells[index(position)?];
        if let Some(existing) = *cell {
            return Err(InvalidMove::Occupied {
                position,
                mark: existing,
            });
        }
        *cell = Some(mark);
        Ok(())
    }

    /// The ASCII drawing of the board, see [`render_board()`].
    pub fn render(&self) -> String {
        render_board(self)
    }

    /// Iterates over all positions and their cells, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Cell)> + '_ {
        (FIRST_POSITION..=LAST_POSITION).zip(self.cells.iter().copied())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn index(position: u8) -> Result<usize, OutOfRange> {
    if (FIRST_POSITION..=LAST_POSITION).contains(&position) {
        Ok(usize::from(position - FIRST_POSITION))
    } else {
        Err(OutOfRange {
            position: i64::from(position),
        })
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn placing_on_occupied_position_changes_nothing(board: Board, position: u8) -> bool {
            let position = position % 9 + 1;
            let mut after = board.clone();
            match board.value_at(position) {
                Ok(Some(mark)) => {
                    after.place(position, mark.other())
                        == Err(InvalidMove::Occupied { position, mark })
                        && after == board
                }
                Ok(None) => after.place(position, Mark::X).is_ok(),
                Err(_) => false,
            }
        }

        fn successful_placement_removes_exactly_one_empty_position(board: Board, position: u8, mark: Mark) -> bool {
            let position = position % 9 + 1;
            let empty_before = board.empty_positions();
            let mut board = board;
            if board.place(position, mark).is_err() {
                return !empty_before.contains(&position);
            }
            let empty_after = board.empty_positions();
            board.value_at(position) == Ok(Some(mark))
                && !empty_after.contains(&position)
                && empty_after.len() + 1 == empty_before.len()
                && empty_after.iter().all(|p| empty_before.contains(p))
        }

        fn out_of_range_positions_are_rejected(board: Board, position: u8) -> bool {
            if (FIRST_POSITION..=LAST_POSITION).contains(&position) {
                return true;
            }
            let mut after = board.clone();
            let err = OutOfRange { position: i64::from(position) };
            board.value_at(position) == Err(err)
                && after.place(position, Mark::O) == Err(InvalidMove::OutOfRange(err))
                && after == board
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for position in 1..=9 {
            assert_eq!(board.value_at(position), Ok(None));
        }
        assert_eq!(board.empty_positions(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(!board.is_full());
    }

    #[test]
    fn place_and_look_up() {
        let mut board = Board::new();
        board.place(5, Mark::X).unwrap();
        board.place(1, Mark::O).unwrap();
        assert_eq!(board.value_at(5), Ok(Some(Mark::X)));
        assert_eq!(board.value_at(1), Ok(Some(Mark::O)));
        assert_eq!(board.empty_positions(), vec![2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(
            board.place(5, Mark::O),
            Err(InvalidMove::Occupied {
                position: 5,
                mark: Mark::X
            })
        );
    }

    #[test]
    fn boundary_positions() {
        let mut board = Board::new();
        assert_eq!(board.value_at(0), Err(OutOfRange { position: 0 }));
        assert_eq!(board.value_at(10), Err(OutOfRange { position: 10 }));
        assert_eq!(
            board.place(0, Mark::X),
            Err(InvalidMove::OutOfRange(OutOfRange { position: 0 }))
        );
        assert!(board.place(1, Mark::X).is_ok());
        assert!(board.place(9, Mark::X).is_ok());
    }

    #[test]
    fn full_board() {
        let mut board = Board::new();
        for position in 1..=9 {
            board.place(position, Mark::X).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }
}
