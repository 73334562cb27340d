use crate::{Board, Mark};

/// The eight lines of three: rows, columns, then diagonals.
pub const WIN_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Returns the mark that owns a complete line, if any.
///
/// Lines are tested in [`WIN_LINES`] order regardless of where the last mark
/// went, and the first complete one decides. Within a line, [`Mark::X`] is
/// tested before [`Mark::O`].
pub fn check_winner(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|line| {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| owns_line(board, line, mark))
    })
}

fn owns_line(board: &Board, line: &[u8; 3], mark: Mark) -> bool {
    line.iter()
        .all(|&position| board.value_at(position) == Ok(Some(mark)))
}
