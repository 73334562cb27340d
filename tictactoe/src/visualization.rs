use crate::Board;

const SPACER: &str = "     |     |     ";
const DIVIDER: &str = "-----+-----+-----";

/// Draws the board as a 3 x 3 grid, e.g.
///
/// ```text
///      |     |
///   X  |     |  O
///      |     |
/// -----+-----+-----
/// ```
///
/// and so on for the remaining two rows. Empty cells are drawn as spaces.
/// The returned string has no trailing newline.
pub fn render_board(board: &Board) -> String {
    let symbols: Vec<char> = board
        .iter()
        .map(|(_, cell)| cell.map_or(' ', |mark| mark.as_char()))
        .collect();

    let rows: Vec<String> = symbols
        .chunks(3)
        .map(|row| {
            let marks = format!("  {}  |  {}  |  {}  ", row[0], row[1], row[2]);
            [SPACER, marks.as_str(), SPACER].join("\n")
        })
        .collect();
    rows.join(format!("\n{}\n", DIVIDER).as_str())
}
