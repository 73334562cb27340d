use crate::{Board, Mark};

impl quickcheck::Arbitrary for Mark {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Mark::X, Mark::O]).unwrap()
    }
}

// Any mix of marks and empty cells, not only positions reachable through
// alternating play.
impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut board = Board::new();
        for position in 1..=9 {
            if let Some(mark) = Option::<Mark>::arbitrary(g) {
                board.place(position, mark).unwrap();
            }
        }
        board
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink by clearing one occupied cell at a time
        let occupied: Vec<(u8, Mark)> = self
            .iter()
            .filter_map(|(position, cell)| cell.map(|mark| (position, mark)))
            .collect();
        let boards: Vec<Board> = (0..occupied.len())
            .map(|skip| {
                let mut board = Board::new();
                for (idx, &(position, mark)) in occupied.iter().enumerate() {
                    if idx != skip {
                        board.place(position, mark).unwrap();
                    }
                }
                board
            })
            .collect();
        Box::new(boards.into_iter())
    }
}
