use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Mark {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, mark: Mark) {
        self.cells[y][x] = mark;
    }

    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.cells[y][x] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        if y >= BOARD_SIZE || x >= BOARD_SIZE {
            return false;
        }
        self.cells[y][x] == Mark::Empty
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
