use rand::Rng;

use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::game_status;

/// The computer always plays X, the human always plays O; the mode only
/// decides who takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

pub const COMPUTER_MARK: Mark = Mark::X;
pub const HUMAN_MARK: Mark = Mark::O;

#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new(first_player_mode: FirstPlayerMode) -> Self {
        let first_mark = match first_player_mode {
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Computer => COMPUTER_MARK,
            FirstPlayerMode::Random => {
                if rand::rng().random() {
                    HUMAN_MARK
                } else {
                    COMPUTER_MARK
                }
            }
        };

        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.is_valid_move(x, y) {
            if x >= BOARD_SIZE || y >= BOARD_SIZE {
                return Err("Position out of bounds".to_string());
            }
            return Err("Cell is already marked".to_string());
        }

        self.board.set(x, y, self.current_mark);
        self.last_move = Some(Position::new(x, y));

        self.status = game_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark == COMPUTER_MARK
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }
}
