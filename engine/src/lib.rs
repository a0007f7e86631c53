pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchStats, best_move, best_move_with_stats};
pub use game_state::{FirstPlayerMode, GameState};
pub use types::{GameStatus, Mark, Position};
pub use win_detector::{check_win, game_status};
