use crossterm::style::Stylize;

use tictactoe_engine::Board;
use tictactoe_engine::board::BOARD_SIZE;
use tictactoe_engine::types::{GameStatus, Mark};

const ROW_SEPARATOR: &str = "------------";

pub fn render_board(board: &Board, colored: bool) -> String {
    let mut out = String::new();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let cell = match board.get(x, y) {
                Mark::X if colored => format!(" {} ", "X".red()),
                Mark::X => " X ".to_string(),
                Mark::O if colored => format!(" {} ", "O".blue()),
                Mark::O => " O ".to_string(),
                Mark::Empty => {
                    let number = y * BOARD_SIZE + x + 1;
                    if colored {
                        format!(" {} ", number.to_string().dark_grey())
                    } else {
                        format!(" {} ", number)
                    }
                }
            };
            out.push_str(&cell);
            out.push('|');
        }
        out.push('\n');
        out.push_str(ROW_SEPARATOR);
        out.push('\n');
    }

    out
}

pub fn result_message(status: GameStatus, colored: bool) -> String {
    match status {
        GameStatus::XWon if colored => format!("{}", "Computer wins!".red()),
        GameStatus::XWon => "Computer wins!".to_string(),
        GameStatus::OWon if colored => format!("{}", "You win!".blue()),
        GameStatus::OWon => "You win!".to_string(),
        GameStatus::Draw if colored => format!("{}", "It's a draw!".yellow()),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => unreachable!("result requested for an unfinished game"),
    }
}
