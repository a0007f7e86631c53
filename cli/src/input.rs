use std::io::{self, Write};

use tictactoe_engine::Board;
use tictactoe_engine::board::BOARD_SIZE;
use tictactoe_engine::types::Position;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub fn parse_move(input: &str) -> Result<Position, String> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| "expected a number between 1 and 9".to_string())?;

    if !(1..=CELL_COUNT).contains(&number) {
        return Err(format!("{} is not between 1 and 9", number));
    }

    let index = number - 1;
    Ok(Position::new(index % BOARD_SIZE, index / BOARD_SIZE))
}

/// Prompts until the human enters a cell number that maps to an empty cell.
/// Errors only on stream failure or EOF.
pub fn read_human_move(board: &Board) -> Result<Position, String> {
    loop {
        print!("Enter your move (1-9): ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut line = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes_read == 0 {
            return Err("Input stream closed".to_string());
        }

        match parse_move(&line) {
            Ok(pos) if board.is_valid_move(pos.x, pos.y) => return Ok(pos),
            Ok(_) => println!("That spot is taken, try again."),
            Err(message) => println!("Invalid move: {}.", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corner_cells() {
        assert_eq!(parse_move("1").unwrap(), Position::new(0, 0));
        assert_eq!(parse_move("3").unwrap(), Position::new(2, 0));
        assert_eq!(parse_move("7").unwrap(), Position::new(0, 2));
        assert_eq!(parse_move("9").unwrap(), Position::new(2, 2));
    }

    #[test]
    fn test_parse_center_cell() {
        assert_eq!(parse_move("5").unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_move("  4 \n").unwrap(), Position::new(0, 1));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_move("0").is_err());
        assert!(parse_move("10").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_move("abc").is_err());
        assert!(parse_move("").is_err());
        assert!(parse_move("-1").is_err());
    }
}
