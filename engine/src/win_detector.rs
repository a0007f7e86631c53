use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark};

pub fn check_win(board: &Board) -> Option<Mark> {
    for i in 0..BOARD_SIZE {
        let mark = board.get(0, i);
        if mark != Mark::Empty && board.get(1, i) == mark && board.get(2, i) == mark {
            return Some(mark);
        }

        let mark = board.get(i, 0);
        if mark != Mark::Empty && board.get(i, 1) == mark && board.get(i, 2) == mark {
            return Some(mark);
        }
    }

    let mark = board.get(0, 0);
    if mark != Mark::Empty && board.get(1, 1) == mark && board.get(2, 2) == mark {
        return Some(mark);
    }

    let mark = board.get(2, 0);
    if mark != Mark::Empty && board.get(1, 1) == mark && board.get(0, 2) == mark {
        return Some(mark);
    }

    None
}

pub fn game_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_win(&board), None);
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        assert_eq!(check_win(&board), Some(Mark::X));
        assert_eq!(game_status(&board), GameStatus::XWon);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::O, Mark::Empty, Mark::X],
        ]);
        assert_eq!(check_win(&board), Some(Mark::O));
        assert_eq!(game_status(&board), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);
        assert_eq!(check_win(&board), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::O],
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::O, Mark::Empty, Mark::Empty],
        ]);
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ]);
        assert_eq!(check_win(&board), None);
        assert_eq!(game_status(&board), GameStatus::Draw);
        assert!(board.is_full());
    }

    #[test]
    fn test_check_win_is_pure() {
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        let first = check_win(&board);
        let second = check_win(&board);
        assert_eq!(first, second);
    }
}
