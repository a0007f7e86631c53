use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    pub nodes: u64,
    pub score: i32,
}

pub fn best_move(board: &Board, bot_mark: Mark) -> Position {
    best_move_with_stats(board, bot_mark).0
}

pub fn best_move_with_stats(board: &Board, bot_mark: Mark) -> (Position, SearchStats) {
    assert!(
        check_win(board).is_none(),
        "best_move called on a decided board"
    );

    let available_moves = board.available_moves();
    assert!(!available_moves.is_empty(), "best_move called on a full board");

    // Speculative placements happen on a working copy; the caller's board
    // is never touched.
    let mut working = *board;
    let mut nodes = 0u64;

    let mut best = None;
    let mut best_score = i32::MIN;

    for pos in available_moves {
        working.set(pos.x, pos.y, bot_mark);
        let score = minimax(&mut working, false, bot_mark, &mut nodes);
        working.set(pos.x, pos.y, Mark::Empty);

        // Strict comparison keeps the first-seen move among equal scores.
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    let pos = best.unwrap();
    (
        pos,
        SearchStats {
            nodes,
            score: best_score,
        },
    )
}

fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 1 } else { -1 };
    }

    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in board.available_moves() {
            board.set(pos.x, pos.y, bot_mark);
            let eval = minimax(board, false, bot_mark, nodes);
            board.set(pos.x, pos.y, Mark::Empty);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for pos in board.available_moves() {
            board.set(pos.x, pos.y, opponent_mark);
            let eval = minimax(board, true, bot_mark, nodes);
            board.set(pos.x, pos.y, Mark::Empty);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
