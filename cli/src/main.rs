mod config;
mod input;
mod render;

use std::time::{Duration, Instant};

use clap::Parser;
use tictactoe_engine::game_state::{COMPUTER_MARK, GameState};
use tictactoe_engine::types::GameStatus;
use tictactoe_engine::{best_move_with_stats, debug_log, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Disable colored output regardless of the config.
    #[arg(long)]
    no_color: bool,

    /// Log per-decision search diagnostics.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let config = config::load_config(args.config.as_deref())?;
    let colored = config.colored_output && !args.no_color;

    let mut state = GameState::new(config.first_player.into());

    println!("{}", render::render_board(&state.board, colored));

    while state.status == GameStatus::InProgress {
        if state.is_computer_turn() {
            println!("Computer is making its move...");
            if config.computer_move_delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.computer_move_delay_ms));
            }

            let started = Instant::now();
            let (pos, stats) = best_move_with_stats(&state.board, COMPUTER_MARK);
            debug_log!(
                "search visited {} nodes in {:?}; move ({}, {}) scores {}",
                stats.nodes,
                started.elapsed(),
                pos.x,
                pos.y,
                stats.score
            );

            state.place_mark(pos.x, pos.y)?;
        } else {
            let pos = input::read_human_move(&state.board)?;
            state.place_mark(pos.x, pos.y)?;
        }

        println!("{}", render::render_board(&state.board, colored));
    }

    println!("{}", render::result_message(state.status, colored));

    Ok(())
}
