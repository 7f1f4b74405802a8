//! Position inspector.
//!
//! Usage:
//! `cargo run -- "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"`
//! `cargo run -- --play e2e4 --play e7e5`
//! `cargo run -- --boards "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"`

use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use plum_rules::utils::long_algebraic::coordinate_to_legal_move;
use plum_rules::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(name = "plum_rules", about = "Inspect chess positions: board, status and legal moves")]
struct Args {
    /// Positions to inspect, one FEN per argument. Defaults to the start position.
    fens: Vec<String>,

    /// Coordinate moves to play before inspecting. Needs a single position.
    #[arg(long = "play", value_name = "MOVE")]
    play: Vec<String>,

    /// Also print the board each legal move leads to.
    #[arg(long)]
    boards: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    for game in positions(&args)? {
        inspect(&game, args.boards)?;
    }

    Ok(())
}

/// Positions to inspect, with any `--play` moves already made.
fn positions(args: &Args) -> Result<Vec<GameState>, Box<dyn Error>> {
    if args.fens.is_empty() {
        return Ok(vec![play_moves(STARTING_POSITION_FEN, &args.play)?]);
    }
    if !args.play.is_empty() && args.fens.len() > 1 {
        return Err("--play applies to a single position".into());
    }

    args.fens
        .iter()
        .map(|fen| play_moves(fen, &args.play))
        .collect()
}

fn play_moves(fen: &str, moves: &[String]) -> Result<GameState, Box<dyn Error>> {
    let mut game = GameState::from_fen(fen)?;
    for text in moves {
        let mv = coordinate_to_legal_move(text, &game)?;
        game.make_move(mv)?;
        info!(%mv, "played");
    }
    Ok(game)
}

fn inspect(game: &GameState, boards: bool) -> Result<(), Box<dyn Error>> {
    let moves = LegalMoveGenerator.generate_legal_moves(game)?;
    let list: Vec<String> = moves.iter().map(annotated).collect();

    println!("{}", render_game_state(game));
    println!("fen: {}", game.get_fen());
    println!("status: {:?}", game.status()?);
    println!("in check: {}", game.is_in_check(game.side_to_move));
    println!("legal moves ({}): {}", moves.len(), list.join(" "));
    println!();

    if boards {
        for (generated, name) in moves.iter().zip(&list) {
            println!("{name}");
            println!("{}", render_game_state(&generated.game_after_move));
        }
    }

    Ok(())
}

/// Coordinate text with `+` for check and `#` for mate.
fn annotated(generated: &GeneratedMove) -> String {
    let suffix = if generated.annotations.is_checkmate {
        "#"
    } else if generated.annotations.gives_check {
        "+"
    } else {
        ""
    };
    format!("{}{suffix}", generated.move_description)
}
