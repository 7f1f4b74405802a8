//! Perft regression runner.
//!
//! Usage:
//! `cargo run --release --bin perft_check -- --file tests/data/perft_cases.txt --depth 3`
//! `cargo run --release --bin perft_check -- --file tests/data/perft_cases.txt --depth 5 --threads --time`

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::legal_move_generator::FastLegalMoveGenerator;
use plum_rules::move_generation::perft::{perft_legal, perft_multi_threaded, PerftCounts};
use plum_rules::utils::perft_cases::parse_perft_cases;

#[derive(Parser, Debug)]
#[command(name = "perft_check", about = "Check perft statistics against a reference case file")]
struct Args {
    /// Case file with `name:`, `fen:` and `Dn:` rows.
    #[arg(long)]
    file: PathBuf,

    /// Deepest row to check; deeper rows are skipped.
    #[arg(long)]
    depth: u8,

    /// Print elapsed time and nodes per second for each row.
    #[arg(long)]
    time: bool,

    /// Split each search across one thread per root move.
    #[arg(long)]
    threads: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(&Args::parse()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            error!(failures, "perft mismatches");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "perft check aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, Box<dyn Error>> {
    let text = std::fs::read_to_string(&args.file)?;
    let cases = parse_perft_cases(&text)?;
    let mut failures = 0usize;

    for case in &cases {
        let game = GameState::from_fen(&case.fen)?;

        for (depth, expected) in case.expected.iter().filter(|(depth, _)| *depth <= args.depth) {
            let started = Instant::now();
            let actual = if args.threads {
                perft_multi_threaded(Arc::new(FastLegalMoveGenerator), &game, *depth)?
            } else {
                perft_legal(&game, *depth)?
            };
            let elapsed = started.elapsed();

            let ok = counts_match(expected, &actual);
            if !ok {
                failures += 1;
            }
            println!(
                "{} {} D{}: nodes={} captures={} ep={} castles={} promotions={} checks={} mates={}",
                if ok { "ok  " } else { "FAIL" },
                case.name,
                depth,
                actual.nodes,
                actual.captures,
                actual.en_passant,
                actual.castles,
                actual.promotions,
                actual.checks,
                actual.checkmates
            );
            if !ok {
                println!("     expected: {expected:?}");
            }
            if args.time {
                let secs = elapsed.as_secs_f64();
                let nps = if secs > 0.0 { actual.nodes as f64 / secs } else { 0.0 };
                println!("     elapsed_ms={} nps={nps:.0}", elapsed.as_millis());
            }
        }
    }

    info!(cases = cases.len(), failures, "perft check finished");
    Ok(failures)
}

/// Rows that only publish node counts leave the other columns at zero.
fn counts_match(expected: &PerftCounts, actual: &PerftCounts) -> bool {
    if expected.nodes != actual.nodes {
        return false;
    }
    let detailed = PerftCounts {
        nodes: 0,
        ..*expected
    } != PerftCounts::default();
    !detailed || expected == actual
}
