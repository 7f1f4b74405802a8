//! Reader for perft reference case files.
//!
//! ```text
//! # comment
//! name: kiwipete
//! fen: r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1
//! D1: 48 8 0 2 0 0 0
//! ```
//!
//! Depth rows list nodes, captures, en passant, castles, promotions, checks
//! and checkmates in that order.

use crate::errors::PerftCaseError;
use crate::move_generation::perft::PerftCounts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftCase {
    pub name: String,
    pub fen: String,
    pub expected: Vec<(u8, PerftCounts)>,
}

pub fn parse_perft_cases(text: &str) -> Result<Vec<PerftCase>, PerftCaseError> {
    let mut cases = Vec::<PerftCase>::new();
    let mut pending_name: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix("name:") {
            pending_name = Some(name.trim().to_owned());
        } else if let Some(fen) = line.strip_prefix("fen:") {
            let name = pending_name
                .take()
                .unwrap_or_else(|| format!("case_{}", cases.len() + 1));
            cases.push(PerftCase {
                name,
                fen: fen.trim().to_owned(),
                expected: Vec::new(),
            });
        } else if line.starts_with('D') {
            let row = parse_depth_row(line).ok_or_else(|| PerftCaseError::DepthRow {
                line: line_number,
                text: line.to_owned(),
            })?;
            cases
                .last_mut()
                .ok_or(PerftCaseError::RowWithoutFen { line: line_number })?
                .expected
                .push(row);
        } else {
            return Err(PerftCaseError::DepthRow {
                line: line_number,
                text: line.to_owned(),
            });
        }
    }

    Ok(cases)
}

fn parse_depth_row(line: &str) -> Option<(u8, PerftCounts)> {
    let (depth, values) = line.strip_prefix('D')?.split_once(':')?;
    let depth = depth.trim().parse::<u8>().ok()?;

    let numbers = values
        .split_whitespace()
        .map(|value| value.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;
    let [nodes, captures, en_passant, castles, promotions, checks, checkmates] = numbers[..]
    else {
        return None;
    };

    Some((
        depth,
        PerftCounts {
            nodes,
            captures,
            en_passant,
            castles,
            promotions,
            checks,
            checkmates,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_cases_and_comments() {
        let text = "\
# reference counts
name: start
fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
D1: 20 0 0 0 0 0 0
D3: 8902 34 0 0 0 12 0

fen: 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1
D1: 14 1 0 0 0 2 0
";
        let cases = parse_perft_cases(text).expect("case file should parse");

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "start");
        assert_eq!(cases[0].expected.len(), 2);
        assert_eq!(cases[0].expected[1].0, 3);
        assert_eq!(cases[0].expected[1].1.captures, 34);
        assert_eq!(cases[1].name, "case_2");
        assert_eq!(cases[1].expected[0].1.checks, 2);
    }

    #[test]
    fn reports_bad_rows_with_line_numbers() {
        assert_eq!(
            parse_perft_cases("D1: 20 0 0 0 0 0 0"),
            Err(PerftCaseError::RowWithoutFen { line: 1 })
        );
        assert_eq!(
            parse_perft_cases("fen: x\nD1: 20 0 0"),
            Err(PerftCaseError::DepthRow {
                line: 2,
                text: "D1: 20 0 0".to_owned()
            })
        );
    }
}
