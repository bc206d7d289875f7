//! The I/O driver's input parser: reads the four labeled stdin sections (`tr`,
//! `acc`, `max`, `run`) into a [`Machine`], a step budget, and the list of inputs to
//! run it against.
//!
//! Grounded on the reference implementation's `main`, which reads the same four
//! sections via `scanf`, tolerant of any whitespace (including newlines) between
//! tokens within a section. This parser keeps that token-stream tolerance but
//! requires each section header on its own line, which every real input obeys.

use thiserror::Error;

use crate::accepting_set::AcceptingSet;
use crate::config::RuntimeConfig;
use crate::machine::Machine;
use crate::symbol::Symbol;
use crate::transition::{Move, Transition};
use crate::transition_table::TransitionTable;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input ended before the '{section}' section was found")]
    MissingSection { section: &'static str },

    #[error("expected a {context} integer, found '{token}'")]
    MalformedInteger { context: &'static str, token: String },

    #[error("expected a move of L, R or S, found '{token}'")]
    UnknownMove { token: String },

    #[error("'{character}' is outside the 63-symbol alphabet")]
    OutOfAlphabet { character: char },

    #[error("state {state} exceeds the configured maximum of {max_states}")]
    StateOutOfRange { state: u32, max_states: u32 },

    #[error("malformed transition line '{line}': expected 'source read write move dest'")]
    MalformedTransitionLine { line: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The fully parsed machine description plus the inputs to evaluate it against.
pub struct ParsedRun {
    pub machine: Machine,
    pub step_budget: u64,
    pub inputs: Vec<Vec<Symbol>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Transitions,
    Accepting,
    Budget,
    Run,
}

const HEADERS: [(&str, Section); 4] = [
    ("tr", Section::Transitions),
    ("acc", Section::Accepting),
    ("max", Section::Budget),
    ("run", Section::Run),
];

/// Parses an entire machine description and input stream from `source`.
pub fn parse(source: &str, config: &RuntimeConfig) -> Result<ParsedRun, ParseError> {
    let mut table = TransitionTable::new();
    let mut accepting = AcceptingSet::with_capacity(config.accepting_set_initial_capacity());
    let mut step_budget: Option<u64> = None;
    let mut inputs = Vec::new();

    let mut section: Option<Section> = None;
    let mut seen_headers = 0usize;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(&(_, next)) = HEADERS.iter().find(|(name, _)| *name == trimmed) {
            section = Some(next);
            seen_headers += 1;
            continue;
        }

        match section {
            None => {
                // Content before any header is ignored; the first header is required.
                continue;
            }
            Some(Section::Transitions) => parse_transition_line(trimmed, config, &mut table)?,
            Some(Section::Accepting) => {
                for token in trimmed.split_whitespace() {
                    let state = parse_state(token, "accepting state", config)?;
                    accepting.add(state);
                }
            }
            Some(Section::Budget) => {
                if step_budget.is_none() {
                    if let Some(token) = trimmed.split_whitespace().next() {
                        step_budget = Some(parse_u64(token, "step budget")?);
                    }
                }
            }
            Some(Section::Run) => {
                for token in trimmed.split_whitespace() {
                    inputs.push(parse_symbols(token)?);
                }
            }
        }
    }

    if seen_headers < HEADERS.len() {
        let missing = &HEADERS[seen_headers].0;
        return Err(ParseError::MissingSection { section: missing });
    }

    accepting.finalize();

    let step_budget = step_budget.ok_or(ParseError::MissingSection { section: "max" })?;

    Ok(ParsedRun {
        machine: Machine::new(table, accepting),
        step_budget,
        inputs,
    })
}

fn parse_transition_line(
    line: &str,
    config: &RuntimeConfig,
    table: &mut TransitionTable,
) -> Result<(), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [source, read, write, movement, dest] = tokens[..] else {
        return Err(ParseError::MalformedTransitionLine {
            line: line.to_string(),
        });
    };

    let source = parse_state(source, "source state", config)?;
    let dest = parse_state(dest, "destination state", config)?;
    let read = parse_symbol(read)?;
    let write = parse_symbol(write)?;
    let movement = parse_move(movement)?;

    table.add(source, read.index(), Transition::new(write, movement, dest));
    Ok(())
}

fn parse_state(token: &str, context: &'static str, config: &RuntimeConfig) -> Result<u32, ParseError> {
    let state = parse_u64(token, context)?;
    let state = u32::try_from(state).map_err(|_| ParseError::StateOutOfRange {
        state: u32::MAX,
        max_states: config.max_states(),
    })?;
    if state >= config.max_states() {
        return Err(ParseError::StateOutOfRange {
            state,
            max_states: config.max_states(),
        });
    }
    Ok(state)
}

fn parse_u64(token: &str, context: &'static str) -> Result<u64, ParseError> {
    token.parse::<u64>().map_err(|_| ParseError::MalformedInteger {
        context,
        token: token.to_string(),
    })
}

fn parse_symbol(token: &str) -> Result<Symbol, ParseError> {
    let mut chars = token.chars();
    let c = chars.next().ok_or(ParseError::OutOfAlphabet { character: ' ' })?;
    if chars.next().is_some() {
        return Err(ParseError::OutOfAlphabet { character: c });
    }
    Symbol::from_char(c).ok_or(ParseError::OutOfAlphabet { character: c })
}

fn parse_move(token: &str) -> Result<Move, ParseError> {
    let mut chars = token.chars();
    let c = chars.next().ok_or(ParseError::UnknownMove {
        token: token.to_string(),
    })?;
    if chars.next().is_some() {
        return Err(ParseError::UnknownMove {
            token: token.to_string(),
        });
    }
    Move::try_from(c).map_err(|_| ParseError::UnknownMove {
        token: token.to_string(),
    })
}

fn parse_symbols(token: &str) -> Result<Vec<Symbol>, ParseError> {
    token
        .chars()
        .map(|c| Symbol::from_char(c).ok_or(ParseError::OutOfAlphabet { character: c }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RuntimeConfig {
        RuntimeConfig::new_default()
    }

    #[test]
    fn parses_a_minimal_well_formed_description() {
        let source = "tr\n0 a a R 1\nacc\n1\nmax\n10\nrun\naab\n";
        let parsed = parse(source, &cfg()).unwrap();
        assert_eq!(parsed.step_budget, 10);
        assert_eq!(parsed.inputs.len(), 1);
        assert!(parsed.machine.is_accepting(1));
        assert!(!parsed.machine.is_accepting(0));
        assert_eq!(parsed.machine.lookup(0, Symbol::from_char('a').unwrap().index()).len(), 1);
    }

    #[test]
    fn tolerates_blank_lines_and_multiple_tokens_per_line() {
        let source = "tr\n0 a a R 1\n\nacc\n1 2 3\nmax\n5\nrun\nab cd\n";
        let parsed = parse(source, &cfg()).unwrap();
        assert_eq!(parsed.inputs.len(), 2);
        assert!(parsed.machine.is_accepting(2));
        assert!(parsed.machine.is_accepting(3));
    }

    #[test]
    fn missing_section_is_an_error() {
        let source = "tr\n0 a a R 1\nacc\n1\n";
        let err = parse(source, &cfg()).unwrap_err();
        assert!(matches!(err, ParseError::MissingSection { section: "max" }));
    }

    #[test]
    fn malformed_move_letter_is_an_error() {
        let source = "tr\n0 a a X 1\nacc\nmax\n10\nrun\n";
        let err = parse(source, &cfg()).unwrap_err();
        assert!(matches!(err, ParseError::UnknownMove { .. }));
    }

    #[test]
    fn non_numeric_budget_is_an_error() {
        let source = "tr\nacc\nmax\nten\nrun\n";
        let err = parse(source, &cfg()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedInteger { .. }));
    }

    #[test]
    fn out_of_alphabet_symbol_in_run_section_is_an_error() {
        let source = "tr\nacc\nmax\n10\nrun\nab!\n";
        let err = parse(source, &cfg()).unwrap_err();
        assert!(matches!(err, ParseError::OutOfAlphabet { character: '!' }));
    }

    #[test]
    fn state_exceeding_max_states_is_an_error() {
        let config = RuntimeConfig::builder().max_states(5).build();
        let source = "tr\n7 a a R 1\nacc\nmax\n10\nrun\n";
        let err = parse(source, &config).unwrap_err();
        assert!(matches!(err, ParseError::StateOutOfRange { state: 7, max_states: 5 }));
    }
}
