//! Console command parsing.

use tabia_core::{PieceKind, Square};

use crate::error::CliError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show` -- print the current board.
    Show,
    /// `moves` -- list every legal move.
    Moves,
    /// A bare coordinate move such as `e2e4` or `e7e8q`.
    Play {
        /// Origin square.
        source: Square,
        /// Destination square.
        dest: Square,
        /// Promotion piece, when a fifth letter was given.
        promotion: Option<PieceKind>,
    },
    /// `best` -- let the engine pick and play a move.
    Best,
    /// `undo` -- take back the last move.
    Undo,
    /// `new` -- restart from the starting position.
    New,
    /// `perft <depth>` -- count move paths to the given depth.
    Perft(u32),
    /// `divide <depth>` -- per-move node breakdown at the given depth.
    Divide(u32),
    /// `help` -- print the command list.
    Help,
    /// `quit` -- leave the console.
    Quit,
    /// Unrecognized input (reported, never fatal).
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "show" => Ok(Command::Show),
        "moves" => Ok(Command::Moves),
        "best" => Ok(Command::Best),
        "undo" => Ok(Command::Undo),
        "new" => Ok(Command::New),
        "perft" => Ok(Command::Perft(parse_depth(tokens.get(1))?)),
        "divide" => Ok(Command::Divide(parse_depth(tokens.get(1))?)),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ if matches!(first.len(), 4 | 5) => parse_move(first),
        _ => Ok(Command::Unknown(first.to_string())),
    }
}

/// Parse a depth value from a token.
fn parse_depth(token: Option<&&str>) -> Result<u32, CliError> {
    let value = token.ok_or(CliError::MissingDepth)?;
    value.parse().map_err(|_| CliError::InvalidDepth {
        value: value.to_string(),
    })
}

/// Parse a bare coordinate move, four or five characters long.
fn parse_move(token: &str) -> Result<Command, CliError> {
    let invalid = || CliError::InvalidMove {
        value: token.to_string(),
    };

    let source = token
        .get(0..2)
        .and_then(Square::from_algebraic)
        .ok_or_else(invalid)?;
    let dest = token
        .get(2..4)
        .and_then(Square::from_algebraic)
        .ok_or_else(invalid)?;

    let promotion = match token.get(4..5) {
        None => None,
        Some(letter) => {
            let kind = letter
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .ok_or_else(invalid)?;
            Some(kind)
        }
    };

    Ok(Command::Play {
        source,
        dest,
        promotion,
    })
}
