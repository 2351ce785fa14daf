//! Interactive console loop.

use std::io::{self, BufRead};

use tracing::{debug, info};

use tabia_core::{Board, PieceKind, Square, divide, legal_moves, perft};
use tabia_engine::pick_best_move;

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// The interactive console, holding the current game board.
///
/// Reads commands from stdin line by line; moves are entered in
/// coordinate form and matched against the legal move list.
pub struct Console {
    board: Board,
}

impl Console {
    /// Create a console with the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Run the console loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), CliError> {
        println!("{}", self.board.pretty());
        println!();
        println!("enter a move like e2e4, or 'help' for the command list");

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd),
                Err(err) => println!("error: {err}"),
            }
        }

        info!("tabia shutting down");
        Ok(())
    }

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::Show => println!("{}", self.board.pretty()),
            Command::Moves => self.handle_moves(),
            Command::Play {
                source,
                dest,
                promotion,
            } => self.handle_play(source, dest, promotion),
            Command::Best => self.handle_best(),
            Command::Undo => self.handle_undo(),
            Command::New => {
                self.board = Board::new();
                println!("{}", self.board.pretty());
            }
            Command::Perft(depth) => {
                let nodes = perft(&mut self.board, depth);
                println!("perft({depth}) = {nodes}");
            }
            Command::Divide(depth) => self.handle_divide(depth),
            Command::Help => print_help(),
            Command::Quit => {}
            Command::Unknown(input) => println!("unknown command: {input} (try 'help')"),
        }
    }

    /// Match the entered squares against the legal move list and play the
    /// move when present. With several matches (promotions entered without
    /// a letter) the first generated move wins, which is the queen.
    fn handle_play(&mut self, source: Square, dest: Square, promotion: Option<PieceKind>) {
        let found = legal_moves(&mut self.board).into_iter().find(|mv| {
            mv.source() == source
                && mv.dest() == dest
                && (promotion.is_none() || mv.promotion() == promotion)
        });

        match found {
            Some(mv) => {
                self.board.apply_move(mv);
                println!("{}", self.board.pretty());
            }
            None => println!("illegal move"),
        }
    }

    fn handle_best(&mut self) {
        match pick_best_move(&mut self.board) {
            Some(mv) => {
                println!("playing {mv}");
                self.board.apply_move(mv);
                println!("{}", self.board.pretty());
            }
            None => println!("no legal moves here"),
        }
    }

    fn handle_undo(&mut self) {
        match self.board.undo_move() {
            Some(mv) => {
                println!("took back {mv}");
                println!("{}", self.board.pretty());
            }
            None => println!("nothing to undo"),
        }
    }

    fn handle_moves(&mut self) {
        let moves = legal_moves(&mut self.board);
        for mv in &moves {
            println!("{mv}");
        }
        println!("{} legal moves", moves.len());
    }

    fn handle_divide(&mut self, depth: u32) {
        let results = divide(&mut self.board, depth);
        let total: u64 = results.iter().map(|(_, nodes)| nodes).sum();
        for (mv, nodes) in &results {
            println!("{mv}: {nodes}");
        }
        println!("total: {total}");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn print_help() {
    println!("commands:");
    println!("  e2e4 / e7e8q    play a move in coordinate form");
    println!("  show            print the board");
    println!("  moves           list the legal moves");
    println!("  best            let the engine pick and play a move");
    println!("  undo            take back the last move");
    println!("  new             start a fresh game");
    println!("  perft <depth>   count move paths to the given depth");
    println!("  divide <depth>  per-move node breakdown");
    println!("  quit            leave");
}
