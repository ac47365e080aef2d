#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use thiserror::Error;

use crate::{
    common::{ShotError, ShotOutcome},
    coord::Coord,
    game::ShotRecord,
    player::{Player, TurnView},
    ui::render_board,
};

/// Why a line typed by the player is not a target.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter two coordinates.")]
    WrongArity,
    #[error("Enter numbers!")]
    NotNumbers,
}

/// Parse "row col" in 1-indexed form into an internal coordinate.
/// Range checks are left to the board.
pub fn parse_target(line: &str) -> Result<Coord, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity);
    };
    let parse = |s: &str| -> Result<i32, InputError> {
        if !s.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(InputError::NotNumbers);
        }
        s.parse::<i32>().map_err(|_| InputError::NotNumbers)
    };
    Ok(Coord::new(parse(row)? - 1, parse(col)? - 1))
}

/// Human player reading targets from `input` and reporting to `output`.
///
/// Write failures inside the notification callbacks are kept and returned
/// by the next `ask_for_target`.
pub struct CliPlayer<I, O> {
    name: String,
    input: I,
    output: O,
    show_boards: bool,
    write_error: Option<io::Error>,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's terminal.
    pub fn stdio() -> Self {
        Self::new("Player", io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            show_boards: true,
            write_error: None,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn print_boards(&mut self, view: &TurnView<'_>) -> io::Result<()> {
        let rule = "-".repeat(29);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Your board:")?;
        writeln!(self.output, "{}", render_board(view.own))?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Enemy board:")?;
        writeln!(self.output, "{}", render_board(view.enemy))?;
        writeln!(self.output, "{}", rule)
    }

    fn say(&mut self, args: std::fmt::Arguments<'_>) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(e) = self
            .output
            .write_fmt(args)
            .and_then(|()| self.output.write_all(b"\n"))
        {
            self.write_error = Some(e);
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn ask_for_target(&mut self, view: &TurnView<'_>) -> anyhow::Result<Coord> {
        if let Some(e) = self.write_error.take() {
            return Err(anyhow::Error::new(e).context("writing to the terminal"));
        }
        if self.show_boards {
            self.print_boards(view)?;
            self.show_boards = false;
        }
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, shot: &ShotRecord) {
        let msg = match shot.outcome {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Ship hit! Shoot again.",
            ShotOutcome::Sunk => "Ship destroyed! Shoot again.",
        };
        self.say(format_args!("{}", msg));
        self.show_boards = true;
    }

    fn handle_rejected_shot(&mut self, _target: Coord, error: ShotError) {
        self.say(format_args!("{}", error));
    }

    fn handle_opponent_shot(&mut self, shot: &ShotRecord) {
        let msg = match shot.outcome {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "your ship is hit",
            ShotOutcome::Sunk => "your ship is destroyed",
        };
        self.say(format_args!("Enemy fires at {}: {}", shot.target, msg));
        self.show_boards = true;
    }
}
