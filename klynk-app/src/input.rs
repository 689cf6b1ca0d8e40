//! Keyboard commands
//!
//! One command per input line. Matching is case-insensitive and
//! ignores surrounding whitespace.

use klynk_core::state::Event;
use thiserror::Error;

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `n`
    Next,
    /// `p`
    Previous,
    /// `t`
    ToggleTimer,
    /// `r`
    ResetTimer,
    /// `a`, show the instruction again
    Repeat,
    /// `s`
    Start,
    /// `+`
    MoreServings,
    /// `-`
    FewerServings,
    /// `c N`, tick ingredient N off the list
    Check(u32),
    /// `b`
    Back,
    /// `h` or `?`
    Help,
    /// `q`
    Quit,
}

/// Input that is not a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?} (h for help)")]
    Unknown(String),

    #[error("'c' needs an ingredient number")]
    MissingIngredient,

    #[error("{0:?} is not an ingredient number")]
    BadIngredient(String),
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "t" | "timer" => Command::ToggleTimer,
            "r" | "reset" => Command::ResetTimer,
            "a" | "again" => Command::Repeat,
            "s" | "start" => Command::Start,
            "+" => Command::MoreServings,
            // U+2212 minus sign
            "-" | "\u{2212}" => Command::FewerServings,
            "c" | "check" => {
                let arg = words.next().ok_or(CommandError::MissingIngredient)?;
                let id = arg
                    .parse()
                    .map_err(|_| CommandError::BadIngredient(arg.to_string()))?;
                Command::Check(id)
            }
            "b" | "back" => Command::Back,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(command)
    }

    /// The session event this command stands for, if any
    pub fn event(&self) -> Option<Event> {
        match self {
            Command::Next => Some(Event::NextStep),
            Command::Previous => Some(Event::PreviousStep),
            Command::ToggleTimer => Some(Event::ToggleTimer),
            Command::ResetTimer => Some(Event::ResetTimer),
            Command::Repeat => Some(Event::Repeat),
            Command::Start => Some(Event::StartCooking),
            Command::MoreServings | Command::FewerServings => Some(Event::ServingsChanged),
            Command::Back => Some(Event::Back),
            Command::Check(_) | Command::Help | Command::Quit => None,
        }
    }
}

/// Key reference shown by `h`
pub const HELP_TEXT: &str = "\
n next step      p previous step
t start/pause    r reset timer
a repeat step    s start cooking
+ / - servings   c N check ingredient N
b back           q quit";
