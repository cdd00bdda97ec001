//! Shell commands, one per tab list operation.

use std::str::{FromStr, SplitWhitespace};
use tabchain_memory::{MemoryError, MemoryUsage};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a tab at the end of the list
    Open {
        url: String,
        memory: MemoryUsage,
        name: String,
    },
    /// Switch to the previous tab
    Prev,
    /// Switch to the next tab
    Next,
    /// Close the current tab
    Close,
    /// Bookmark the current tab
    Bookmark,
    /// List bookmarks
    Bookmarks,
    /// Move the current tab to the front
    First,
    /// Show total memory
    Memory,
    /// Evict the tab using the most memory
    Evict,
    /// Show the tab list
    Tabs,
    /// Show the current tab
    Current,
    /// Print the tab list as JSON
    Json,
    /// Show memory statistics
    Stats,
    Help,
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{command}` is missing its {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    InvalidMemory(#[from] MemoryError),
}

/// Usage text for `help`.
pub const HELP: &str = "\
Commands:
  open <url> <memory> <name...>  open a tab at the end of the list
  prev | next                    switch to the previous/next tab
  close                          close the current tab
  bookmark                       bookmark the current tab
  bookmarks                      list bookmarks
  first                          move the current tab to the front
  memory                         show total memory consumption
  evict                          close the tab using the most memory
  tabs                           show the tab list
  current                        show the current tab
  json                           print the tab list as JSON
  stats                          show memory statistics
  help                           show this help
  quit | exit                    leave the shell";

fn bare(
    command: Command,
    name: &'static str,
    mut rest: SplitWhitespace<'_>,
) -> Result<Command, CommandError> {
    match rest.next() {
        Some(_) => Err(CommandError::UnexpectedArgument(name)),
        None => Ok(command),
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match keyword.to_ascii_lowercase().as_str() {
            "open" => {
                let url = words.next().ok_or(CommandError::MissingArgument {
                    command: "open",
                    argument: "url",
                })?;
                let memory: MemoryUsage = words
                    .next()
                    .ok_or(CommandError::MissingArgument {
                        command: "open",
                        argument: "memory",
                    })?
                    .parse()?;
                let name = words.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "open",
                        argument: "name",
                    });
                }
                Ok(Command::Open {
                    url: url.to_string(),
                    memory,
                    name,
                })
            }
            "prev" => bare(Command::Prev, "prev", words),
            "next" => bare(Command::Next, "next", words),
            "close" => bare(Command::Close, "close", words),
            "bookmark" => bare(Command::Bookmark, "bookmark", words),
            "bookmarks" => bare(Command::Bookmarks, "bookmarks", words),
            "first" => bare(Command::First, "first", words),
            "memory" => bare(Command::Memory, "memory", words),
            "evict" => bare(Command::Evict, "evict", words),
            "tabs" => bare(Command::Tabs, "tabs", words),
            "current" => bare(Command::Current, "current", words),
            "json" => bare(Command::Json, "json", words),
            "stats" => bare(Command::Stats, "stats", words),
            "help" => bare(Command::Help, "help", words),
            "quit" | "exit" => bare(Command::Quit, "quit", words),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
