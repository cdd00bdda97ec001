//! Line-oriented command shell over a tab list.

use crate::command::{self, Command, HELP};
use crate::config::ShellConfig;
use crate::render::Renderer;
use std::io::{self, BufRead, Write};
use tabchain_tabs::{Tab, TabList};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop the shell
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the shell does after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Print this and read the next command
    Continue(String),
    Quit,
}

/// Owns a tab list and drives it from text commands.
pub struct Shell {
    list: TabList,
    renderer: Renderer,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            list: TabList::new(),
            renderer: Renderer::from_config(&config),
            config,
        }
    }

    /// Get the tab list.
    pub fn list(&self) -> &TabList {
        &self.list
    }

    /// Apply one command to the tab list.
    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        let r = &self.renderer;
        let text = match command {
            Command::Open { url, memory, name } => {
                let tab = Tab::new(url, name, memory);
                let text = r.opened(&tab);
                self.list.push(tab);
                text
            }
            Command::Prev => r.switched(&self.list.switch_to_prev_tab()),
            Command::Next => r.switched(&self.list.switch_to_next_tab()),
            Command::Close => r.closed(&self.list.close_current_tab()),
            Command::Bookmark => r.bookmarked(&self.list.bookmark_current()),
            Command::Bookmarks => r.bookmarks(self.list.show_bookmark_tab()),
            Command::First => r.moved(&self.list.move_current_to_first()),
            Command::Memory => r.total_memory(self.list.total_memory()),
            Command::Evict => r.evicted(&self.list.delete_tab()),
            Command::Tabs => r.tabs(&self.list),
            Command::Current => r.current(&self.list),
            Command::Json => serde_json::to_string_pretty(&self.list.summaries())?,
            Command::Stats => r.stats(self.list.stats()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(text))
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Malformed lines are reported on `output` and skipped. With
    /// `interactive` set, the prompt is printed before each read.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        interactive: bool,
    ) -> Result<(), ShellError> {
        info!(interactive, "Shell started");

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let command = match command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    warn!(line = %line.trim(), "Rejected command: {}", err);
                    writeln!(output, "error: {err}")?;
                    continue;
                }
            };

            if self.config.echo_commands && !interactive {
                writeln!(output, "{}{}", self.config.prompt, line.trim())?;
            }

            debug!(?command, "Executing command");
            match self.execute(command)? {
                Flow::Continue(text) => writeln!(output, "{text}")?,
                Flow::Quit => break,
            }
        }

        Ok(())
    }
}
