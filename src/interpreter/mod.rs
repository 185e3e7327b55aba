// File: ./src/interpreter/mod.rs
//! Command interpreter: turns one input line at a time into task list
//! operations and the replies to show for them.
pub mod command;
pub mod messages;

use crate::error::TaskListError;
use crate::interpreter::command::{Command, IndexAction};
use crate::model::TaskKind;
use crate::store::TaskList;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct Interpreter {
    list: TaskList,
    state: State,
    bot_name: String,
}

impl Interpreter {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            list: TaskList::new(),
            state: State::Running,
            bot_name: bot_name.into(),
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn greeting(&self) -> String {
        messages::greeting(&self.bot_name)
    }

    /// Handles one raw input line and returns the messages to display.
    /// Once stopped, further lines are ignored.
    pub fn step(&mut self, line: &str) -> Vec<String> {
        if self.state == State::Stopped {
            return Vec::new();
        }

        match Command::parse(line) {
            Command::Bye => {
                self.state = State::Stopped;
                vec![messages::FAREWELL.to_string()]
            }
            Command::List => vec![self.list.render()],
            Command::Index { action, arg } => vec![self.apply_index(action, arg)],
            Command::Add { kind, arg } => self.apply_add(kind, arg),
            Command::Unknown(keyword) => {
                log::debug!("Unrecognized command '{}'", keyword);
                vec![messages::UNKNOWN_COMMAND.to_string()]
            }
        }
    }

    fn apply_index(&mut self, action: IndexAction, arg: Option<&str>) -> String {
        let Some(arg) = arg else {
            return messages::missing_index(action);
        };
        // Indexes are 32-bit; anything wider is not a valid number.
        let index = match arg.parse::<i32>() {
            Ok(i) => i64::from(i),
            Err(e) => {
                log::debug!("Rejected index '{}': {}", arg, e);
                return messages::INVALID_NUMBER.to_string();
            }
        };

        let result = match action {
            IndexAction::Mark => self.list.mark_completed(index).map(|t| t.to_string()),
            IndexAction::Unmark => self.list.unmark_completed(index).map(|t| t.to_string()),
            IndexAction::Delete => self.list.delete(index).map(|t| t.to_string()),
        };
        match result {
            Ok(rendered) => messages::index_done(action, &rendered),
            Err(e) => {
                log::debug!("{} failed: {}", action, e);
                messages::NOT_IN_LIST.to_string()
            }
        }
    }

    fn apply_add(&mut self, kind: TaskKind, arg: Option<&str>) -> Vec<String> {
        let Some(arg) = arg else {
            return vec![messages::empty_description(kind)];
        };
        match self.list.add(arg, kind) {
            Ok(task) => {
                let added = messages::added(task);
                vec![added, messages::task_count(self.list.len())]
            }
            Err(e @ TaskListError::Syntax(_)) => vec![e.to_string()],
            Err(e) => {
                log::debug!("Rejected {}: {}", kind, e);
                vec![messages::empty_description(kind)]
            }
        }
    }

    /// Drives the loop over a line source and a line sink: greeting first,
    /// then one reply batch per line until `bye` or end of input.
    ///
    /// Lines are decoded lossily, so malformed UTF-8 becomes an ordinary
    /// (unrecognized) command instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut source: R, mut sink: W) -> Result<()> {
        writeln!(sink, "{}", self.greeting()).context("Failed to write greeting")?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = source
                .read_until(b'\n', &mut buf)
                .context("Failed to read command")?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            for reply in self.step(&line) {
                writeln!(sink, "{}", reply).context("Failed to write reply")?;
            }
            sink.flush().context("Failed to flush replies")?;
            if self.state == State::Stopped {
                return Ok(());
            }
        }

        log::info!("Input closed without 'bye'");
        Ok(())
    }
}
