// File: ./src/interpreter/command.rs
// Classification of a raw input line into a command.
use crate::model::TaskKind;
use strum::{Display, EnumString};

/// Commands that take a 1-based task index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum IndexAction {
    Mark,
    Unmark,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Bye,
    List,
    /// `arg` is `None` when nothing followed the keyword.
    Index {
        action: IndexAction,
        arg: Option<&'a str>,
    },
    Add {
        kind: TaskKind,
        arg: Option<&'a str>,
    },
    Unknown(&'a str),
}

/// Splits a trimmed line at its first whitespace run. The remainder is
/// returned verbatim, interior whitespace included.
pub fn split_keyword(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => {
            let rest = rest.trim_start();
            (keyword, (!rest.is_empty()).then_some(rest))
        }
        None => (line, None),
    }
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "bye" => return Command::Bye,
            "list" => return Command::List,
            _ => {}
        }

        let (keyword, arg) = split_keyword(line);
        if let Ok(action) = keyword.parse::<IndexAction>() {
            return Command::Index { action, arg };
        }
        let kind = match keyword {
            "todo" => TaskKind::Todo,
            "deadline" => TaskKind::Deadline,
            "event" => TaskKind::Event,
            _ => return Command::Unknown(keyword),
        };
        Command::Add { kind, arg }
    }
}
