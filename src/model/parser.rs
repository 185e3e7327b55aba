// File: src/model/parser.rs
//! Splits the argument text of `deadline` and `event` into their fields.
use crate::error::{Result, TaskListError};
use crate::model::{SyntaxKind, Task, TaskKind};
use once_cell::sync::Lazy;
use regex::Regex;

static BY_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r" +/by +").expect("valid /by pattern"));
static FROM_DELIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +/from +").expect("valid /from pattern"));
static TO_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r" +/to +").expect("valid /to pattern"));

/// Splits on every match of `delim`, dropping trailing empty fields.
fn split_fields<'a>(delim: &Regex, input: &'a str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = delim.split(input).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Builds a task of `kind` from the text following the command keyword.
///
/// Deadline: `<desc> /by <by>`, only the first `/by` is a delimiter.
/// Event: `<desc> /from <from> /to <to>`, each delimiter must occur exactly once
/// and `/from` must come before `/to`.
pub fn parse_task(input: &str, kind: TaskKind) -> Result<Task> {
    let task = match kind {
        TaskKind::Todo => Task::todo(input),
        TaskKind::Deadline => {
            let parts: Vec<&str> = BY_DELIM.splitn(input, 2).collect();
            let [desc, by] = parts.as_slice() else {
                return Err(TaskListError::Syntax(SyntaxKind::Deadline));
            };
            Task::deadline(*desc, *by)
        }
        TaskKind::Event => {
            let outer = split_fields(&FROM_DELIM, input);
            let [desc, rest] = outer.as_slice() else {
                return Err(TaskListError::Syntax(SyntaxKind::Event));
            };
            let inner = split_fields(&TO_DELIM, rest);
            let [from, to] = inner.as_slice() else {
                return Err(TaskListError::Syntax(SyntaxKind::Event));
            };
            Task::event(*desc, *from, *to)
        }
    };

    if task.description().trim().is_empty() {
        return Err(TaskListError::EmptyDescription);
    }
    Ok(task)
}
