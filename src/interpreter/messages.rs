// File: ./src/interpreter/messages.rs
//! Every line the bot says, kept in one place.
use crate::interpreter::command::IndexAction;
use crate::model::{Task, TaskKind};

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
pub const INVALID_NUMBER: &str = "Please input a valid number for your index!";
pub const NOT_IN_LIST: &str =
    "Make sure your item is in the list!\nYou may check using the \"list\" command.";
pub const UNKNOWN_COMMAND: &str = "☹ OOPS!!! I'm sorry, but I don't know what that means :-(";

pub fn greeting(bot_name: &str) -> String {
    format!("Hello! I'm {}\nWhat can I do for you?", bot_name)
}

pub fn added(task: &Task) -> String {
    format!("Got it. I've added this task:\n{}", task)
}

pub fn task_count(count: usize) -> String {
    format!("Now you have {} tasks in the list.", count)
}

pub fn index_done(action: IndexAction, rendered: &str) -> String {
    let header = match action {
        IndexAction::Mark => "Nice! I've marked this task as done:",
        IndexAction::Unmark => "OK, I've marked this task as not done yet:",
        IndexAction::Delete => "Noted. I've removed this task:",
    };
    format!("{}\n  {}", header, rendered)
}

pub fn missing_index(action: IndexAction) -> String {
    format!(
        "☹ OOPS!!! You did not specify which task you want to {action}.\nPlease use this syntax:\n{action} <index>"
    )
}

pub fn empty_description(kind: TaskKind) -> String {
    let base = format!("☹ OOPS!!! The description of a {} cannot be empty.", kind);
    match kind.syntax_template() {
        Some(template) => format!("{}\nPlease use this syntax:\n{}", base, template),
        None => base,
    }
}
