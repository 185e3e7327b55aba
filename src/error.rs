// File: ./src/error.rs
//! Recoverable failures raised by task list operations.
use crate::model::SyntaxKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    /// A required `/by`, `/from` or `/to` delimiter is missing or repeated.
    /// The message is shown to the user verbatim.
    #[error("Incorrect syntax!\nPlease use this syntax:\n{}", .0.template())]
    Syntax(SyntaxKind),

    #[error("task {index} is not in the list")]
    NotInList { index: i64 },

    #[error("task description cannot be empty")]
    EmptyDescription,
}

pub type Result<T> = std::result::Result<T, TaskListError>;
