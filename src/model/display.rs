// File: ./src/model/display.rs
use crate::model::item::{Schedule, Task};
use std::fmt;

pub trait TaskDisplay {
    fn checkbox_symbol(&self) -> &'static str;
    fn schedule_suffix(&self) -> String;
}

impl TaskDisplay for Task {
    fn checkbox_symbol(&self) -> &'static str {
        if self.completed { "[X]" } else { "[ ]" }
    }

    fn schedule_suffix(&self) -> String {
        match &self.schedule {
            Schedule::None => String::new(),
            Schedule::By(by) => format!(" (by: {})", by),
            Schedule::Span { from, to } => format!(" (from: {} to: {})", from, to),
        }
    }
}

// `[<kind>][<mark>] <description><suffix>`
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}{}",
            self.kind().tag(),
            self.checkbox_symbol(),
            self.description(),
            self.schedule_suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_variant() {
        assert_eq!(Task::todo("read book").to_string(), "[T][ ] read book");
        assert_eq!(
            Task::deadline("submit", "sunday").to_string(),
            "[D][ ] submit (by: sunday)"
        );
        assert_eq!(
            Task::event("trip", "mon", "fri").to_string(),
            "[E][ ] trip (from: mon to: fri)"
        );
    }

    #[test]
    fn completed_mark_is_x() {
        let mut t = Task::deadline("return book", "June 6th");
        t.mark_completed();
        assert_eq!(t.to_string(), "[D][X] return book (by: June 6th)");
    }
}
