// File: ./src/model/item.rs
use strum::Display;

/// The three flavours of task the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TaskKind {
    #[strum(to_string = "todo")]
    Todo,
    #[strum(to_string = "deadline")]
    Deadline,
    #[strum(to_string = "event")]
    Event,
}

impl TaskKind {
    /// Single-letter tag used in the rendered form (`[T]`, `[D]`, `[E]`).
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }

    /// The delimiter syntax this kind requires. Todo has none.
    pub fn syntax(&self) -> Option<SyntaxKind> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline => Some(SyntaxKind::Deadline),
            TaskKind::Event => Some(SyntaxKind::Event),
        }
    }

    pub fn syntax_template(&self) -> Option<&'static str> {
        self.syntax().map(|s| s.template())
    }
}

/// Kinds whose arguments carry `/by`, `/from` or `/to` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SyntaxKind {
    #[strum(to_string = "deadline")]
    Deadline,
    #[strum(to_string = "event")]
    Event,
}

impl SyntaxKind {
    pub fn template(&self) -> &'static str {
        match self {
            SyntaxKind::Deadline => "deadline <desc> /by <deadline>",
            SyntaxKind::Event => "event <desc> /from <start> /to <end>",
        }
    }
}

/// Kind-specific payload. Free-form text, never parsed as dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    None,
    By(String),
    Span { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    pub completed: bool,
    pub schedule: Schedule,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_schedule(description, Schedule::None)
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::with_schedule(description, Schedule::By(by.into()))
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::with_schedule(
            description,
            Schedule::Span {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    fn with_schedule(description: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            description: description.into(),
            completed: false,
            schedule,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TaskKind {
        match self.schedule {
            Schedule::None => TaskKind::Todo,
            Schedule::By(_) => TaskKind::Deadline,
            Schedule::Span { .. } => TaskKind::Event,
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn unmark_completed(&mut self) {
        self.completed = false;
    }
}
