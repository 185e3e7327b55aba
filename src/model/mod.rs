// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod parser;

pub use display::TaskDisplay;
pub use item::{Schedule, SyntaxKind, Task, TaskKind};
pub use parser::parse_task;
