// File: src/store.rs
use crate::error::{Result, TaskListError};
use crate::model::{Task, TaskKind, parse_task};

pub const EMPTY_LIST_MESSAGE: &str = "List is empty.";

/// Ordered, in-memory task list. Every index taken from the user is 1-based
/// and positions compact after a delete.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Looks up a task by its 1-based position.
    pub fn get(&self, index: i64) -> Option<&Task> {
        self.offset(index).ok().map(|i| &self.tasks[i])
    }

    /// Parses `input` according to `kind` and appends the result.
    /// The list is left untouched when parsing fails.
    pub fn add(&mut self, input: &str, kind: TaskKind) -> Result<&Task> {
        let task = parse_task(input, kind)?;
        log::debug!("Adding {} task: {}", kind, task);
        let pos = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[pos])
    }

    pub fn mark_completed(&mut self, index: i64) -> Result<&Task> {
        let i = self.offset(index)?;
        let task = &mut self.tasks[i];
        task.mark_completed();
        log::debug!("Marked task {} as done", index);
        Ok(&*task)
    }

    pub fn unmark_completed(&mut self, index: i64) -> Result<&Task> {
        let i = self.offset(index)?;
        let task = &mut self.tasks[i];
        task.unmark_completed();
        log::debug!("Marked task {} as not done", index);
        Ok(&*task)
    }

    /// Removes and returns the task at `index`; later tasks shift down by one.
    pub fn delete(&mut self, index: i64) -> Result<Task> {
        let i = self.offset(index)?;
        let task = self.tasks.remove(i);
        log::debug!("Deleted task {} ({} left)", index, self.tasks.len());
        Ok(task)
    }

    /// Numbered listing, one `<position>.<task>` per line.
    pub fn render(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}.{}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Converts a 1-based user index into a vector offset. An empty list
    // fails here like any other out-of-range index.
    fn offset(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|i| (1..=self.tasks.len()).contains(i))
            .map(|i| i - 1)
            .ok_or(TaskListError::NotInList { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("read book", TaskKind::Todo).unwrap();
        list.add("submit /by sunday", TaskKind::Deadline).unwrap();
        list.add("trip /from mon /to fri", TaskKind::Event).unwrap();
        list
    }

    #[test]
    fn add_appends_in_order() {
        let list = sample();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.render(),
            "1.[T][ ] read book\n2.[D][ ] submit (by: sunday)\n3.[E][ ] trip (from: mon to: fri)"
        );
    }

    #[test]
    fn add_returns_the_appended_task() {
        let mut list = sample();
        let added = list.add("water plants", TaskKind::Todo).unwrap().to_string();
        assert_eq!(added, "[T][ ] water plants");
        assert_eq!(list.get(4).unwrap().to_string(), added);
    }

    #[test]
    fn failed_add_leaves_length() {
        let mut list = sample();
        assert!(list.add("oops", TaskKind::Deadline).is_err());
        assert!(list.add("oops /from mon", TaskKind::Event).is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_render() {
        assert_eq!(TaskList::new().render(), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn mark_then_unmark_restores_rendering() {
        let mut list = sample();
        let before = list.get(2).unwrap().to_string();
        assert_eq!(
            list.mark_completed(2).unwrap().to_string(),
            "[D][X] submit (by: sunday)"
        );
        let after = list.unmark_completed(2).unwrap().to_string();
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_indices_fail_without_mutation() {
        let mut list = sample();
        let snapshot = list.render();
        for idx in [0, -1, 4, i64::MAX, i64::MIN] {
            assert_eq!(
                list.mark_completed(idx).unwrap_err(),
                TaskListError::NotInList { index: idx }
            );
            assert!(list.unmark_completed(idx).is_err());
            assert!(list.delete(idx).is_err());
        }
        assert_eq!(list.render(), snapshot);
    }

    #[test]
    fn empty_list_rejects_every_index() {
        let mut list = TaskList::new();
        assert!(list.mark_completed(1).is_err());
        assert!(list.unmark_completed(1).is_err());
        assert!(list.delete(1).is_err());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn delete_compacts_positions() {
        let mut list = sample();
        let removed = list.delete(1).unwrap();
        assert_eq!(removed.to_string(), "[T][ ] read book");
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get(1).unwrap().to_string(),
            "[D][ ] submit (by: sunday)"
        );
        assert_eq!(
            list.get(2).unwrap().to_string(),
            "[E][ ] trip (from: mon to: fri)"
        );
        assert!(list.get(3).is_none());
    }
}
