use crate::shared::types::Todo;
use crate::utils::format::count_label;

/// Todos split by completion, each side in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPartition {
    pub pending: Vec<Todo>,
    pub completed: Vec<Todo>,
}

impl TodoPartition {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    pub fn pending_label(&self) -> String {
        count_label(self.pending.len(), "pending")
    }

    pub fn completed_label(&self) -> String {
        count_label(self.completed.len(), "completed")
    }
}

pub fn partition_todos(todos: &[Todo]) -> TodoPartition {
    let (completed, pending) = todos.iter().cloned().partition(|t| t.completed);
    TodoPartition { pending, completed }
}
