//! Positional `SET` clause builder for partial updates.
//!
//! # Invariants
//! - Values are only ever bound, never spliced into SQL text.
//! - An empty builder cannot be rendered.

use rusqlite::types::Value;

/// Accumulates `(column, value)` pairs for an `UPDATE ... SET` clause.
#[derive(Debug, Default)]
pub struct UpdateAssignments {
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

/// Rendered assignment clause ready to be embedded into a statement.
#[derive(Debug)]
pub struct RenderedAssignments {
    /// `col = ?1, col = ?2, ...`
    pub clause: String,
    /// Bound values in placeholder order.
    pub values: Vec<Value>,
    /// First placeholder index free for the caller's own parameters.
    pub next_placeholder: usize,
}

impl UpdateAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: &'static str, value: impl Into<Value>) {
        self.columns.push(column);
        self.values.push(value.into());
    }

    /// Pushes only when `value` is present.
    pub fn push_opt<T: Into<Value>>(&mut self, column: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(column, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Renders the clause, or `None` when nothing was pushed.
    pub fn render(self) -> Option<RenderedAssignments> {
        if self.is_empty() {
            return None;
        }

        let clause = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let next_placeholder = self.values.len() + 1;

        Some(RenderedAssignments {
            clause,
            values: self.values,
            next_placeholder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateAssignments;
    use rusqlite::types::Value;

    #[test]
    fn empty_builder_does_not_render() {
        assert!(UpdateAssignments::new().render().is_none());
    }

    #[test]
    fn absent_values_are_skipped() {
        let mut assignments = UpdateAssignments::new();
        assignments.push_opt::<String>("title", None);
        assignments.push_opt("done", Some(true));

        assert_eq!(assignments.len(), 1);
        let rendered = assignments.render().unwrap();
        assert_eq!(rendered.clause, "done = ?1");
        assert_eq!(rendered.values, vec![Value::Integer(1)]);
        assert_eq!(rendered.next_placeholder, 2);
    }

    #[test]
    fn placeholders_follow_push_order() {
        let mut assignments = UpdateAssignments::new();
        assignments.push("title", "Chores".to_string());
        assignments.push("description", "weekend".to_string());
        assignments.push("done", false);

        let rendered = assignments.render().unwrap();
        assert_eq!(rendered.clause, "title = ?1, description = ?2, done = ?3");
        assert_eq!(rendered.values.len(), 3);
        assert_eq!(rendered.next_placeholder, 4);
    }

    #[test]
    fn values_are_not_inlined() {
        let mut assignments = UpdateAssignments::new();
        assignments.push("title", "x'; DROP TABLE todo_lists; --".to_string());

        let rendered = assignments.render().unwrap();
        assert!(!rendered.clause.contains("DROP"));
    }
}
