//! Board Utilities
//!
//! Helper functions for kanban column rendering.

use crate::models::{TaskStatus, TaskSummary};

/// Tasks partitioned by status, one column per status in board order
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumns {
    columns: Vec<(TaskStatus, Vec<TaskSummary>)>,
}

impl BoardColumns {
    /// Tasks in the column for `status`
    pub fn tasks(&self, status: TaskStatus) -> &[TaskSummary] {
        self.columns
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or(&[])
    }
}

/// Group tasks by status, keeping their relative order within each column.
/// Every status gets a column, empty or not.
pub fn group_by_status(tasks: &[TaskSummary]) -> BoardColumns {
    let mut columns: Vec<(TaskStatus, Vec<TaskSummary>)> =
        TaskStatus::ALL.iter().map(|status| (*status, Vec::new())).collect();

    for task in tasks {
        if let Some((_, column)) = columns.iter_mut().find(|(status, _)| *status == task.status) {
            column.push(task.clone());
        }
    }

    BoardColumns { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, status: TaskStatus) -> TaskSummary {
        TaskSummary {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: String::new(),
            status,
        }
    }

    fn ids(tasks: &[TaskSummary]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_group_two_tasks() {
        let tasks = vec![
            make_task("T1", TaskStatus::Pending),
            make_task("T2", TaskStatus::Completed),
        ];

        let board = group_by_status(&tasks);

        assert_eq!(ids(board.tasks(TaskStatus::Pending)), vec!["T1"]);
        assert!(board.tasks(TaskStatus::OnHold).is_empty());
        assert!(board.tasks(TaskStatus::InProgress).is_empty());
        assert!(board.tasks(TaskStatus::UnderReview).is_empty());
        assert_eq!(ids(board.tasks(TaskStatus::Completed)), vec!["T2"]);
    }

    #[test]
    fn test_empty_list_still_has_five_columns() {
        let board = group_by_status(&[]);
        let statuses: Vec<TaskStatus> = board.columns.iter().map(|(s, _)| *s).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert!(board.columns.iter().all(|(_, col)| col.is_empty()));
    }

    #[test]
    fn test_grouping_is_a_stable_partition() {
        let tasks = vec![
            make_task("a", TaskStatus::InProgress),
            make_task("b", TaskStatus::Pending),
            make_task("c", TaskStatus::InProgress),
            make_task("d", TaskStatus::UnderReview),
            make_task("e", TaskStatus::Pending),
            make_task("f", TaskStatus::OnHold),
            make_task("g", TaskStatus::InProgress),
        ];

        let board = group_by_status(&tasks);

        // Every task lands exactly once, in the column matching its status
        for status in TaskStatus::ALL {
            assert!(board.tasks(status).iter().all(|t| t.status == status));
        }
        for task in &tasks {
            let hits = TaskStatus::ALL
                .iter()
                .filter(|status| board.tasks(**status).iter().any(|t| t.id == task.id))
                .count();
            assert_eq!(hits, 1);
        }

        // Intra-column order follows input order
        assert_eq!(ids(board.tasks(TaskStatus::InProgress)), vec!["a", "c", "g"]);
        assert_eq!(ids(board.tasks(TaskStatus::Pending)), vec!["b", "e"]);

        // Concatenation in column order is a permutation of the input
        let mut flat: Vec<String> = TaskStatus::ALL
            .iter()
            .flat_map(|status| board.tasks(*status).iter().map(|t| t.id.clone()))
            .collect();
        let mut input: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        flat.sort();
        input.sort();
        assert_eq!(flat, input);
    }
}
