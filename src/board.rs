//! Rendering of task lists: the flat numbered view and the status board.
//!
//! Renderers build strings and leave printing to the caller, which is what
//! makes them testable without capturing stdout.

use colored::{ColoredString, Colorize};

use crate::fields::{PriorityTier, Status};
use crate::task::Task;

/// Column heading shown on the board for each status group.
fn board_title(status: Status) -> &'static str {
    match status {
        Status::ToBeStarted => "To Be Started",
        Status::InProgress => "In Progress",
        Status::Finished => "Finished",
    }
}

fn tint(line: String, tier: PriorityTier) -> ColoredString {
    match tier {
        PriorityTier::High => line.red(),
        PriorityTier::Medium => line.yellow(),
        PriorityTier::Low => line.green(),
    }
}

/// The board: one column per canonical status, in menu order. Records without
/// a status land under "To Be Started"; records with an unrecognised status
/// string appear in no column. Lines are tinted by priority tier.
pub fn render_board(tasks: &[Task]) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        out.push_str(&format!("------- {} -------\n", board_title(status)));
        for task in tasks {
            if task.display_status() != status.as_str() {
                continue;
            }
            let line = format!(
                "{} - Due: {} (Priority: {})",
                task.task_name,
                task.task_due_date,
                task.display_priority()
            );
            out.push_str(&format!("{}\n", tint(line, PriorityTier::of(task.display_priority()))));
        }
        out.push('\n');
    }
    out
}

/// Numbered detail view of every record, in storage order. The numbers shown
/// here are the 1-based handles accepted by edit and delete.
pub fn render_list(tasks: &[Task]) -> String {
    render_selection(&tasks.iter().collect::<Vec<_>>())
}

/// Numbered detail view of a query result (search or filter output).
/// Numbering restarts at 1 for the selection.
pub fn render_selection(items: &[&Task]) -> String {
    if items.is_empty() {
        return "No tasks to show.\n".to_string();
    }
    let mut out = String::new();
    for (i, task) in items.iter().enumerate() {
        out.push_str(&format!("Task {}:\n", i + 1));
        out.push_str(&format!("  Name: {}\n", task.task_name));
        out.push_str(&format!("  Due Date: {}\n", task.task_due_date));
        out.push_str(&format!("  Description: {}\n", task.task_description));
        out.push_str(&format!("  Priority Level: {}\n", task.display_priority()));
        out.push_str(&format!("  Status: {}\n", task.display_status()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Status;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn board_groups_by_status_in_menu_order() {
        plain();
        let tasks = vec![
            Task::new("Task 1", "2023-12-31", "", 9, Status::ToBeStarted),
            Task::new("Task 2", "2024-01-15", "", 5, Status::InProgress),
            Task::new("Task 3", "2024-02-20", "", 2, Status::Finished),
        ];
        let out = render_board(&tasks);

        let started = out.find("------- To Be Started -------").unwrap();
        let progress = out.find("------- In Progress -------").unwrap();
        let finished = out.find("------- Finished -------").unwrap();
        assert!(started < progress && progress < finished);

        let t1 = out.find("Task 1 - Due: 2023-12-31 (Priority: 9)").unwrap();
        let t2 = out.find("Task 2 - Due: 2024-01-15 (Priority: 5)").unwrap();
        let t3 = out.find("Task 3 - Due: 2024-02-20 (Priority: 2)").unwrap();
        assert!(started < t1 && t1 < progress);
        assert!(progress < t2 && t2 < finished);
        assert!(finished < t3);
    }

    #[test]
    fn board_defaults_missing_status_and_priority() {
        plain();
        let bare = Task {
            task_name: "Task without Status".to_string(),
            task_due_date: "2023-12-31".to_string(),
            task_description: String::new(),
            priority_level: None,
            status: None,
        };
        let out = render_board(&[bare]);
        let started = out.find("------- To Be Started -------").unwrap();
        let line = out.find("Task without Status - Due: 2023-12-31 (Priority: 5)").unwrap();
        let progress = out.find("------- In Progress -------").unwrap();
        assert!(started < line && line < progress);
    }

    #[test]
    fn board_hides_unrecognised_statuses() {
        plain();
        let odd = Task {
            task_name: "Mystery".to_string(),
            task_due_date: String::new(),
            task_description: String::new(),
            priority_level: Some(5),
            status: Some("On hold".to_string()),
        };
        let out = render_board(&[odd]);
        assert!(!out.contains("Mystery"));
    }

    #[test]
    fn list_shows_numbered_details_with_defaults() {
        plain();
        let tasks = vec![
            Task::new("Write report", "2024-01-31", "Annual", 5, Status::InProgress),
            Task {
                task_name: "Old record".to_string(),
                task_due_date: String::new(),
                task_description: String::new(),
                priority_level: None,
                status: None,
            },
        ];
        let out = render_list(&tasks);
        assert!(out.contains("Task 1:\n  Name: Write report"));
        assert!(out.contains("  Status: In progress"));
        assert!(out.contains("Task 2:\n  Name: Old record"));
        assert!(out.contains("  Priority Level: 5\n  Status: To be started"));
    }

    #[test]
    fn empty_list_says_so() {
        plain();
        assert_eq!(render_list(&[]), "No tasks to show.\n");
    }
}
