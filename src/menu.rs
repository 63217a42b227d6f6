//! The interactive numbered menu.
//!
//! A line-oriented prompt loop over stdin/stdout. Everything is written
//! against `BufRead`/`Write` so the flows can be driven by in-memory buffers
//! in tests. Store and validation errors are printed and the loop carries on;
//! only end of input or the exit option leaves the session.

use std::io::{self, BufRead, Write};

use crate::board;
use crate::fields::{parse_priority, parse_status_choice, Status};
use crate::store::{FilterValue, TaskStore};
use crate::task::{Task, TaskPatch};

const MENU: &str = "\nTask Tracker Menu:\n\
1. Add Task\n\
2. List Tasks\n\
3. Task Board\n\
4. Edit Task\n\
5. Delete Task\n\
6. Search Tasks\n\
7. Filter Tasks\n\
8. Statistics\n\
9. Exit\n\
Choose an option: ";

/// Run the menu session on stdin/stdout. Never panics on bad input; the
/// session always ends normally.
pub fn run_menu(store: &mut TaskStore) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(e) = menu_loop(store, &mut input, &mut output) {
        eprintln!("Leaving the menu: {e}");
    }
}

fn menu_loop(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        let Some(choice) = prompt(input, output, MENU)? else {
            break;
        };
        match choice.trim() {
            "1" => add_flow(store, input, output)?,
            "2" => write!(output, "{}", board::render_list(store.tasks()))?,
            "3" => write!(output, "{}", board::render_board(store.tasks()))?,
            "4" => edit_flow(store, input, output)?,
            "5" => delete_flow(store, input, output)?,
            "6" => search_flow(store, input, output)?,
            "7" => filter_flow(store, input, output)?,
            "8" => stats_flow(store, output)?,
            "9" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            other => writeln!(output, "Invalid choice {other:?}, pick 1-9.")?,
        }
    }
    Ok(())
}

// Returns None at end of input, which ends whatever flow is running.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    read_line(input)
}

/// Ask for a priority until one validates.
fn prompt_priority(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<i64>> {
    loop {
        let Some(raw) = prompt(
            input,
            output,
            "On a scale of 1 to 10, what is its priority? (10 is most important): ",
        )?
        else {
            return Ok(None);
        };
        match parse_priority(&raw) {
            Ok(level) => return Ok(Some(level)),
            Err(e) => writeln!(output, "{e}. Please try again.")?,
        }
    }
}

/// Ask for a status selection until one validates.
fn prompt_status(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Status>> {
    loop {
        let Some(raw) = prompt(
            input,
            output,
            "Choose the status of the task:\n1. To be started\n2. In progress\n3. Finished\nOption: ",
        )?
        else {
            return Ok(None);
        };
        match parse_status_choice(&raw) {
            Ok(status) => return Ok(Some(status)),
            Err(e) => writeln!(output, "{e}. Please try again.")?,
        }
    }
}

fn add_flow(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(name) = prompt(input, output, "What is the task you need to do? ")? else {
        return Ok(());
    };
    let Some(due) = prompt(input, output, "When is it due? ")? else {
        return Ok(());
    };
    let Some(desc) = prompt(input, output, "Enter a description if you want to: ")? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority(input, output)? else {
        return Ok(());
    };
    let Some(status) = prompt_status(input, output)? else {
        return Ok(());
    };

    let task = Task::new(name.trim(), due.trim(), desc.trim(), priority, status);
    match store.add(task) {
        Ok(()) => writeln!(output, "Task added."),
        Err(e) => writeln!(output, "Task added in memory but not saved: {e}"),
    }
}

fn edit_flow(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks to edit.");
    }
    write!(output, "{}", board::render_list(store.tasks()))?;
    let Some(raw) = prompt(input, output, "Enter the task number you want to edit: ")? else {
        return Ok(());
    };
    let number = match store.resolve_index(&raw) {
        Ok(n) => n,
        Err(e) => return writeln!(output, "{e}"),
    };

    let current = store.tasks()[number - 1].clone();
    writeln!(output, "Enter new values, or leave blank to keep the current one.")?;
    let Some(patch) = read_patch(input, output, &current)? else {
        return Ok(());
    };
    match store.edit(number, &patch) {
        Ok(()) => writeln!(output, "Task updated."),
        Err(e) => writeln!(output, "Task updated in memory but not saved: {e}"),
    }
}

// Blank answers keep the current value; None bubbles up end of input.
fn read_patch(
    input: &mut impl BufRead,
    output: &mut impl Write,
    current: &Task,
) -> io::Result<Option<TaskPatch>> {
    let mut patch = TaskPatch::default();

    let Some(name) = prompt(input, output, &format!("Name [{}]: ", current.task_name))? else {
        return Ok(None);
    };
    if !name.trim().is_empty() {
        patch.task_name = Some(name.trim().to_string());
    }

    let Some(due) = prompt(input, output, &format!("Due Date [{}]: ", current.task_due_date))?
    else {
        return Ok(None);
    };
    if !due.trim().is_empty() {
        patch.task_due_date = Some(due.trim().to_string());
    }

    let Some(desc) = prompt(
        input,
        output,
        &format!("Description [{}]: ", current.task_description),
    )?
    else {
        return Ok(None);
    };
    if !desc.trim().is_empty() {
        patch.task_description = Some(desc.trim().to_string());
    }

    loop {
        let Some(raw) = prompt(
            input,
            output,
            &format!("Priority Level [{}]: ", current.display_priority()),
        )?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            break;
        }
        match parse_priority(&raw) {
            Ok(level) => {
                patch.priority_level = Some(level);
                break;
            }
            Err(e) => writeln!(output, "{e}. Please try again.")?,
        }
    }

    loop {
        let Some(raw) = prompt(
            input,
            output,
            &format!(
                "Status [{}] (1. To be started / 2. In progress / 3. Finished): ",
                current.display_status()
            ),
        )?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            break;
        }
        match parse_status_choice(&raw) {
            Ok(status) => {
                patch.status = Some(status);
                break;
            }
            Err(e) => writeln!(output, "{e}. Please try again.")?,
        }
    }

    Ok(Some(patch))
}

fn delete_flow(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks to delete.");
    }
    write!(output, "{}", board::render_list(store.tasks()))?;
    let Some(raw) = prompt(input, output, "Enter the task number you want to delete: ")? else {
        return Ok(());
    };
    let number = match store.resolve_index(&raw) {
        Ok(n) => n,
        Err(e) => return writeln!(output, "{e}"),
    };
    match store.delete(number) {
        Ok(removed) => writeln!(output, "Deleted {:?}.", removed.task_name),
        Err(e) => writeln!(output, "{e}"),
    }
}

fn search_flow(
    store: &TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(keyword) = prompt(input, output, "Keyword to search for: ")? else {
        return Ok(());
    };
    let hits = store.search(keyword.trim());
    writeln!(output, "{} matching task(s).", hits.len())?;
    write!(output, "{}", board::render_selection(&hits))
}

fn filter_flow(
    store: &TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(choice) = prompt(
        input,
        output,
        "Filter by:\n1. Status\n2. Priority level\n3. Due date\nOption: ",
    )?
    else {
        return Ok(());
    };

    let (field, value) = match choice.trim() {
        "1" => {
            let Some(status) = prompt_status(input, output)? else {
                return Ok(());
            };
            ("status", FilterValue::Text(status.as_str().to_string()))
        }
        "2" => loop {
            let Some(raw) = prompt(input, output, "Priority level to match: ")? else {
                return Ok(());
            };
            match raw.trim().parse::<i64>() {
                Ok(level) => break ("priority_level", FilterValue::Priority(level)),
                Err(_) => writeln!(output, "{:?} is not a whole number. Please try again.", raw.trim())?,
            }
        },
        "3" => {
            let Some(due) = prompt(input, output, "Due date to match: ")? else {
                return Ok(());
            };
            ("due_date", FilterValue::Text(due.trim().to_string()))
        }
        other => return writeln!(output, "Invalid choice {other:?}, pick 1-3."),
    };

    let hits = store.filter(field, &value);
    writeln!(output, "{} matching task(s).", hits.len())?;
    write!(output, "{}", board::render_selection(&hits))
}

fn stats_flow(store: &TaskStore, output: &mut impl Write) -> io::Result<()> {
    let stats = store.statistics();
    writeln!(output, "Total tasks: {}", stats.total)?;
    writeln!(output, "Completed tasks: {}", stats.completed)
}
