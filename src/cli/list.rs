//! tdl list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{load_context, short_id};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct ListOptions {
    pub pending: bool,
    pub completed: bool,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ListOutput {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<Vec<Task>>,
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.data_dir, options.config)?;

    let show_pending = !options.completed;
    let show_completed = !options.pending;

    let pending: Vec<Task> = ctx.store.pending().into_iter().cloned().collect();
    let completed: Vec<Task> = ctx.store.completed().into_iter().cloned().collect();

    let mut total = 0;
    if show_pending {
        total += pending.len();
    }
    if show_completed {
        total += completed.len();
    }

    let mut human = HumanOutput::new("Tasks");
    for warning in &ctx.warnings {
        human.push_warning(warning.clone());
    }
    human.push_summary("Total", total.to_string());
    if show_pending {
        human.push_summary("Pending", pending.len().to_string());
    }
    if show_completed {
        human.push_summary("Completed", completed.len().to_string());
    }

    if show_pending {
        for task in &pending {
            human.push_detail(format!("[ ] {} {}", short_id(&task.id), task.title));
        }
    }
    if show_completed {
        for task in &completed {
            human.push_detail(format!("[x] {} {}", short_id(&task.id), task.title));
        }
    }

    let output = ListOutput {
        total,
        pending: show_pending.then_some(pending),
        completed: show_completed.then_some(completed),
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}
