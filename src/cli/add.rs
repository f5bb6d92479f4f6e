//! tdl add command implementation.

use std::path::PathBuf;

use crate::cli::{load_context, short_id};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct AddOptions {
    pub title: String,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.config)?;
    let task: Task = ctx.store.add(&options.title)?;

    let mut human = HumanOutput::new("Task added");
    for warning in &ctx.warnings {
        human.push_warning(warning.clone());
    }
    human.push_summary("ID", short_id(&task.id));
    human.push_summary("Title", task.title.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}
