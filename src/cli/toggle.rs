//! tdl toggle command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{load_context, short_id};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct ToggleOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ToggleOutput {
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<Task>,
}

pub fn run_toggle(options: ToggleOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.config)?;

    let toggled = match ctx.store.resolve_id(&options.id)? {
        Some(id) => ctx.store.toggle(&id)?,
        None => None,
    };

    let mut human = match &toggled {
        Some(task) => {
            let mut human = HumanOutput::new("Task toggled");
            human.push_summary("ID", short_id(&task.id));
            human.push_summary("Title", task.title.clone());
            human.push_summary(
                "State",
                if task.completed { "completed" } else { "pending" },
            );
            human
        }
        None => {
            let mut human = HumanOutput::new("No changes");
            human.push_warning(format!("no task matches id '{}'", options.id.trim()));
            human
        }
    };
    for warning in &ctx.warnings {
        human.push_warning(warning.clone());
    }

    let output = ToggleOutput {
        matched: toggled.is_some(),
        task: toggled,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "toggle",
        &output,
        Some(&human),
    )
}
