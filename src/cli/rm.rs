//! tdl rm command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{load_context, short_id};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct RmOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct RmOutput {
    removed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

pub fn run_rm(options: RmOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.config)?;

    let resolved = ctx.store.resolve_id(&options.id)?;
    let title = resolved
        .as_deref()
        .and_then(|id| ctx.store.find(id))
        .map(|task| task.title.clone());

    let removed = match resolved.as_deref() {
        Some(id) => ctx.store.remove(id)?,
        None => 0,
    };

    let mut human = if removed > 0 {
        let id = resolved.as_deref().unwrap_or_default();
        let mut human = HumanOutput::new("Task deleted");
        human.push_summary("ID", short_id(id));
        if let Some(title) = title {
            human.push_summary("Title", title);
        }
        human
    } else {
        let mut human = HumanOutput::new("No changes");
        human.push_warning(format!("no task matches id '{}'", options.id.trim()));
        human
    };
    for warning in &ctx.warnings {
        human.push_warning(warning.clone());
    }

    let output = RmOutput {
        removed,
        id: if removed > 0 { resolved } else { None },
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}
