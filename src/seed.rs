use crate::error::{BoardError, Result};
use crate::task::{initial_tasks, Task};
use std::{fs, path::Path};
use tracing::info;

/// Seed tasks from a JSON array on disk, or the built-in list when no path is given.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Task>> {
    let Some(path) = path else {
        return Ok(initial_tasks());
    };

    let data = fs::read_to_string(path).map_err(|source| BoardError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks: Vec<Task> = serde_json::from_str(&data).map_err(|source| BoardError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), tasks = tasks.len(), "loaded seed file");
    Ok(tasks)
}
