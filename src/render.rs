use crate::surface::{Card, Surface};
use crate::task::{Column, Task};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCounts([usize; 3]);

impl ColumnCounts {
    pub fn get(&self, column: Column) -> usize {
        self.0[column.index()]
    }

    fn bump(&mut self, column: Column) {
        self.0[column.index()] += 1;
    }
}

pub fn header_text(column: Column, count: usize) -> String {
    format!("{} ({})", column.label(), count)
}

/// Rebuilds every column from `tasks`, replacing whatever the surface held.
///
/// Tasks whose status maps to no column are skipped with a warning.
pub fn render<S: Surface>(
    tasks: &[Task],
    surface: &mut S,
    show_descriptions: bool,
) -> ColumnCounts {
    for column in Column::ALL {
        surface.clear_column(column);
    }

    let mut counts = ColumnCounts::default();
    for task in tasks {
        let Some(column) = Column::for_status(&task.status) else {
            warn!(task_id = task.id, status = %task.status, "unknown status, task not rendered");
            continue;
        };
        surface.append_card(
            column,
            Card {
                task_id: task.id,
                title: task.title.clone(),
                description: show_descriptions.then(|| task.description.clone()),
            },
        );
        counts.bump(column);
    }

    for column in Column::ALL {
        surface.set_header(column, header_text(column, counts.get(column)));
    }

    debug!(
        todo = counts.get(Column::Todo),
        doing = counts.get(Column::Doing),
        done = counts.get(Column::Done),
        "rendered board"
    );
    counts
}
