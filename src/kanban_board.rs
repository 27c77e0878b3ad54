use crate::render::{render, ColumnCounts};
use crate::surface::{ModalFields, Surface};
use crate::task::{Task, TaskId};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(TaskId),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BoardOptions {
    /// Modal shows a task but never writes it back.
    pub read_only: bool,
    pub show_descriptions: bool,
}

pub struct KanbanBoard<S: Surface> {
    tasks: Vec<Task>,
    modal: ModalState,
    surface: S,
    options: BoardOptions,
}

impl<S: Surface> KanbanBoard<S> {
    /// Takes ownership of the seed tasks and draws them once.
    pub fn new(tasks: Vec<Task>, surface: S, options: BoardOptions) -> Self {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                warn!(
                    task_id = task.id,
                    "duplicate task id in seed, lookups resolve to the first task with this id"
                );
            }
        }
        info!(tasks = tasks.len(), read_only = options.read_only, "board loaded");

        let mut board = Self {
            tasks,
            modal: ModalState::Closed,
            surface,
            options,
        };
        board.render();
        board
    }

    pub fn render(&mut self) -> ColumnCounts {
        render(&self.tasks, &mut self.surface, self.options.show_descriptions)
    }

    pub fn open_modal(&mut self, task_id: TaskId) {
        let Some(task) = self.task(task_id) else {
            warn!(task_id, "cannot open modal, no such task");
            return;
        };
        let fields = ModalFields {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
        };
        self.surface.set_modal_fields(fields);
        self.surface.show_modal();
        self.modal = ModalState::Open(task_id);
        debug!(task_id, "modal opened");
    }

    pub fn close_modal(&mut self) {
        self.surface.hide_modal();
        self.modal = ModalState::Closed;
        debug!("modal closed");
    }

    /// A click on the area around the modal content.
    pub fn backdrop_click(&mut self) {
        self.close_modal();
    }

    pub fn save_task(&mut self) {
        let ModalState::Open(task_id) = self.modal else {
            debug!("save ignored, modal is closed");
            return;
        };

        if self.options.read_only {
            warn!(task_id, "board is read-only, edits discarded");
            self.close_modal();
            return;
        }

        let fields = self.surface.modal_fields();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            warn!(task_id, "save ignored, task no longer exists");
            self.close_modal();
            return;
        };
        task.title = fields.title.trim().to_string();
        task.description = fields.description.trim().to_string();
        task.status = fields.status;
        debug!(task_id, status = %task.status, "task saved");

        self.render();
        self.close_modal();
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
