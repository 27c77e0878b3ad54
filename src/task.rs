use serde::{Deserialize, Serialize};
use std::fmt;

pub type TaskId = u32;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl Task {
    pub fn new(id: TaskId, title: &str, description: &str, status: Status) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
        }
    }
}

/// Task status as stored on the record.
///
/// Anything other than `todo`, `doing` or `done` is kept verbatim in
/// `Unknown` so the renderer can report it instead of losing it at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Todo,
    Doing,
    Done,
    Unknown(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Done => "done",
            Status::Unknown(raw) => raw,
        }
    }

    /// Next selectable status, wrapping around. Unknown values restart at `todo`.
    pub fn next(&self) -> Status {
        match self {
            Status::Todo => Status::Doing,
            Status::Doing => Status::Done,
            Status::Done | Status::Unknown(_) => Status::Todo,
        }
    }

    pub fn prev(&self) -> Status {
        match self {
            Status::Todo | Status::Unknown(_) => Status::Done,
            Status::Doing => Status::Todo,
            Status::Done => Status::Doing,
        }
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "todo" => Status::Todo,
            "doing" => Status::Doing,
            "done" => Status::Done,
            other => Status::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::from(value.as_str())
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        match value {
            Status::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed buckets on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Todo,
    Doing,
    Done,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::Doing, Column::Done];

    pub fn for_status(status: &Status) -> Option<Column> {
        match status {
            Status::Todo => Some(Column::Todo),
            Status::Doing => Some(Column::Doing),
            Status::Done => Some(Column::Done),
            Status::Unknown(_) => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Todo => "TODO",
            Column::Doing => "DOING",
            Column::Done => "DONE",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Column::Todo => 0,
            Column::Doing => 1,
            Column::Done => 2,
        }
    }
}

pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Launch Epic Career 🚀", "Create a killer Resume", Status::Todo),
        Task::new(
            2,
            "Master JavaScript 💛",
            "Get comfortable with the fundamentals",
            Status::Doing,
        ),
        Task::new(3, "Keep on Going 🏆", "You're almost there", Status::Doing),
        Task::new(
            11,
            "Learn Data Structures and Algorithms 📚",
            "Study fundamental data structures and algorithms...",
            Status::Todo,
        ),
        Task::new(
            12,
            "Contribute to Open Source Projects 🌐",
            "Gain practical experience and collaborate with others...",
            Status::Done,
        ),
        Task::new(
            13,
            "Build Portfolio Projects 🛠️",
            "Create a portfolio showcasing your skills...",
            Status::Done,
        ),
    ]
}
