use crate::kanban_board::BoardOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Three-column task board in the terminal")]
pub struct Config {
    /// JSON file with the initial tasks; the built-in board is used when omitted
    #[arg(long, env = "TASKBOARD_SEED")]
    pub seed: Option<PathBuf>,

    /// Open tasks for viewing only, saving is disabled
    #[arg(long)]
    pub read_only: bool,

    /// Show each task's description under its title
    #[arg(long)]
    pub show_descriptions: bool,

    /// Where log output goes (the terminal is taken by the board)
    #[arg(long, env = "TASKBOARD_LOG", default_value = "taskboard.log")]
    pub log_file: PathBuf,
}

impl Config {
    pub fn board_options(&self) -> BoardOptions {
        BoardOptions {
            read_only: self.read_only,
            show_descriptions: self.show_descriptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        std::env::remove_var("TASKBOARD_SEED");
        std::env::remove_var("TASKBOARD_LOG");
        let config = Config::try_parse_from(["taskboard"]).unwrap();
        assert_eq!(config.seed, None);
        assert!(!config.read_only);
        assert_eq!(config.log_file, PathBuf::from("taskboard.log"));
    }

    #[test]
    fn flags_map_to_board_options() {
        let config = Config::try_parse_from([
            "taskboard",
            "--read-only",
            "--show-descriptions",
            "--seed",
            "tasks.json",
        ])
        .unwrap();
        let options = config.board_options();
        assert!(options.read_only);
        assert!(options.show_descriptions);
        assert_eq!(config.seed, Some(PathBuf::from("tasks.json")));
    }
}
