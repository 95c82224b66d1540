use crate::{
    board_commands::BoardCommands, sprint_commands::SprintCommands, task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Board views (active sprint columns and backlog)
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
}
