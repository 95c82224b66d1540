use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// List backlog tasks (not assigned to any sprint)
    Backlog,

    /// List tasks in one column of the active sprint
    Column {
        /// Status: backlog, todo, in-progress, in-review, or done
        status: String,
    },

    /// Show every column of the active sprint
    Show,
}
