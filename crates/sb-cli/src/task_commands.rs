use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    Create {
        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long, default_value = "")]
        description: String,

        /// Initial status: backlog, todo, in-progress, in-review, or done
        #[arg(long, default_value = "backlog")]
        status: String,

        /// Priority: low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Assignee name (optional)
        #[arg(long)]
        assignee: Option<String>,

        /// Sprint ID (UUID) to create the task into (optional)
        #[arg(long)]
        sprint_id: Option<String>,
    },

    /// Update a task
    Update {
        /// Task ID (UUID)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status: backlog, todo, in-progress, in-review, or done
        #[arg(long)]
        status: Option<String>,

        /// New priority: low, medium, or high
        #[arg(long)]
        priority: Option<String>,

        /// New assignee name
        #[arg(long)]
        assignee: Option<String>,

        /// Clear the assignee
        #[arg(long, conflicts_with = "assignee")]
        clear_assignee: bool,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: String,
    },

    /// Move a task to another column
    Move {
        /// Task ID (UUID)
        id: String,

        /// Target status: backlog, todo, in-progress, in-review, or done
        status: String,
    },

    /// Assign a task to a sprint
    Assign {
        /// Task ID (UUID)
        id: String,

        /// Sprint ID (UUID)
        sprint_id: String,
    },

    /// Move a task back to the backlog
    Unassign {
        /// Task ID (UUID)
        id: String,
    },

    /// List all tasks
    List,
}
