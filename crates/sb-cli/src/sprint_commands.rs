use clap::Subcommand;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// Create a new sprint
    Create {
        /// Sprint name
        #[arg(long)]
        name: String,

        /// Start date (RFC 3339, e.g. 2026-08-10T00:00:00Z)
        #[arg(long)]
        start_date: String,

        /// End date (RFC 3339)
        #[arg(long)]
        end_date: String,

        /// Create the sprint already active
        #[arg(long)]
        active: bool,
    },

    /// Update a sprint
    Update {
        /// Sprint ID (UUID)
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New start date (RFC 3339)
        #[arg(long)]
        start_date: Option<String>,

        /// New end date (RFC 3339)
        #[arg(long)]
        end_date: Option<String>,
    },

    /// Delete a sprint; its tasks fall back to the backlog
    Delete {
        /// Sprint ID (UUID)
        id: String,
    },

    /// Start a sprint, deactivating every other sprint
    Start {
        /// Sprint ID (UUID)
        id: String,
    },

    /// End a sprint
    End {
        /// Sprint ID (UUID)
        id: String,
    },

    /// List sprints
    List,
}
