use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "openrev", version, about = "Apply to the hackathon and track your application")]
pub struct Cli {
    /// Config file to load (extension optional).
    #[arg(long, global = true, env = "OPENREV_CONFIG")]
    pub config: Option<String>,

    /// Override the API base URL from the config.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log verbosity written to stderr. `RUST_LOG` directives take precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Menu-driven session (default).
    Interactive,

    /// Submit a quiz application.
    ApplyQuiz {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        answers: String,
    },

    /// Submit a competition application.
    ApplyComp {
        #[arg(long)]
        team_name: String,
        /// Comma-separated member names.
        #[arg(long)]
        members: String,
        #[arg(long)]
        details: String,
    },

    /// Look up an application by ID.
    Status { id: String },

    /// Sign in as admin. Prompts for the password when not given.
    Login {
        #[arg(long, env = "OPENREV_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out of the admin account.
    Logout,

    /// List all applications (admin only).
    Applications,
}
