//! Command line surface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use portal::{ApplicationStatus, NotificationKind};

#[derive(Debug, Parser)]
#[command(name = "portal", version, about = "Scholarship portal client")]
pub struct Cli {
    /// API root; overrides `API_URL`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file; overrides `PORTAL_STATE_PATH`
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and persist the session
    Login {
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a student account
    Register {
        name: String,
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Print a collection as JSON
    List { collection: Collection },
    /// Print one scheme
    Scheme { id: String },
    /// Apply for a scheme with a JSON application form
    Apply {
        scheme_id: String,
        #[arg(long)]
        form: PathBuf,
    },
    /// Approve or reject an application
    SetStatus {
        id: String,
        status: ApplicationStatus,
    },
    /// Post a notification
    Notify {
        #[arg(long, value_parser = parse_kind, default_value = "update")]
        kind: NotificationKind,
        message: String,
    },
    /// Delete a record from an admin collection
    Delete { collection: Collection, id: String },
    /// The signed-in student's applications
    MyApplications,
    /// The signed-in student's admit card
    AdmitCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Members,
    Institutes,
    Students,
    Schemes,
    Notifications,
    Applications,
}

fn parse_kind(value: &str) -> Result<NotificationKind, String> {
    serde_json::from_value(serde_json::Value::String(value.to_ascii_lowercase()))
        .map_err(|_| format!("unknown notification kind: {value}"))
}
