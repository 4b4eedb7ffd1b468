//! Command-line grammar
//!
//! One clap tree for the whole surface: four nouns, each with its own verb
//! set, plus the global flags every command honors. Argument values stay
//! plain strings here; the command handlers parse them into the validated
//! value objects and surface the format errors.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Insurance book manager
#[derive(Debug, Parser)]
#[command(name = "insurabook", version, about = "Insurance book manager")]
pub struct Cli {
    /// Snapshot file to load and save (overrides the configured path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress confirmation lines
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage clients
    #[command(subcommand)]
    Client(ClientCommand),

    /// Manage policy types
    #[command(subcommand, name = "policytype")]
    PolicyType(PolicyTypeCommand),

    /// Manage policies
    #[command(subcommand)]
    Policy(PolicyCommand),

    /// Manage claims
    #[command(subcommand)]
    Claim(ClaimCommand),
}

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Register a new client
    Add(ClientAddArgs),

    /// Remove a client (their policies and claims stay)
    Delete {
        /// Id of the client to remove
        id: String,
    },

    /// Show one client in full
    Show {
        /// Id of the client to show
        id: String,
    },

    /// Find clients by name
    Find {
        /// Case-insensitive name fragment
        keyword: String,
    },

    /// List all clients
    List,

    /// List clients whose birthday is today
    Birthdays,
}

#[derive(Debug, Args)]
pub struct ClientAddArgs {
    /// Client id, any non-blank text without whitespace
    #[arg(long)]
    pub id: String,

    /// Client name
    #[arg(long)]
    pub name: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub birthday: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,

    /// Label attached to the client, repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum PolicyTypeCommand {
    /// Register a new policy type
    Add(PolicyTypeAddArgs),

    /// Remove a policy type (policies referencing it stay)
    Delete {
        /// Id of the policy type to remove
        id: String,
    },

    /// List all policy types
    List,
}

#[derive(Debug, Args)]
pub struct PolicyTypeAddArgs {
    /// Policy type id, P followed by digits
    #[arg(long)]
    pub id: String,

    /// Policy type name
    #[arg(long)]
    pub name: String,

    /// Periodic premium amount
    #[arg(long)]
    pub premium: String,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// Issue a policy to a client
    Add(PolicyAddArgs),

    /// Remove a policy (claims against it stay)
    Delete {
        /// Id of the policy to remove
        id: String,
    },

    /// List all policies
    List,

    /// List policies expiring within the next three days
    Expiring,
}

#[derive(Debug, Args)]
pub struct PolicyAddArgs {
    /// Id of the covered client
    #[arg(long)]
    pub client: String,

    /// Id of the policy type
    #[arg(long = "type")]
    pub policy_type: String,

    /// First day of cover, YYYY-MM-DD
    #[arg(long)]
    pub effective: String,

    /// Last day of cover, YYYY-MM-DD
    #[arg(long)]
    pub expiry: String,

    /// Total amount claimable over the life of the policy
    #[arg(long)]
    pub limit: String,
}

#[derive(Debug, Subcommand)]
pub enum ClaimCommand {
    /// File a claim against a policy
    Add(ClaimAddArgs),

    /// Remove a claim
    Delete {
        /// Id of the claim to remove
        id: String,
    },

    /// List claims, optionally only those against one policy
    List {
        /// Restrict to claims against this policy
        #[arg(long)]
        policy: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct ClaimAddArgs {
    /// Id of the claiming client
    #[arg(long)]
    pub client: String,

    /// Id of the policy claimed against
    #[arg(long)]
    pub policy: String,

    /// Claimed amount
    #[arg(long)]
    pub amount: String,

    /// Date of the claimed event, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}
