//! Clap derive structures for the `ome` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ome -- template attribute and NIC VLAN tooling for OpenManage Enterprise
#[derive(Debug, Parser)]
#[command(
    name = "ome",
    version,
    about = "Inspect and edit OpenManage Enterprise template attributes from the command line",
    long_about = "Reads a template's attribute tree through the OME REST API.\n\n\
        Attributes are addressed by their comma-joined display path plus\n\
        attribute id; NIC VLAN settings are read from the template's network view.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Appliance profile to use
    #[arg(long, short = 'p', env = "OME_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Appliance host or URL (overrides profile)
    #[arg(long, env = "OME_HOST", global = true)]
    pub host: Option<String>,

    /// Account for the API session (overrides profile)
    #[arg(long, short = 'u', env = "OME_USERNAME", global = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "OME_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "OME_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "OME_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read and edit template attributes
    #[command(alias = "attr", alias = "a")]
    Attributes(AttributesArgs),

    /// Read and edit per-port NIC VLAN settings
    Vlan(VlanArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Attributes ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AttributesArgs {
    #[command(subcommand)]
    pub command: AttributesCommand,
}

#[derive(Debug, Subcommand)]
pub enum AttributesCommand {
    /// List every attribute with its display path
    #[command(alias = "ls")]
    List {
        /// Template id
        template: i64,

        /// Only show paths starting with this prefix
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },

    /// Show one attribute
    Get {
        /// Template id
        template: i64,

        /// Comma-joined display path, e.g. "BIOS,Boot Settings,Boot Mode"
        #[arg(long)]
        path: String,

        /// Attribute id
        #[arg(long)]
        id: i64,
    },

    /// Re-read previously listed attributes from the current template
    Refresh {
        /// Template id
        template: i64,

        /// JSON array of `{display_name, attribute_id}` entries
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Change one attribute's value
    Set {
        /// Template id
        template: i64,

        /// Comma-joined display path
        #[arg(long)]
        path: String,

        /// Attribute id
        #[arg(long)]
        id: i64,

        /// New value
        #[arg(long)]
        value: String,

        /// Mark the attribute as ignored when the template is deployed
        #[arg(long)]
        ignored: bool,
    },
}

// ── VLAN ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VlanArgs {
    #[command(subcommand)]
    pub command: VlanCommand,
}

#[derive(Debug, Subcommand)]
pub enum VlanCommand {
    /// List the VLAN settings of every NIC port
    #[command(alias = "ls")]
    List {
        /// Template id
        template: i64,
    },

    /// Show one port's VLAN settings
    Get {
        /// Template id
        template: i64,

        /// NIC group name, e.g. "Integrated NIC 1"
        #[arg(long)]
        nic: String,

        /// Port number
        #[arg(long)]
        port: i64,
    },

    /// Push VLAN settings from a file
    Set {
        /// Template id
        template: i64,

        /// JSON array of VLAN records (as printed by `vlan list -o json`)
        #[arg(long, short = 'F')]
        from_file: PathBuf,

        /// Identity pool to assign
        #[arg(long)]
        identity_pool: i64,

        /// Bonding mode to send (defaults to the template's current one)
        #[arg(long)]
        bonding_technology: Option<String>,

        /// Propagate the change to deployed servers
        #[arg(long)]
        propagate: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current configuration (secrets masked)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store the active profile's password in the system keyring
    SetPassword,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
