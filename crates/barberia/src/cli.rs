//! Clap derive structures for the `barberia` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use barberia_core::DayOfWeek;
use barberia_core::command::forms::{DEFAULT_SCHEDULE_END, DEFAULT_SCHEDULE_START};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// barberia -- book and manage barbershop appointments
#[derive(Debug, Parser)]
#[command(
    name = "barberia",
    version,
    about = "Manage barbers, clients and appointments from the command line",
    long_about = "Command-line client for the BarberiaUQ booking service.\n\n\
        Every command loads barbers, clients and appointments fresh from the\n\
        service; writes are followed by a full reload.",
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
    /// Service profile to use
    #[arg(long, short = 'p', env = "BARBERIA_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API root URL, e.g. http://localhost:8080/api (overrides profile)
    #[arg(long, short = 'u', env = "BARBERIA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "BARBERIA_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

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
    #[arg(long, short = 'k', env = "BARBERIA_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, env = "BARBERIA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

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

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show today's counters
    #[command(alias = "dash")]
    Dashboard,

    /// Manage barbers and their working hours
    #[command(alias = "b")]
    Barbers(BarbersArgs),

    /// Manage clients
    #[command(alias = "cl")]
    Clients(ClientsArgs),

    /// Book, list and delete appointments
    #[command(alias = "appt", alias = "a")]
    Appointments(AppointmentsArgs),

    /// Check that the booking service answers
    Ping,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Barbers ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BarbersArgs {
    #[command(subcommand)]
    pub command: BarbersCommand,
}

#[derive(Debug, Subcommand)]
pub enum BarbersCommand {
    /// List barbers
    #[command(alias = "ls")]
    List {
        /// Only barbers currently taking bookings
        #[arg(long)]
        active: bool,
    },

    /// Register a barber
    Create {
        /// Full name (required)
        #[arg(long, short = 'n', default_value = "")]
        name: String,

        #[arg(long, short = 's', default_value = "")]
        specialty: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Add a weekly working-hours entry to a barber
    Schedule {
        /// Barber ID
        barber: String,

        /// Day of week: 1-7 (1 = Monday) or a name such as "tue"
        #[arg(long, short = 'd', default_value = "1", value_parser = parse_day)]
        day: DayOfWeek,

        /// Start time (HH:MM)
        #[arg(long, default_value = DEFAULT_SCHEDULE_START)]
        start: String,

        /// End time (HH:MM)
        #[arg(long, default_value = DEFAULT_SCHEDULE_END)]
        end: String,
    },
}

fn parse_day(raw: &str) -> Result<DayOfWeek, String> {
    DayOfWeek::parse(raw).ok_or_else(|| format!("'{raw}' is not a day of the week (1-7 or a name)"))
}

// ── Clients ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    /// List clients
    #[command(alias = "ls")]
    List,

    /// Register a client
    Create {
        /// Full name
        #[arg(long, short = 'n', default_value = "")]
        name: String,

        /// Identity document number (unique)
        #[arg(long, short = 'd', default_value = "")]
        document: String,

        /// Phone number (unique)
        #[arg(long, default_value = "")]
        phone: String,
    },
}

// ── Appointments ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AppointmentsArgs {
    #[command(subcommand)]
    pub command: AppointmentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AppointmentsCommand {
    /// List appointments, newest first
    #[command(alias = "ls")]
    List,

    /// Book an appointment
    Book {
        /// Client ID
        #[arg(long, short = 'c', default_value = "")]
        client: String,

        /// Barber ID
        #[arg(long, short = 'b', default_value = "")]
        barber: String,

        /// Date (YYYY-MM-DD)
        #[arg(long, short = 'd', default_value = "")]
        date: String,

        /// Start time (HH:MM)
        #[arg(long, default_value = "")]
        start: String,

        /// End time (HH:MM)
        #[arg(long, default_value = "")]
        end: String,
    },

    /// Delete (cancel) an appointment
    #[command(alias = "rm")]
    Delete {
        /// Appointment ID
        id: String,

        /// Cancellation reason sent to the service
        #[arg(long, short = 'r')]
        reason: Option<String>,
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
    /// Interactive setup wizard
    Init,

    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// List profile names
    Profiles,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
