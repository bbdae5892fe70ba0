//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use patternkit_core::{
    application::DuplicatePolicy,
    domain::{Channel, DomainError, HttpMethod, Provider},
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patternkit",
    bin_name = "patternkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Creational and structural design patterns, runnable",
    long_about = "Patternkit demonstrates the Prototype, Builder, Factory Method, \
                  Abstract Factory, Singleton and Adapter patterns over small \
                  simulated domains (jobs, HTTP requests, notifications, payments).",
    after_help = "EXAMPLES:\n\
        \x20 patternkit prototype get fast\n\
        \x20 patternkit builder --recipe post\n\
        \x20 patternkit notify --channel sms \"Hello, world!\"\n\
        \x20 patternkit providers --provider twilio --email a@b.com --phone 123 \"hi\"\n\
        \x20 patternkit checkout 100.50 --processor external",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Work with the job template registry (Prototype).
    #[command(
        subcommand,
        visible_alias = "proto",
        about = "Job template registry (Prototype)",
        after_help = "EXAMPLES:\n\
            \x20 patternkit prototype list\n\
            \x20 patternkit prototype get safe\n\
            \x20 patternkit prototype get fast --set priority=critical\n\
            \x20 patternkit prototype demo"
    )]
    Prototype(PrototypeCommands),

    /// Assemble an HTTP request step by step (Builder).
    #[command(
        about = "Assemble an HTTP request (Builder)",
        after_help = "EXAMPLES:\n\
            \x20 patternkit builder --recipe get\n\
            \x20 patternkit builder --url https://api.test --method patch --header X-Id=7"
    )]
    Builder(BuilderArgs),

    /// Send a message through one channel (Factory Method).
    #[command(
        about = "Send a notification (Factory Method)",
        after_help = "EXAMPLES:\n\
            \x20 patternkit notify \"Hello, world!\"\n\
            \x20 patternkit notify --channel whatsapp \"Hello, world!\""
    )]
    Notify(NotifyArgs),

    /// Send email and SMS through one provider family (Abstract Factory).
    #[command(
        about = "Notify through a provider family (Abstract Factory)",
        after_help = "EXAMPLES:\n\
            \x20 patternkit providers --email test@test.com --phone 1234567890 \"Hello\"\n\
            \x20 patternkit providers --provider twilio --email test@test.com --phone 1234567890 \"Hello\""
    )]
    Providers(ProvidersArgs),

    /// Show the process-wide database configuration (Singleton).
    #[command(
        name = "db-config",
        about = "Show database configuration (Singleton)",
        after_help = "EXAMPLES:\n\
            \x20 DB_HOST=db.internal patternkit db-config\n\
            \x20 patternkit db-config --show-password"
    )]
    DbConfig(DbConfigArgs),

    /// Charge an amount through a payment processor (Adapter).
    #[command(
        about = "Check out an amount (Adapter)",
        after_help = "EXAMPLES:\n\
            \x20 patternkit checkout 100.50\n\
            \x20 patternkit checkout 200.95 --processor direct --currency USD"
    )]
    Checkout(CheckoutArgs),

    /// Inspect the Patternkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternkit config get checkout.currency\n\
            \x20 patternkit config list\n\
            \x20 patternkit config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patternkit completions bash > ~/.local/share/bash-completion/completions/patternkit\n\
            \x20 patternkit completions zsh  > ~/.zfunc/_patternkit\n\
            \x20 patternkit completions fish > ~/.config/fish/completions/patternkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── prototype ─────────────────────────────────────────────────────────────────

/// Subcommands for `patternkit prototype`.
#[derive(Debug, Subcommand)]
pub enum PrototypeCommands {
    /// List registered template keys.
    #[command(visible_alias = "ls")]
    List(RegistryArgs),

    /// Print a fresh copy of one template, optionally edited.
    Get {
        /// Template key.
        #[arg(value_name = "KEY")]
        key: String,

        /// Edit the returned copy's metadata (the registry is untouched).
        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            value_parser = parse_key_value,
            help = "Set a metadata entry on the copy"
        )]
        set: Vec<(String, String)>,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// Show that edits to one copy never reach the registry.
    Demo(RegistryArgs),
}

/// Where registry templates come from.
#[derive(Debug, Args)]
pub struct RegistryArgs {
    /// Extra templates directory; overrides `registry.templates_dir`.
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Duplicate-key policy; overrides `registry.duplicate_policy`.
    #[arg(long = "policy", value_name = "POLICY", value_parser = parse_policy)]
    pub policy: Option<DuplicatePolicy>,
}

// ── builder ───────────────────────────────────────────────────────────────────

/// Arguments for `patternkit builder`.
#[derive(Debug, Args)]
pub struct BuilderArgs {
    /// Let the director build a canned request.
    #[arg(
        long = "recipe",
        value_enum,
        conflicts_with_all = ["url", "method", "header", "body", "timeout"],
        help = "Canned request built by the director"
    )]
    pub recipe: Option<Recipe>,

    #[arg(long = "url", value_name = "URL", help = "Request URL (http:// or https://)")]
    pub url: Option<String>,

    #[arg(
        short = 'X',
        long = "method",
        value_name = "METHOD",
        value_parser = parse_method,
        help = "HTTP method (case-insensitive)"
    )]
    pub method: Option<HttpMethod>,

    #[arg(
        short = 'H',
        long = "header",
        value_name = "NAME=VALUE",
        value_parser = parse_key_value,
        help = "Add a header (repeatable)"
    )]
    pub header: Vec<(String, String)>,

    #[arg(
        short = 'd',
        long = "body",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Add a body field (repeatable)"
    )]
    pub body: Vec<(String, String)>,

    #[arg(long = "timeout", value_name = "SECS", help = "Timeout in seconds [default: 30]")]
    pub timeout: Option<u64>,
}

/// Requests the director knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Recipe {
    Get,
    Post,
    Put,
}

// ── notify / providers ────────────────────────────────────────────────────────

/// Arguments for `patternkit notify`.
#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[arg(value_name = "MESSAGE", help = "Message to send")]
    pub message: String,

    #[arg(
        short = 'C',
        long = "channel",
        value_name = "CHANNEL",
        default_value = "email",
        value_parser = parse_channel,
        help = "email, sms or whatsapp"
    )]
    pub channel: Channel,
}

/// Arguments for `patternkit providers`.
#[derive(Debug, Args)]
pub struct ProvidersArgs {
    #[arg(value_name = "MESSAGE", help = "Message to send")]
    pub message: String,

    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        default_value = "aws",
        value_parser = parse_provider,
        help = "aws or twilio"
    )]
    pub provider: Provider,

    #[arg(long = "email", value_name = "ADDRESS", help = "Email recipient")]
    pub email: String,

    #[arg(long = "phone", value_name = "NUMBER", help = "SMS recipient")]
    pub phone: String,
}

// ── db-config ─────────────────────────────────────────────────────────────────

/// Arguments for `patternkit db-config`.
#[derive(Debug, Args)]
pub struct DbConfigArgs {
    /// Print the password in the connection string.
    #[arg(long = "show-password", help = "Reveal the password")]
    pub show_password: bool,
}

// ── checkout ──────────────────────────────────────────────────────────────────

/// Arguments for `patternkit checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Amount in major units, e.g. 100.50"
    )]
    pub amount: f64,

    #[arg(
        long = "processor",
        value_enum,
        default_value = "external",
        help = "Payment backend"
    )]
    pub processor: ProcessorKind,

    /// Overrides `checkout.currency`.
    #[arg(long = "currency", value_name = "CODE", help = "Three-letter currency code")]
    pub currency: Option<String>,
}

/// Payment backends available to `checkout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProcessorKind {
    /// Third-party SDK behind the adapter.
    External,
    /// Processor that already fits the checkout interface.
    Direct,
}

// ── completions / config ──────────────────────────────────────────────────────

/// Arguments for `patternkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

/// Subcommands for `patternkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        /// Dotted key, e.g. `checkout.currency`.
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the default configuration file path.
    Path,
}

// ── value parsers ─────────────────────────────────────────────────────────────

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn parse_method(s: &str) -> Result<HttpMethod, DomainError> {
    s.parse()
}

fn parse_channel(s: &str) -> Result<Channel, DomainError> {
    s.parse()
}

fn parse_provider(s: &str) -> Result<Provider, DomainError> {
    s.parse()
}

fn parse_policy(s: &str) -> Result<DuplicatePolicy, DomainError> {
    s.parse()
}

// ── tests ─────────────────────────────────────────────────────────────────────
