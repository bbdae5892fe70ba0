//! Command handlers, one module per subcommand.

pub mod builder;
pub mod checkout;
pub mod completions;
pub mod config;
pub mod db_config;
pub mod notify;
pub mod prototype;
pub mod providers;
