//! Flags shared by every `patternkit` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so
//! `patternkit checkout 10 -vv` and `patternkit -vv checkout 10` are the same.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity. Warnings only by default; `RUST_LOG` overrides.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the log level on stderr:
    (none)  - warnings and errors
    -v      - info: registered templates, deliveries, payments
    -vv     - debug: registry lookups, loaded files, config sources
    -vvv    - trace: everything"
    )]
    pub verbose: u8,

    /// Print nothing but errors and JSON documents.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and requested JSON"
    )]
    pub quiet: bool,

    /// Plain, uncoloured terminal output.
    ///
    /// `NO_COLOR` with any non-empty value other than a falsey one (`0`,
    /// `false`, `no`, `off`) has the same effect.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Turn off coloured output (also NO_COLOR)"
    )]
    pub no_color: bool,

    /// TOML settings file; replaces the per-user `config.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the user config"
    )]
    pub config: Option<PathBuf>,

    /// Result rendering. `json` prints one JSON document on stdout and
    /// turns stderr logs into JSON lines.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a terminal and plain when piped.
    #[default]
    Auto,
    /// Coloured lines with status symbols.
    Human,
    /// The same lines without colour.
    Plain,
    /// A single JSON document per command.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let parsed = Harness::try_parse_from(["patternkit", "--no-color"]).unwrap();
        assert!(parsed.global.no_color);

        let parsed = Harness::try_parse_from(["patternkit"]).unwrap();
        assert!(!parsed.global.no_color);
    }

    #[test]
    fn falsey_parser_accepts_no_color_convention_values() {
        let parser = FalseyValueParser::new();
        let cmd = clap::Command::new("patternkit");
        let arg = clap::Arg::new("no_color");
        for (raw, expected) in [("1", true), ("true", true), ("yes", true), ("0", false), ("false", false), ("", false)] {
            let value = clap::builder::TypedValueParser::parse_ref(&parser, &cmd, Some(&arg), raw.as_ref())
                .unwrap();
            assert_eq!(value, expected, "NO_COLOR={raw:?}");
        }
    }
}
