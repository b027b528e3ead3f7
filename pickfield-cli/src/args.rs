//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pickfield")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank options and try the dropdown fields in a terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// One option per line (default: built-in city list)
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// Field configuration as JSON
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Allow adding values that are not options
    #[arg(long, global = true)]
    pub add_new: bool,

    /// Multi-select capacity
    #[arg(long, global = true)]
    pub max: Option<usize>,

    /// Initial text (single) or selection (multi, repeatable)
    #[arg(long, global = true)]
    pub prefill: Vec<String>,

    /// Confirm single-select prefill verbatim
    #[arg(long, global = true)]
    pub keep_prefill: bool,

    /// Rank with the fuzzy matcher
    #[arg(long, global = true)]
    pub fuzzy: bool,

    /// Log file
    #[arg(long = "log", global = true, default_value = "pickfield.log")]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the ranked options for a query
    Rank {
        /// Text to rank against
        query: String,
    },

    /// Interactive single-select field
    Single,

    /// Interactive multi-select field
    Multi,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pickfield").chain(args.iter().copied()))
    }

    #[test]
    fn test_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_rank_with_options() {
        let args = parse(&["rank", "ap", "--options", "fruits.txt", "--fuzzy"]).unwrap();
        assert_eq!(args.command, Command::Rank { query: "ap".to_string() });
        assert_eq!(args.options, Some(PathBuf::from("fruits.txt")));
        assert!(args.fuzzy);
    }

    #[test]
    fn test_multi_flags() {
        let args = parse(&[
            "multi", "--max", "2", "--add-new", "--prefill", "Oslo", "--prefill", "Rome",
        ])
        .unwrap();
        assert_eq!(args.command, Command::Multi);
        assert_eq!(args.max, Some(2));
        assert!(args.add_new);
        assert_eq!(args.prefill, vec!["Oslo".to_string(), "Rome".to_string()]);
        assert_eq!(args.log_file, PathBuf::from("pickfield.log"));
    }

    #[test]
    fn test_flags_before_command() {
        let args = parse(&["--keep-prefill", "--log", "demo.log", "single"]).unwrap();
        assert_eq!(args.command, Command::Single);
        assert!(args.keep_prefill);
        assert_eq!(args.log_file, PathBuf::from("demo.log"));
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).unwrap_err().kind();
        assert_eq!(kind(&["rank"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["single", "--max", "x"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["single", "--bogus"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["bogus"]), ErrorKind::InvalidSubcommand);
        assert!(parse(&[]).is_err());
        assert!(parse(&["single", "--options"]).is_err());
    }
}
