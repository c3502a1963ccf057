use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bouquet Builder - assemble a custom flower bouquet order in the terminal
#[derive(Parser)]
#[command(name = "bouquetui")]
#[command(about = "A terminal wizard for assembling custom flower bouquet orders")]
#[command(version)]
pub struct Cli {
    /// Catalog file to use instead of the built-in one (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file. The TUI never logs to the terminal.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive bouquet wizard (default)
    Build {
        /// Save the confirmed order to this file (JSON)
        #[arg(long, value_name = "FILE")]
        save_order: Option<PathBuf>,
    },
    /// Print the summary of a saved order
    Summarize {
        /// Order file written by `build --save-order`
        order: PathBuf,
    },
    /// Validate a catalog file
    ValidateCatalog {
        /// Path to the catalog file to validate
        path: PathBuf,
    },
    /// Print the active catalog as JSON
    Catalog,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_no_args() {
        // No subcommand means the interactive wizard
        let cli = Cli::try_parse_from(["bouquetui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_cli_build_with_save_order() {
        let cli = Cli::try_parse_from(["bouquetui", "build", "--save-order", "/tmp/order.json"]).unwrap();
        match cli.command {
            Some(Commands::Build { save_order }) => {
                assert_eq!(save_order, Some(PathBuf::from("/tmp/order.json")));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bouquetui",
            "summarize",
            "order.json",
            "--catalog",
            "shop.json",
            "--log-file",
            "run.log",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("shop.json")));
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(matches!(cli.command, Some(Commands::Summarize { .. })));
    }

    #[test]
    fn test_cli_validate_catalog_command() {
        let cli = Cli::try_parse_from(["bouquetui", "validate-catalog", "shop.json"]).unwrap();
        match cli.command {
            Some(Commands::ValidateCatalog { path }) => {
                assert_eq!(path, PathBuf::from("shop.json"));
            }
            _ => panic!("Expected ValidateCatalog command"),
        }
    }

    #[test]
    fn test_cli_summarize_requires_order() {
        assert!(Cli::try_parse_from(["bouquetui", "summarize"]).is_err());
    }
}
