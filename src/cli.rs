//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rentdesk - RDP/VPS storefront
///
/// Configure, price and order remote-desktop server instances from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "rentdesk",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Self-service storefront for renting RDP/VPS server instances",
    long_about = "Rentdesk prices and orders remote-desktop (RDP/VPS) server instances: pick \
                  hardware, operating system, region, applications and rental duration, see the \
                  price recomputed as you go, and place the configuration in your cart.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  rentdesk configure --plan premium\n    \
                  rentdesk quote --cpu 4 --ram 8 --storage 128 --os windows-10-pro\n    \
                  rentdesk plans\n    \
                  rentdesk cart\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/rentdesk/rentdesk"
)]
pub struct Cli {
    /// Cart file location (defaults to the user data directory)
    #[arg(long, global = true, env = "RENTDESK_CART_FILE")]
    pub cart_file: Option<PathBuf>,

    /// Settings file location (defaults to the user config directory)
    #[arg(long, global = true, env = "RENTDESK_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure an instance interactively and add it to the cart
    Configure(ConfigureArgs),

    /// Price a configuration without touching the cart
    Quote(QuoteArgs),

    /// List the named plan presets
    Plans,

    /// List operating systems, regions, applications and durations
    Catalog,

    /// Show or edit the cart
    Cart(CartArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Selection flags shared by configure and quote
#[derive(Parser, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Seed hardware from a named plan (basic, standard, premium, enterprise)
    #[arg(long)]
    pub plan: Option<String>,

    /// CPU cores (1-32)
    #[arg(long)]
    pub cpu: Option<u32>,

    /// RAM in GB (1-64)
    #[arg(long)]
    pub ram: Option<u32>,

    /// Storage in GB (32-1024, steps of 32)
    #[arg(long)]
    pub storage: Option<u32>,

    /// Operating system id (see 'rentdesk catalog')
    #[arg(long)]
    pub os: Option<String>,

    /// Region id (see 'rentdesk catalog')
    #[arg(long)]
    pub region: Option<String>,

    /// Application id to pre-install; repeat for several
    #[arg(long = "app", value_name = "APP")]
    pub apps: Vec<String>,

    /// Rental duration in months (1, 3, 6 or 12)
    #[arg(long)]
    pub months: Option<u32>,
}

/// Arguments for the configure command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive wizard:\n    rentdesk configure\n\n\
                  Start from a plan:\n    rentdesk configure --plan premium\n\n\
                  Fully scripted:\n    rentdesk configure --no-input --yes --cpu 8 --ram 16 --months 12\n\n\
                  Preview only (no cart write):\n    rentdesk configure --no-input")]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Add to cart without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Skip the interactive wizard; use defaults plus flags
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the quote command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Quote the defaults:\n    rentdesk quote\n\n\
                  Quote a plan:\n    rentdesk quote --plan enterprise --months 12\n\n\
                  Quote a custom build:\n    rentdesk quote --cpu 4 --ram 8 --storage 128 --os windows-10-pro --app office --app adobe")]
pub struct QuoteArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the cart command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the cart:\n    rentdesk cart\n\n\
                  Remove one item:\n    rentdesk cart --remove rdp-1712345678901234567\n\n\
                  Empty the cart:\n    rentdesk cart --clear")]
pub struct CartArgs {
    /// Remove a line item by id
    #[arg(long, value_name = "ID")]
    pub remove: Option<String>,

    /// Remove all line items
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rentdesk completions --shell bash > ~/.bash_completion.d/rentdesk\n\n\
                  Generate zsh completions:\n    rentdesk completions --shell zsh > ~/.zfunc/_rentdesk")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_configure_with_plan() {
        let cli = Cli::try_parse_from(["rentdesk", "configure", "--plan", "premium"]).unwrap();
        match cli.command {
            Commands::Configure(args) => {
                assert_eq!(args.selection.plan, Some("premium".to_string()));
                assert!(!args.yes);
                assert!(!args.no_input);
            }
            _ => panic!("Expected Configure command"),
        }
    }

    #[test]
    fn test_cli_parsing_configure_scripted() {
        let cli = Cli::try_parse_from([
            "rentdesk",
            "configure",
            "--no-input",
            "--yes",
            "--cpu",
            "8",
            "--app",
            "office",
            "--app",
            "adobe",
        ])
        .unwrap();
        match cli.command {
            Commands::Configure(args) => {
                assert!(args.yes);
                assert!(args.no_input);
                assert_eq!(args.selection.cpu, Some(8));
                assert_eq!(args.selection.apps, vec!["office", "adobe"]);
            }
            _ => panic!("Expected Configure command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote() {
        let cli = Cli::try_parse_from([
            "rentdesk", "quote", "--cpu", "4", "--ram", "8", "--storage", "128", "--os",
            "windows-10-pro", "--months", "12",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote(args) => {
                assert_eq!(args.selection.cpu, Some(4));
                assert_eq!(args.selection.ram, Some(8));
                assert_eq!(args.selection.storage, Some(128));
                assert_eq!(args.selection.os, Some("windows-10-pro".to_string()));
                assert_eq!(args.selection.months, Some(12));
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_plans() {
        let cli = Cli::try_parse_from(["rentdesk", "plans"]).unwrap();
        assert!(matches!(cli.command, Commands::Plans));
    }

    #[test]
    fn test_cli_parsing_cart_remove() {
        let cli = Cli::try_parse_from(["rentdesk", "cart", "--remove", "rdp-1"]).unwrap();
        match cli.command {
            Commands::Cart(args) => {
                assert_eq!(args.remove, Some("rdp-1".to_string()));
                assert!(!args.clear);
            }
            _ => panic!("Expected Cart command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["rentdesk", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["rentdesk", "-v", "--cart-file", "/tmp/cart.json", "plans"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.cart_file, Some(PathBuf::from("/tmp/cart.json")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["rentdesk", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
