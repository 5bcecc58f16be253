use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoestock", bin_name = "shoestock", version)]
#[command(about = "Shoe store inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (overrides the configured one)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to ./shoestock.json)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Fail on malformed inventory lines instead of skipping them
    #[arg(long, global = true, help_heading = "Options")]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Add a new shoe, prompting for anything not given
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        product: Option<String>,

        #[arg(long)]
        cost: Option<String>,

        #[arg(long)]
        quantity: Option<String>,
    },

    /// List every shoe in file order
    #[command(alias = "ls")]
    View,

    /// Find shoes by code
    #[command(alias = "s")]
    Search { code: String },

    /// Restock the shoe with the lowest quantity
    Restock {
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,

        /// Quantity to add (prompted if omitted)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Stock value per shoe and in total
    Value,

    /// Put the best-stocked shoe on sale
    Highest,

    /// Get or set configuration
    Config {
        /// Configuration key (file, strict, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["shoestock"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["shoestock", "view", "--file", "stock.txt", "--strict"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::View)));
        assert_eq!(cli.file, Some(PathBuf::from("stock.txt")));
        assert!(cli.strict);
    }

    #[test]
    fn add_takes_raw_values() {
        let cli = Cli::try_parse_from(["shoestock", "add", "--code", "A9", "--cost", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Add { code, cost, country, .. }) => {
                assert_eq!(code.as_deref(), Some("A9"));
                assert_eq!(cost.as_deref(), Some("abc"));
                assert!(country.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn restock_flags() {
        let cli = Cli::try_parse_from(["shoestock", "restock", "-y", "--amount", "12"]).unwrap();
        match cli.command {
            Some(Commands::Restock { yes, amount }) => {
                assert!(yes);
                assert_eq!(amount.as_deref(), Some("12"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
