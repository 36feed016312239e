use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter by city, month and day and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city datasets
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Override the number of raw rows shown per page
    #[arg(global = true, long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive exploration (default)
    Explore,

    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        /// Print the effective configuration to stdout
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// List the available cities and their dataset files
    Cities,
}
