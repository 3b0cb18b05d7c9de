use clap::{Parser, Subcommand};

const VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    _ => "0.1.0-dev",
};
#[derive(Parser)]
#[command(name = "courses", version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lists the courses served by the course API
    List {
        /// Path for the configuration file or http(s) link to config file.
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Adds a course
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Path for the configuration file or http(s) link to config file.
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Deletes the course with the given id
    Delete {
        #[arg(required = true)]
        id: String,
        /// Path for the configuration file or http(s) link to config file.
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Writes the course page markup to a file
    Page {
        #[arg(required = true)]
        out: String,
    },
    /// Checks the configuration file for errors
    Check {
        /// Path for the configuration file or http(s) link to config file.
        #[arg(required = true)]
        config_path: String,
    },
}
