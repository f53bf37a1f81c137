use crate::output::OutputFormat;
use std::path::PathBuf;
use std::str::FromStr;

/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(name = "rhoas", author, version, about, long_about = None)]
pub struct RhoasCli {
    #[command(subcommand)]
    pub command: RhoasCommands,
    /// Path of the configuration file (defaults to ~/.rhoas/config.yml)
    #[arg(long, global = true, env = "RHOAS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum RhoasCommands {
    /// Managed Kafka operations
    Kafka {
        #[command(subcommand)]
        opt: KafkaOperation,
    },
}

/// Kafka operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum KafkaOperation {
    /// Topic operations on the selected Kafka instance
    Topic {
        #[command(subcommand)]
        opt: TopicOperation,
    },
    /// Select the Kafka instance used by other commands
    Use {
        /// Kafka instance ID
        #[arg(long)]
        id: String,
    },
}

/// Topic operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum TopicOperation {
    /// List the topics of the selected Kafka instance
    #[clap(aliases = &["ls"])]
    List {
        /// Output format: json, yaml or yml (table when omitted)
        #[arg(short = 'o', long, default_value = "", hide_default_value = true, value_parser = OutputFormat::from_str)]
        output: OutputFormat,
    },
}
