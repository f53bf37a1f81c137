pub mod client;
pub mod commands;
pub mod config;
pub mod localize;
pub mod logging;
pub mod model;
pub mod output;
mod types;

pub use output::OutputFormat;
pub use types::{KafkaOperation, RhoasCli, RhoasCommands, TopicOperation};

use anyhow::Result;

pub async fn run(cli: RhoasCli) -> Result<()> {
    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    tracing::debug!("using config file {:?}", config_path);

    match &cli.command {
        RhoasCommands::Kafka { opt } => match opt {
            KafkaOperation::Topic { opt } => {
                commands::handle_topic_command(opt, &config_path).await
            }
            KafkaOperation::Use { id } => {
                commands::handle_use_command(&config_path, id).await
            }
        },
    }
}
