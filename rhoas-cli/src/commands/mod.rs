mod kafka;
mod topic;

pub use kafka::*;
pub use topic::*;

use crate::client::HttpConnection;
use crate::config::load_config_from_path;
use crate::logging::TracingLogger;
use crate::output::OutputFormat;
use crate::types::TopicOperation;
use anyhow::Result;
use std::path::Path;

/// Handle `kafka topic` commands
pub async fn handle_topic_command(operation: &TopicOperation, config_path: &Path) -> Result<()> {
    match operation {
        TopicOperation::List { output } => handle_topic_list(config_path, *output).await,
    }
}

async fn handle_topic_list(config_path: &Path, output: OutputFormat) -> Result<()> {
    let config = load_config_from_path(config_path).await?;
    let opts = ListOptions::from_config(&config, output)?;
    tracing::debug!("listing topics with {:?}", opts);

    let conn = HttpConnection::new(&config)?;
    let mut stdout = std::io::stdout();
    list_topics(&opts, &conn, &TracingLogger, &mut stdout).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
