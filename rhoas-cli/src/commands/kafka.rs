use crate::config::{CliConfig, load_config_from_path, save_config_to_path};
use crate::localize::Message;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Instance IDs are used as a single URL path segment
fn is_valid_kafka_id(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Select the Kafka instance used by the topic commands
pub fn use_kafka(config: &mut CliConfig, id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow::anyhow!("{}", Message::EmptyKafkaId));
    }
    if !is_valid_kafka_id(id) {
        return Err(anyhow::anyhow!("{}", Message::InvalidKafkaId { id }));
    }
    config.set_kafka(id);
    Ok(())
}

/// Handle `kafka use` against the config file at `config_path`
pub async fn handle_use_command(config_path: &Path, id: &str) -> Result<()> {
    let mut config = load_config_from_path(config_path).await?;
    use_kafka(&mut config, id)?;
    save_config_to_path(&config, config_path).await?;
    writeln!(std::io::stdout(), "{}", Message::KafkaSelected { id: id.trim() })?;
    Ok(())
}
