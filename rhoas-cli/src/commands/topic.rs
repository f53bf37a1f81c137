use crate::client::{ClientError, Connection};
use crate::config::CliConfig;
use crate::localize::Message;
use crate::logging::Logger;
use crate::model::Topic;
use crate::output::{OutputError, OutputFormat, dump_json, dump_table, dump_yaml};
use std::io::Write;
use tabled::Tabled;
use thiserror::Error;

/// Failures of the topic commands
#[derive(Error, Debug)]
pub enum TopicError {
    #[error("{}", Message::NoKafkaSelected)]
    NoKafkaSelected,

    #[error("{}", Message::Unauthorized { operation })]
    Unauthorized { operation: &'static str },

    #[error("{}", Message::InternalServerError)]
    InternalServerError(#[source] ClientError),

    #[error("{}", Message::UnableToConnectToKafka { name })]
    UnableToConnect {
        name: String,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl TopicError {
    /// Classify a failed admin API call by its HTTP status
    pub fn from_api_failure(operation: &'static str, instance_name: &str, err: ClientError) -> Self {
        match err.status() {
            Some(401) => Self::Unauthorized { operation },
            Some(500) => Self::InternalServerError(err),
            Some(503) => Self::UnableToConnect {
                name: instance_name.to_string(),
                source: err,
            },
            _ => Self::Client(err),
        }
    }
}

/// Options of `kafka topic list`, fixed once flags are parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub kafka_id: String,
    pub output: OutputFormat,
}

impl ListOptions {
    /// Bind the parsed output format to the Kafka instance selected in `config`
    pub fn from_config(config: &CliConfig, output: OutputFormat) -> Result<Self, TopicError> {
        if !config.has_kafka() {
            return Err(TopicError::NoKafkaSelected);
        }
        Ok(Self {
            kafka_id: config.kafka_cluster_id().unwrap_or_default().to_string(),
            output,
        })
    }
}

/// One line of the default table output
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TopicRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Partitions")]
    pub partitions_count: usize,
}

/// Project topics to table rows, keeping the server's order
pub fn map_topics_to_rows(topics: &[Topic]) -> Vec<TopicRow> {
    topics
        .iter()
        .map(|t| TopicRow {
            name: t.name().to_string(),
            partitions_count: t.partitions().len(),
        })
        .collect()
}

/// List the topics of the selected Kafka instance and render them to `out`
pub async fn list_topics<W: Write>(
    opts: &ListOptions,
    conn: &dyn Connection,
    logger: &dyn Logger,
    out: &mut W,
) -> Result<(), TopicError> {
    let (api, instance) = conn.topic_admin(&opts.kafka_id).await?;

    let topics = api
        .list_topics()
        .await
        .map_err(|e| TopicError::from_api_failure("list", instance.name(), e))?;

    if topics.count() == 0 {
        logger.info(
            &Message::NoTopics {
                instance_name: instance.name(),
            }
            .to_string(),
        );
        return Ok(());
    }

    match opts.output {
        OutputFormat::Json => dump_json(out, &topics)?,
        OutputFormat::Yaml => dump_yaml(out, &topics)?,
        OutputFormat::Table => dump_table(out, &map_topics_to_rows(topics.items()))?,
    }

    Ok(())
}
