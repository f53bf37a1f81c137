use super::*;
use crate::client::{ClientError, Connection, TopicAdminApi};
use crate::config::{CliConfig, load_config_from_path};
use crate::logging::Logger;
use crate::model::{KafkaInstance, Partition, Topic, TopicList};
use async_trait::async_trait;
use std::error::Error as _;
use std::sync::Mutex;
use tempfile::TempDir;

#[derive(Clone)]
enum Reply {
    Topics(TopicList),
    Status(u16, &'static str),
    NoStatus,
}

struct FakeAdmin {
    reply: Reply,
}

#[async_trait]
impl TopicAdminApi for FakeAdmin {
    async fn list_topics(&self) -> Result<TopicList, ClientError> {
        match &self.reply {
            Reply::Topics(list) => Ok(list.clone()),
            Reply::Status(status, body) => Err(ClientError::api_error(*status, *body)),
            Reply::NoStatus => Err(ClientError::config_error("admin server unreachable")),
        }
    }
}

struct FakeConnection {
    reply: Reply,
    requested: Mutex<Vec<String>>,
}

impl FakeConnection {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Connection for FakeConnection {
    async fn topic_admin(
        &self,
        cluster_id: &str,
    ) -> Result<(Box<dyn TopicAdminApi>, KafkaInstance), ClientError> {
        self.requested.lock().unwrap().push(cluster_id.to_string());
        let instance = KafkaInstance {
            id: cluster_id.to_string(),
            name: "my-kafka".to_string(),
            ..Default::default()
        };
        Ok((
            Box::new(FakeAdmin {
                reply: self.reply.clone(),
            }),
            instance,
        ))
    }
}

#[derive(Default)]
struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }
}

fn topic(name: &str, partitions: usize) -> Topic {
    Topic {
        name: Some(name.to_string()),
        partitions: Some(
            (0..partitions)
                .map(|p| Partition {
                    partition: Some(p as i32),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn sample_topics() -> TopicList {
    TopicList {
        items: Some(vec![topic("orders", 3), topic("events", 1)]),
        offset: Some(0),
        limit: Some(100),
        count: Some(2),
    }
}

fn options(output: OutputFormat) -> ListOptions {
    ListOptions {
        kafka_id: "c0ffee".to_string(),
        output,
    }
}

async fn run_list(
    reply: Reply,
    output: OutputFormat,
) -> (Result<(), TopicError>, String, Vec<String>) {
    let conn = FakeConnection::new(reply);
    let logger = RecordingLogger::default();
    let mut out = Vec::new();
    let result = list_topics(&options(output), &conn, &logger, &mut out).await;
    assert_eq!(*conn.requested.lock().unwrap(), vec!["c0ffee".to_string()]);
    let lines = logger.lines.into_inner().unwrap();
    (result, String::from_utf8(out).unwrap(), lines)
}

#[test]
fn test_options_require_selected_kafka() {
    let err = ListOptions::from_config(&CliConfig::default(), OutputFormat::Table).unwrap_err();
    assert!(matches!(err, TopicError::NoKafkaSelected));
    assert!(err.to_string().contains("no Kafka instance is currently selected"));
}

#[test]
fn test_options_from_config() {
    let mut config = CliConfig::default();
    config.set_kafka("c0ffee");
    let opts = ListOptions::from_config(&config, OutputFormat::Json).unwrap();
    assert_eq!(opts, options(OutputFormat::Json));
}

#[test]
fn test_rows_keep_server_order() {
    let rows = map_topics_to_rows(sample_topics().items());
    assert_eq!(
        rows,
        vec![
            TopicRow {
                name: "orders".to_string(),
                partitions_count: 3,
            },
            TopicRow {
                name: "events".to_string(),
                partitions_count: 1,
            },
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_zero_topics_logs_once_and_prints_nothing() {
    let empty = TopicList {
        items: Some(vec![]),
        count: Some(0),
        ..Default::default()
    };
    let (result, out, lines) = run_list(Reply::Topics(empty), OutputFormat::Table).await;

    assert!(result.is_ok());
    assert!(out.is_empty());
    assert_eq!(lines, vec!["Kafka instance \"my-kafka\" has no topics".to_string()]);
}

#[test_log::test(tokio::test)]
async fn test_list_renders_table() {
    let (result, out, lines) = run_list(Reply::Topics(sample_topics()), OutputFormat::Table).await;

    assert!(result.is_ok());
    assert!(lines.is_empty());
    let rendered: Vec<Vec<&str>> = out
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(
        rendered,
        vec![
            vec!["Name", "Partitions"],
            vec!["orders", "3"],
            vec!["events", "1"],
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_list_renders_json() {
    let (result, out, _) = run_list(Reply::Topics(sample_topics()), OutputFormat::Json).await;

    assert!(result.is_ok());
    let parsed: TopicList = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, sample_topics());
}

#[test_log::test(tokio::test)]
async fn test_list_renders_yaml() {
    let (result, out, _) = run_list(Reply::Topics(sample_topics()), OutputFormat::Yaml).await;

    assert!(result.is_ok());
    assert!(out.contains("name: orders"));
    let parsed: TopicList = serde_yaml::from_str(&out).unwrap();
    assert_eq!(parsed, sample_topics());
}

#[test_log::test(tokio::test)]
async fn test_unauthorized() {
    let (result, out, _) = run_list(Reply::Status(401, "denied"), OutputFormat::Table).await;

    let err = result.unwrap_err();
    assert!(matches!(err, TopicError::Unauthorized { operation: "list" }));
    assert_eq!(err.to_string(), "you are unauthorized to list these topics");
    assert!(out.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_internal_server_error_wraps_cause() {
    let (result, _, _) = run_list(Reply::Status(500, "boom"), OutputFormat::Table).await;

    let err = result.unwrap_err();
    assert!(matches!(err, TopicError::InternalServerError(_)));
    assert_eq!(err.to_string(), "internal server error");
    assert_eq!(err.source().unwrap().to_string(), "API error: 500 - boom");
}

#[test_log::test(tokio::test)]
async fn test_unavailable_names_instance() {
    let (result, _, _) = run_list(Reply::Status(503, "no brokers"), OutputFormat::Json).await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "unable to connect to Kafka instance \"my-kafka\"");
    assert_eq!(err.source().unwrap().to_string(), "API error: 503 - no brokers");
}

#[test_log::test(tokio::test)]
async fn test_other_failures_pass_through() {
    let (result, _, _) = run_list(Reply::Status(404, "not found"), OutputFormat::Table).await;
    let err = result.unwrap_err();
    assert!(matches!(err, TopicError::Client(ClientError::ApiError { status: 404, .. })));
    assert_eq!(err.to_string(), "API error: 404 - not found");

    let (result, _, _) = run_list(Reply::NoStatus, OutputFormat::Table).await;
    let err = result.unwrap_err();
    assert!(matches!(err, TopicError::Client(ClientError::ConfigError(_))));
    assert_eq!(err.to_string(), "Configuration error: admin server unreachable");
}

#[test]
fn test_use_kafka_selects_instance() {
    let mut config = CliConfig::default();
    use_kafka(&mut config, " abc123 ").unwrap();
    assert_eq!(config.kafka_cluster_id(), Some("abc123"));

    assert!(use_kafka(&mut config, "  ").is_err());
    assert_eq!(config.kafka_cluster_id(), Some("abc123"));
}

#[test]
fn test_use_kafka_rejects_unsafe_ids() {
    let mut config = CliConfig::default();
    use_kafka(&mut config, "my-kafka_01").unwrap();

    for id in ["../../../admin", "abc?x=1", "abc#frag", "a b", "abc/def", ".."] {
        let err = use_kafka(&mut config, id).unwrap_err();
        assert!(err.to_string().starts_with("invalid Kafka instance ID"), "{err}");
        assert_eq!(config.kafka_cluster_id(), Some("my-kafka_01"));
    }
}

#[test_log::test(tokio::test)]
async fn test_use_command_persists_selection() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");

    handle_use_command(&config_path, "abc123").await.unwrap();

    let config = load_config_from_path(&config_path).await.unwrap();
    assert_eq!(config.kafka_cluster_id(), Some("abc123"));
}
