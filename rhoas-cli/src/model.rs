//! Response shapes of the control-plane and Kafka admin REST APIs.
//!
//! Fields the server may omit are optional; the accessor methods return the
//! zero value when a field is absent.

use serde::{Deserialize, Serialize};

/// A managed Kafka instance as returned by the control-plane API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaInstance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_server_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_api_server_url: Option<String>,
}

impl KafkaInstance {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Page of topics returned by `GET /topics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Topic>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

impl TopicList {
    /// Total number of topics reported by the server
    pub fn count(&self) -> i32 {
        self.count.unwrap_or(0)
    }

    pub fn items(&self) -> &[Topic] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<Vec<Partition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<ConfigEntry>>,
}

impl Topic {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn partitions(&self) -> &[Partition] {
        self.partitions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isr: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<Node>,
}

/// Broker reference inside a partition description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
