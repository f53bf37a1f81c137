mod file;

pub use file::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.openshift.com";

/// Main CLI configuration structure
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CliConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Skip TLS verification for API and admin server calls
    #[serde(default)]
    pub insecure: bool,
    #[serde(default)]
    pub services: ServiceConfig,
}

/// Per-service selections
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka: Option<KafkaConfig>,
}

/// The selected Kafka instance
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KafkaConfig {
    pub cluster_id: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            access_token: None,
            insecure: false,
            services: ServiceConfig::default(),
        }
    }
}

impl CliConfig {
    /// Whether a Kafka instance is currently selected
    pub fn has_kafka(&self) -> bool {
        self.kafka_cluster_id().is_some()
    }

    /// ID of the selected Kafka instance, if any
    pub fn kafka_cluster_id(&self) -> Option<&str> {
        self.services
            .kafka
            .as_ref()
            .map(|k| k.cluster_id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Select a Kafka instance
    pub fn set_kafka(&mut self, cluster_id: impl Into<String>) {
        self.services.kafka = Some(KafkaConfig {
            cluster_id: cluster_id.into(),
        });
    }
}
