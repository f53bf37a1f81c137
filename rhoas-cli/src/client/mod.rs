mod error;
mod http;

pub use error::*;
pub use http::*;

use crate::model::{KafkaInstance, TopicList};
use async_trait::async_trait;

/// Topic administration endpoints of one Kafka instance
#[async_trait]
pub trait TopicAdminApi: Send + Sync {
    async fn list_topics(&self) -> Result<TopicList, ClientError>;
}

/// Authenticated access to the managed services APIs
#[async_trait]
pub trait Connection: Send + Sync {
    /// Resolve a Kafka instance and open its topic admin API
    async fn topic_admin(
        &self,
        cluster_id: &str,
    ) -> Result<(Box<dyn TopicAdminApi>, KafkaInstance), ClientError>;
}
