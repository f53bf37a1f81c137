use super::error::ClientError;
use super::{Connection, TopicAdminApi};
use crate::config::CliConfig;
use crate::model::{KafkaInstance, TopicList};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;

const USER_AGENT: &str = concat!("rhoas-cli/", env!("CARGO_PKG_VERSION"));
const KAFKAS_PATH: [&str; 4] = ["api", "kafkas_mgmt", "v1", "kafkas"];

/// HTTP client bound to one base URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(
        base_url: &str,
        token: Option<String>,
        insecure: bool,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(ClientError::RequestFailed)?;

        Self::with_client(client, base_url, token)
    }

    fn with_client(
        client: Client,
        base_url: &str,
        token: Option<String>,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ClientError::config_error(format!("invalid URL '{base_url}': {e}"))
        })?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::config_error(format!("invalid base URL '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request
    pub async fn get<T>(&self, segments: &[&str]) -> Result<T, ClientError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(segments)?;
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(ClientError::RequestFailed)?;
        self.handle_response(response).await
    }

    /// Handle HTTP response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> Result<T, ClientError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ClientError::RequestFailed)?;
            serde_json::from_str(&text).map_err(ClientError::SerializationError)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::api_error(status.as_u16(), error_text))
        }
    }
}

/// Connection to the managed services control plane
pub struct HttpConnection {
    api: HttpClient,
}

impl HttpConnection {
    pub fn new(config: &CliConfig) -> Result<Self, ClientError> {
        if config.api_url.is_empty() {
            return Err(ClientError::config_error("API URL not configured"));
        }
        let api = HttpClient::new(
            &config.api_url,
            config.access_token.clone(),
            config.insecure,
        )?;
        Ok(Self { api })
    }

    /// Look up a Kafka instance by ID
    pub async fn kafka_instance(&self, cluster_id: &str) -> Result<KafkaInstance, ClientError> {
        let mut segments = KAFKAS_PATH.to_vec();
        segments.push(cluster_id);
        self.api.get(&segments).await
    }
}

/// Base URL of the admin server fronting a Kafka instance
pub fn admin_api_url(instance: &KafkaInstance) -> Result<String, ClientError> {
    if let Some(url) = instance.admin_api_server_url.as_deref().filter(|u| !u.is_empty()) {
        return Ok(url.to_string());
    }
    match instance.bootstrap_server_host.as_deref().filter(|h| !h.is_empty()) {
        Some(host) => {
            let host = host.split(':').next().unwrap_or(host);
            Ok(format!("https://admin-server-{host}/rest"))
        }
        None => Err(ClientError::config_error(format!(
            "Kafka instance \"{}\" has no admin server address",
            instance.name()
        ))),
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn topic_admin(
        &self,
        cluster_id: &str,
    ) -> Result<(Box<dyn TopicAdminApi>, KafkaInstance), ClientError> {
        let instance = self.kafka_instance(cluster_id).await?;
        let admin_url = admin_api_url(&instance)?;
        tracing::debug!("using admin API {} for instance {}", admin_url, instance.id);

        let admin = HttpTopicAdmin {
            client: HttpClient::with_client(
                self.api.client.clone(),
                &admin_url,
                self.api.token.clone(),
            )?,
        };
        Ok((Box::new(admin), instance))
    }
}

/// Kafka admin REST API over HTTP
pub struct HttpTopicAdmin {
    client: HttpClient,
}

#[async_trait]
impl TopicAdminApi for HttpTopicAdmin {
    async fn list_topics(&self) -> Result<TopicList, ClientError> {
        self.client.get(&["topics"]).await
    }
}
