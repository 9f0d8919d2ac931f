//! Async façade pairing `TodoClient` with a `Transport`.
//!
//! Every operation validates, executes one request and parses the answer.
//! Validation failures return before the transport is touched.

use tracing::{debug, info};

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::TodoItem;

/// The four remote operations over a configured endpoint.
#[derive(Debug, Clone)]
pub struct TodoService<T> {
    client: TodoClient,
    transport: T,
}

impl TodoService<ReqwestTransport> {
    /// Service over a fresh `reqwest` connection pool.
    pub fn connect(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport =
            ReqwestTransport::new().map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Self::new(config, transport)
    }
}

impl<T: Transport> TodoService<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Result<Self, ConfigError> {
        Ok(Self {
            client: TodoClient::new(config)?,
            transport,
        })
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_items(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.transport.execute(self.client.build_list_items()).await?;
        info!(status = response.status, "list items responded");
        debug!(body = %response.body, "list items body");
        self.client.parse_list_items(response)
    }

    pub async fn create_item(&self, title: Option<&str>) -> Result<TodoItem, ApiError> {
        debug!(title = ?title, "creating item");
        let request = self.client.build_create_item(title)?;
        debug!(body = ?request.body, "prepared new item");

        let response = self.transport.execute(request).await?;
        info!(status = response.status, "create item responded");
        debug!(body = %response.body, "created item body");
        self.client.parse_create_item(response)
    }

    pub async fn toggle_item(&self, id: Option<&str>) -> Result<(), ApiError> {
        debug!(id = ?id, "toggling item");
        let request = self.client.build_toggle_item(id)?;
        let response = self.transport.execute(request).await?;
        info!(id = ?id, status = response.status, "toggle item responded");
        self.client.parse_toggle_item(response)
    }

    pub async fn delete_item(&self, id: Option<&str>) -> Result<(), ApiError> {
        debug!(id = ?id, "deleting item");
        let request = self.client.build_delete_item(id)?;
        let response = self.transport.execute(request).await?;
        info!(id = ?id, status = response.status, "delete item responded");
        self.client.parse_delete_item(response)
    }
}
