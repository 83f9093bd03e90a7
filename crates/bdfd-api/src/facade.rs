//! Public surface: functions, callbacks and nodes.
//!
//! Composition only. Lookups go through the remote client and the
//! normalizer; node listing fetches the status page and hands it to the
//! parser.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::client::RemoteClient;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::normalize::Resource;
use crate::status::parse_nodes;
use crate::transport::{HttpTransport, Transport};
use crate::types::{CallbackResponse, FunctionResponse, NodeTier};

/// Entry point for the public API and status page.
#[derive(Clone)]
pub struct BdfdClient {
    remote: RemoteClient,
    status_url: String,
}

impl BdfdClient {
    /// Build a client over a reqwest transport.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Build a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            remote: RemoteClient::new(transport, &config),
            status_url: config.status_url,
        }
    }

    pub fn functions(&self) -> Functions<'_> {
        ResourceApi::new(&self.remote)
    }

    pub fn callbacks(&self) -> Callbacks<'_> {
        ResourceApi::new(&self.remote)
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            transport: self.remote.transport(),
            status_url: &self.status_url,
        }
    }

    pub fn remote(&self) -> &RemoteClient {
        &self.remote
    }
}

/// `info` / `list` / `tag_list` over one resource family.
pub struct ResourceApi<'a, R> {
    remote: &'a RemoteClient,
    _family: PhantomData<fn() -> R>,
}

pub type Functions<'a> = ResourceApi<'a, FunctionResponse>;
pub type Callbacks<'a> = ResourceApi<'a, CallbackResponse>;

impl<'a, R: Resource> ResourceApi<'a, R> {
    fn new(remote: &'a RemoteClient) -> Self {
        Self {
            remote,
            _family: PhantomData,
        }
    }

    /// Information about the resource whose tag contains `tag`, or `None`
    /// when no tag matches. Partial tags are accepted: `$addBu` finds
    /// `$addButton[]`.
    pub async fn info(&self, tag: &str) -> ApiResult<Option<R::Info>> {
        Ok(self.remote.get_info::<R>(tag).await?.map(R::normalize))
    }

    /// Information about every resource, in API order.
    pub async fn list(&self) -> ApiResult<Vec<R::Info>> {
        Ok(self
            .remote
            .get_list::<R>()
            .await?
            .into_iter()
            .map(R::normalize)
            .collect())
    }

    /// Every tag of the family, unchanged.
    pub async fn tag_list(&self) -> ApiResult<Vec<String>> {
        self.remote.get_tag_list(R::FAMILY).await
    }
}

/// Hosting node status.
pub struct Nodes<'a> {
    transport: &'a Arc<dyn Transport>,
    status_url: &'a str,
}

impl Nodes<'_> {
    /// Fetch the status page and return the default and high performance tiers.
    pub async fn list(&self) -> ApiResult<[NodeTier; 2]> {
        let html = self.transport.get(self.status_url).await?;
        parse_nodes(&html)
    }
}
