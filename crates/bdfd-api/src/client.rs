//! Remote client for the function and callback endpoints.
//!
//! Every method is a single uncoordinated GET (lookups add one tag-list
//! fetch first). Nothing is cached between calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::family::{Endpoint, Payload, ResourceFamily};
use crate::normalize::Resource;
use crate::resolver;
use crate::transport::Transport;
use crate::types::{CallbackResponse, FunctionResponse, RawResponse};

/// Issues requests against the public API base URL.
#[derive(Clone)]
pub struct RemoteClient {
    transport: Arc<dyn Transport>,
    api_base: String,
}

impl RemoteClient {
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base.clone(),
        }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Absolute URL of an endpoint of `family`.
    pub fn url(&self, family: ResourceFamily, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.api_base, family.path(endpoint))
    }

    /// Look up one resource by full or partial tag.
    ///
    /// Returns `Ok(None)` without requesting the info endpoint when no tag
    /// matches.
    pub async fn get_info<R: Resource>(&self, tag: &str) -> ApiResult<Option<R>> {
        let Some(resolved) = resolver::resolve(self, R::FAMILY, tag).await? else {
            return Ok(None);
        };

        let url = self.url(R::FAMILY, &Endpoint::Info(&resolved));
        self.get_json(&url).await.map(Some)
    }

    pub async fn get_list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        let url = self.url(R::FAMILY, &Endpoint::List);
        self.get_json(&url).await
    }

    pub async fn get_tag_list(&self, family: ResourceFamily) -> ApiResult<Vec<String>> {
        let url = self.url(family, &Endpoint::TagList);
        self.get_json(&url).await
    }

    /// Issue `endpoint` against `family` and return the matching payload.
    pub async fn request(
        &self,
        family: ResourceFamily,
        endpoint: Endpoint<'_>,
    ) -> ApiResult<Payload> {
        match family {
            ResourceFamily::Function => self.request_typed::<FunctionResponse>(endpoint).await,
            ResourceFamily::Callback => self.request_typed::<CallbackResponse>(endpoint).await,
        }
    }

    async fn request_typed<R: Resource>(&self, endpoint: Endpoint<'_>) -> ApiResult<Payload> {
        Ok(match endpoint {
            Endpoint::Info(tag) => Payload::Info(self.get_info::<R>(tag).await?.map(R::into_raw)),
            Endpoint::List => Payload::List(
                self.get_list::<R>()
                    .await?
                    .into_iter()
                    .map(R::into_raw)
                    .collect::<Vec<RawResponse>>(),
            ),
            Endpoint::TagList => Payload::TagList(self.get_tag_list(R::FAMILY).await?),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Json {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::stub::StubTransport;

    const BASE: &str = "http://stub/api/";

    fn client(stub: StubTransport) -> (RemoteClient, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        let config = ClientConfig::default().with_api_base(BASE);
        (RemoteClient::new(stub.clone(), &config), stub)
    }

    #[tokio::test]
    async fn test_get_info_resolves_partial_tag() {
        let (client, stub) = client(
            StubTransport::new()
                .route(
                    "http://stub/api/function_tag_list",
                    r#"["$addButton[]", "$nomention"]"#,
                )
                .route(
                    "http://stub/api/function/$addButton[]",
                    r#"{"tag": "$addButton[]", "shortDescription": "Adds a button", "arguments": null, "intents": 0, "premium": false}"#,
                ),
        );

        let raw = client.get_info::<FunctionResponse>("addB").await.unwrap().unwrap();
        assert_eq!(raw.tag, "$addButton[]");
        assert_eq!(stub.calls("http://stub/api/function_tag_list"), 1);
        assert_eq!(stub.calls("http://stub/api/function/$addButton[]"), 1);
    }

    #[tokio::test]
    async fn test_get_info_unresolved_skips_info_request() {
        let (client, stub) = client(
            StubTransport::new().route("http://stub/api/callback_tag_list", r#"["$onJoined"]"#),
        );

        let raw = client.get_info::<CallbackResponse>("$onLeave").await.unwrap();
        assert!(raw.is_none());
        assert_eq!(stub.calls("http://stub/api/callback_tag_list"), 1);
        assert_eq!(stub.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_tag_list_failure_is_transport_error() {
        let (client, _stub) = client(
            StubTransport::new().route_status("http://stub/api/function_tag_list", 502),
        );

        let err = client.get_info::<FunctionResponse>("$ban").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let (client, _stub) =
            client(StubTransport::new().route("http://stub/api/callback_list", "<html>"));

        let err = client.get_list::<CallbackResponse>().await.unwrap_err();
        match err {
            ApiError::Json { url, .. } => assert_eq!(url, "http://stub/api/callback_list"),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_returns_matching_payload() {
        let (client, _stub) = client(
            StubTransport::new()
                .route("http://stub/api/callback_tag_list", r#"["$onJoined", "$onLeave"]"#)
                .route(
                    "http://stub/api/callback_list",
                    r#"[{"name": "$onJoined", "description": "", "arguments": null, "intents": 2, "is_premium": false}]"#,
                ),
        );

        let tags = client
            .request(ResourceFamily::Callback, Endpoint::TagList)
            .await
            .unwrap();
        assert_eq!(
            tags,
            Payload::TagList(vec!["$onJoined".to_string(), "$onLeave".to_string()])
        );

        let list = client
            .request(ResourceFamily::Callback, Endpoint::List)
            .await
            .unwrap();
        match list {
            Payload::List(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].family(), ResourceFamily::Callback);
            }
            other => panic!("expected list payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_info_resolves_and_wraps_raw() {
        let (client, stub) = client(
            StubTransport::new()
                .route("http://stub/api/function_tag_list", r#"["$addButton[]"]"#)
                .route(
                    "http://stub/api/function/$addButton[]",
                    r#"{"tag": "$addButton[]", "shortDescription": "Adds a button", "arguments": null, "intents": 256, "premium": true}"#,
                ),
        );

        let payload = client
            .request(ResourceFamily::Function, Endpoint::Info("addB"))
            .await
            .unwrap();
        match payload {
            Payload::Info(Some(RawResponse::Function(raw))) => {
                assert_eq!(raw.tag, "$addButton[]");
                assert_eq!(raw.intents, 256);
                assert!(raw.premium);
            }
            other => panic!("expected function info payload, got {other:?}"),
        }
        assert_eq!(stub.calls("http://stub/api/function/$addButton[]"), 1);
    }

    #[tokio::test]
    async fn test_request_info_unresolved_is_empty_payload() {
        let (client, stub) = client(
            StubTransport::new().route("http://stub/api/callback_tag_list", r#"["$onJoined"]"#),
        );

        let payload = client
            .request(ResourceFamily::Callback, Endpoint::Info("$onLeave"))
            .await
            .unwrap();
        assert_eq!(payload, Payload::Info(None));
        assert_eq!(stub.calls("http://stub/api/callback_tag_list"), 1);
        assert_eq!(stub.calls("http://stub/api/callback/$onLeave"), 0);
        assert_eq!(stub.total_calls(), 1);
    }
}
