//! BDFD API — typed client for the Bot Designer For Discord public API and status page.

pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod family;
pub mod intents;
pub mod normalize;
pub mod resolver;
pub mod status;
pub mod transport;
pub mod types;

pub use client::RemoteClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, StatusTable};
pub use facade::{BdfdClient, Callbacks, Functions, Nodes, ResourceApi};
pub use family::{Endpoint, FamilyEndpoints, Payload, ResourceFamily};
pub use intents::decode;
pub use normalize::{normalize, Resource};
pub use resolver::find_tag;
pub use status::parse_nodes;
pub use transport::{HttpTransport, Transport};
pub use types::*;
