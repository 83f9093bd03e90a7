//! Conversion of raw API responses into normalized info records.
//!
//! Pure and total: every well-formed response normalizes. Deprecated fields
//! (`color`, `longDescription`) are dropped and `null` argument lists stay
//! `None`.

use serde::de::DeserializeOwned;

use crate::family::ResourceFamily;
use crate::intents::decode;
use crate::types::{CallbackInfo, CallbackResponse, FunctionInfo, FunctionResponse, Info, RawResponse};

/// A raw response type bound to its family and normalized shape.
pub trait Resource: DeserializeOwned + Send + 'static {
    const FAMILY: ResourceFamily;
    type Info;

    fn normalize(self) -> Self::Info;

    fn into_raw(self) -> RawResponse;
}

impl Resource for FunctionResponse {
    const FAMILY: ResourceFamily = ResourceFamily::Function;
    type Info = FunctionInfo;

    fn normalize(self) -> FunctionInfo {
        normalize_function(self)
    }

    fn into_raw(self) -> RawResponse {
        RawResponse::Function(self)
    }
}

impl Resource for CallbackResponse {
    const FAMILY: ResourceFamily = ResourceFamily::Callback;
    type Info = CallbackInfo;

    fn normalize(self) -> CallbackInfo {
        normalize_callback(self)
    }

    fn into_raw(self) -> RawResponse {
        RawResponse::Callback(self)
    }
}

pub fn normalize_function(raw: FunctionResponse) -> FunctionInfo {
    FunctionInfo {
        tag: raw.tag,
        description: raw.short_description,
        args: raw.arguments,
        intents: decode(raw.intents),
        premium: raw.premium,
    }
}

pub fn normalize_callback(raw: CallbackResponse) -> CallbackInfo {
    CallbackInfo {
        name: raw.name,
        description: raw.description,
        args: raw.arguments,
        intents: decode(raw.intents),
        premium: raw.is_premium,
    }
}

/// Normalize a response of either family; the variant picks the shape.
pub fn normalize(raw: RawResponse) -> Info {
    match raw {
        RawResponse::Function(response) => Info::Function(normalize_function(response)),
        RawResponse::Callback(response) => Info::Callback(normalize_callback(response)),
    }
}

impl RawResponse {
    pub fn family(&self) -> ResourceFamily {
        match self {
            RawResponse::Function(_) => ResourceFamily::Function,
            RawResponse::Callback(_) => ResourceFamily::Callback,
        }
    }
}
