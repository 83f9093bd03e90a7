//! Resource families and the endpoints they map to.

use std::fmt;

use crate::types::RawResponse;

/// The two resource kinds served by the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    Function,
    Callback,
}

/// Path suffixes of one family, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyEndpoints {
    /// Prefix for single lookups; the resolved tag is appended.
    pub info: &'static str,
    pub list: &'static str,
    pub tag_list: &'static str,
}

const FUNCTION_ENDPOINTS: FamilyEndpoints = FamilyEndpoints {
    info: "function/",
    list: "function_list",
    tag_list: "function_tag_list",
};

const CALLBACK_ENDPOINTS: FamilyEndpoints = FamilyEndpoints {
    info: "callback/",
    list: "callback_list",
    tag_list: "callback_tag_list",
};

impl ResourceFamily {
    pub const ALL: [ResourceFamily; 2] = [ResourceFamily::Function, ResourceFamily::Callback];

    pub fn endpoints(self) -> &'static FamilyEndpoints {
        match self {
            ResourceFamily::Function => &FUNCTION_ENDPOINTS,
            ResourceFamily::Callback => &CALLBACK_ENDPOINTS,
        }
    }

    /// Path (relative to the base URL) for the given endpoint.
    pub fn path(self, endpoint: &Endpoint<'_>) -> String {
        let endpoints = self.endpoints();
        match endpoint {
            Endpoint::Info(tag) => format!("{}{}", endpoints.info, tag),
            Endpoint::List => endpoints.list.to_string(),
            Endpoint::TagList => endpoints.tag_list.to_string(),
        }
    }
}

impl fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceFamily::Function => f.write_str("function"),
            ResourceFamily::Callback => f.write_str("callback"),
        }
    }
}

/// A request against one family. Only lookups carry a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Info(&'a str),
    List,
    TagList,
}

/// The response matching an [`Endpoint`] variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `None` when the tag did not resolve.
    Info(Option<RawResponse>),
    List(Vec<RawResponse>),
    TagList(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_paths() {
        let f = ResourceFamily::Function;
        assert_eq!(f.path(&Endpoint::Info("$addButton[]")), "function/$addButton[]");
        assert_eq!(f.path(&Endpoint::List), "function_list");
        assert_eq!(f.path(&Endpoint::TagList), "function_tag_list");

        let c = ResourceFamily::Callback;
        assert_eq!(c.path(&Endpoint::Info("$onJoined")), "callback/$onJoined");
        assert_eq!(c.path(&Endpoint::List), "callback_list");
        assert_eq!(c.path(&Endpoint::TagList), "callback_tag_list");
    }

    #[test]
    fn test_families_do_not_share_paths() {
        let f = ResourceFamily::Function.endpoints();
        let c = ResourceFamily::Callback.endpoints();
        assert_ne!(f.info, c.info);
        assert_ne!(f.list, c.list);
        assert_ne!(f.tag_list, c.tag_list);
    }
}
