//! Error types for API requests and status page scraping.

use std::fmt;

/// The two tables the status page is expected to carry, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTable {
    Default,
    HighPerformance,
}

impl StatusTable {
    pub const ALL: [StatusTable; 2] = [StatusTable::Default, StatusTable::HighPerformance];

    pub fn label(self) -> &'static str {
        match self {
            StatusTable::Default => "Default",
            StatusTable::HighPerformance => "High Performance",
        }
    }
}

impl fmt::Display for StatusTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while talking to the API or reading the status page.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{0} nodes table not found on the status page. \
         The page layout may have changed; try again later"
    )]
    MissingTable(StatusTable),

    #[error("{table} nodes table: row {row} has fewer than four cells")]
    MalformedRow { table: StatusTable, row: usize },
}

impl ApiError {
    /// Whether the error came from the status page layout rather than the network.
    pub fn is_scrape_error(&self) -> bool {
        matches!(self, ApiError::MissingTable(_) | ApiError::MalformedRow { .. })
    }
}

/// Convenience result type.
pub type ApiResult<T> = Result<T, ApiError>;
