use std::fmt;

use super::runtime::BoxResponseFuture;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Http { status: u16, reason: String },
    InvalidResponseFormat { content_type: Option<String> },
    ServerReported { message: String, details: Option<String> },
    Decode(String),
    Transport(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Http { status, reason } => write!(f, "HTTP {}: {}", status, reason),
            SearchError::InvalidResponseFormat { content_type } => match content_type {
                Some(ct) => write!(f, "Response is not JSON (content-type: {})", ct),
                None => write!(f, "Response is not JSON (no content-type)"),
            },
            SearchError::ServerReported { message, details } => match details {
                Some(details) => write!(f, "Server error: {} ({})", message, details),
                None => write!(f, "Server error: {}", message),
            },
            SearchError::Decode(msg) => write!(f, "Invalid search payload: {}", msg),
            SearchError::Transport(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Decode(e.to_string())
    }
}

/// Which JSON shape the search endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Paginated,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    User {
        username: Option<String>,
        email: Option<String>,
        department: Option<String>,
        position: Option<String>,
        is_active: bool,
        is_staff: bool,
    },
    Project {
        status: Option<String>,
        location: Option<String>,
    },
    Manager {
        points: Option<i64>,
        level: Option<String>,
    },
    Other {
        kind: String,
    },
}

impl RecordKind {
    pub fn tag(&self) -> &str {
        match self {
            RecordKind::User { .. } => "user",
            RecordKind::Project { .. } => "project",
            RecordKind::Manager { .. } => "manager",
            RecordKind::Other { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub id: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub url: Option<String>,
    pub kind: RecordKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultPage {
    pub results: Vec<ResultRecord>,
    pub total_results: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub suggestions: Vec<String>,
}

impl SearchResultPage {
    pub fn single(results: Vec<ResultRecord>) -> Self {
        let total_results = results.len() as u64;
        Self {
            results,
            total_results,
            current_page: 1,
            total_pages: 1,
            has_previous: false,
            has_next: false,
            suggestions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Raw HTTP response handed from the transport to validation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: String::new(),
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One GET against the search endpoint.
pub trait SearchTransport: Send + Sync {
    fn get(&self, query: &str, page: u32) -> BoxResponseFuture;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}
