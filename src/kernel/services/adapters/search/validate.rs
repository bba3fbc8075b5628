//! Response validation and payload decoding.
//!
//! Order matters: status first, then content type, then the `error` field,
//! then the backend shape.

use crate::kernel::services::ports::search::{
    Backend, RawResponse, RecordKind, Result, ResultRecord, SearchError, SearchResultPage,
};
use serde::Deserialize;
use serde_json::Value;

const JSON_CONTENT_TYPE: &str = "application/json";

pub fn validate_response(
    response: RawResponse,
    backend: Backend,
    requested_page: u32,
) -> Result<SearchResultPage> {
    if !response.is_success() {
        return Err(SearchError::Http {
            status: response.status,
            reason: response.reason,
        });
    }

    let is_json = response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE));
    if !is_json {
        return Err(SearchError::InvalidResponseFormat {
            content_type: response.content_type,
        });
    }

    let value: Value = serde_json::from_slice(&response.body)?;
    if let Some(err) = server_error(&value) {
        return Err(err);
    }

    match backend {
        Backend::Paginated => decode_paginated(value, requested_page),
        Backend::Legacy => decode_legacy(value, requested_page),
    }
}

fn server_error(value: &Value) -> Option<SearchError> {
    let error = value.as_object()?.get("error")?;
    let message = match error {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let details = value
        .get("details")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(SearchError::ServerReported { message, details })
}

#[derive(Deserialize)]
struct WireRecord {
    id: u64,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    is_staff: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    points: Option<i64>,
    #[serde(default)]
    level: Option<String>,
}

#[derive(Deserialize)]
struct WirePage {
    results: Vec<WireRecord>,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    has_previous: Option<bool>,
    #[serde(default)]
    has_next: Option<bool>,
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct WireLegacyUser {
    id: u64,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    is_staff: bool,
    #[serde(default = "default_true")]
    is_active: bool,
}

#[derive(Deserialize)]
struct WireLegacyPage {
    users: Vec<WireLegacyUser>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    per_page: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn decode_paginated(value: Value, requested_page: u32) -> Result<SearchResultPage> {
    let wire: WirePage = serde_json::from_value(value)?;

    let results: Vec<ResultRecord> = wire.results.into_iter().map(into_record).collect();
    let current_page = wire.current_page.unwrap_or(requested_page).max(1);
    let total_pages = wire.total_pages.unwrap_or(current_page);

    Ok(SearchResultPage {
        total_results: wire.total_results.unwrap_or(results.len() as u64),
        results,
        current_page,
        total_pages,
        has_previous: wire.has_previous.unwrap_or(current_page > 1),
        has_next: wire.has_next.unwrap_or(current_page < total_pages),
        suggestions: wire.suggestions,
    })
}

fn into_record(wire: WireRecord) -> ResultRecord {
    let kind = match wire.kind.as_deref().unwrap_or("user") {
        "user" => RecordKind::User {
            username: non_empty(wire.username.clone()),
            email: non_empty(wire.email),
            department: non_empty(wire.department),
            position: non_empty(wire.position),
            is_active: wire.is_active.unwrap_or(true),
            is_staff: wire.is_staff.unwrap_or(false),
        },
        "project" => RecordKind::Project {
            status: non_empty(wire.status),
            location: non_empty(wire.location),
        },
        "manager" => RecordKind::Manager {
            points: wire.points,
            level: non_empty(wire.level),
        },
        other => RecordKind::Other {
            kind: other.to_string(),
        },
    };

    let title = non_empty(wire.title)
        .or(non_empty(wire.name))
        .or(non_empty(wire.full_name))
        .or(non_empty(wire.username))
        .unwrap_or_else(|| format!("#{}", wire.id));

    ResultRecord {
        id: wire.id,
        title,
        subtitle: non_empty(wire.subtitle),
        url: non_empty(wire.url),
        kind,
    }
}

fn decode_legacy(value: Value, requested_page: u32) -> Result<SearchResultPage> {
    let wire: WireLegacyPage = serde_json::from_value(value)?;

    let results: Vec<ResultRecord> = wire
        .users
        .into_iter()
        .map(|user| {
            let username = non_empty(user.username);
            let title = non_empty(user.full_name)
                .or_else(|| username.clone())
                .unwrap_or_else(|| format!("#{}", user.id));
            ResultRecord {
                id: user.id,
                title,
                subtitle: username.as_ref().map(|u| format!("@{}", u)),
                url: Some(format!("/manager/modify/{}/", user.id)),
                kind: RecordKind::User {
                    username,
                    email: non_empty(user.email),
                    department: None,
                    position: None,
                    is_active: user.is_active,
                    is_staff: user.is_staff,
                },
            }
        })
        .collect();

    let (Some(total), Some(per_page)) = (wire.total, wire.per_page.filter(|n| *n > 0)) else {
        return Ok(SearchResultPage::single(results));
    };

    let current_page = wire.page.unwrap_or(requested_page).max(1);
    let total_pages =
        u32::try_from(total.div_ceil(u64::from(per_page)).max(1)).unwrap_or(u32::MAX);
    Ok(SearchResultPage {
        results,
        total_results: total,
        current_page,
        total_pages,
        has_previous: current_page > 1,
        has_next: current_page < total_pages,
        suggestions: Vec::new(),
    })
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/validate.rs"]
mod tests;
