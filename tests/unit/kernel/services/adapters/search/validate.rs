use super::*;

fn ok_json(body: &str) -> RawResponse {
    RawResponse::json(200, body)
}

#[test]
fn test_non_2xx_is_http_error() {
    let resp = RawResponse {
        status: 403,
        reason: "Forbidden".to_string(),
        content_type: Some("application/json".to_string()),
        body: br#"{"error":"No tienes permiso"}"#.to_vec(),
    };
    let err = validate_response(resp, Backend::Paginated, 1).unwrap_err();
    assert_eq!(
        err,
        SearchError::Http {
            status: 403,
            reason: "Forbidden".to_string()
        }
    );
}

#[test]
fn test_html_body_is_invalid_format() {
    let resp = RawResponse {
        status: 200,
        reason: "OK".to_string(),
        content_type: Some("text/html; charset=utf-8".to_string()),
        body: b"<html>login</html>".to_vec(),
    };
    let err = validate_response(resp, Backend::Paginated, 1).unwrap_err();
    assert!(matches!(err, SearchError::InvalidResponseFormat { .. }));
}

#[test]
fn test_missing_content_type_is_invalid_format() {
    let mut resp = ok_json("{}");
    resp.content_type = None;
    let err = validate_response(resp, Backend::Legacy, 1).unwrap_err();
    assert_eq!(err, SearchError::InvalidResponseFormat { content_type: None });
}

#[test]
fn test_content_type_with_charset_is_accepted() {
    let mut resp = ok_json(r#"{"results": []}"#);
    resp.content_type = Some("Application/JSON; charset=utf-8".to_string());
    assert!(validate_response(resp, Backend::Paginated, 1).is_ok());
}

#[test]
fn test_error_field_is_server_reported() {
    let resp = ok_json(r#"{"error":"Búsqueda no disponible","details":"db down"}"#);
    let err = validate_response(resp, Backend::Paginated, 1).unwrap_err();
    assert_eq!(
        err,
        SearchError::ServerReported {
            message: "Búsqueda no disponible".to_string(),
            details: Some("db down".to_string()),
        }
    );
}

#[test]
fn test_null_error_field_is_ignored() {
    let resp = ok_json(r#"{"error":null,"results":[]}"#);
    let page = validate_response(resp, Backend::Paginated, 1).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_malformed_json_is_decode_error() {
    let err = validate_response(ok_json("{not json"), Backend::Paginated, 1).unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[test]
fn test_wrong_shape_is_decode_error() {
    let err = validate_response(ok_json(r#"{"users": []}"#), Backend::Paginated, 1).unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[test]
fn test_paginated_payload_with_kinds() {
    let body = r#"{
        "results": [
            {"id": 1, "type": "user", "title": "Ana Pérez", "department": "Ventas", "position": "Jefa"},
            {"id": 2, "type": "project", "name": "Torre Norte", "status": "active", "location": "Lima"},
            {"id": 3, "type": "manager", "full_name": "Luis Soto", "points": 120, "level": "experto"},
            {"id": 4, "type": "invoice", "title": "F-0001", "url": "/billing/4/"}
        ],
        "total_results": 34,
        "current_page": 2,
        "total_pages": 4,
        "has_previous": true,
        "has_next": true
    }"#;
    let page = validate_response(ok_json(body), Backend::Paginated, 2).unwrap();

    assert_eq!(page.results.len(), 4);
    assert_eq!(page.total_results, 34);
    assert_eq!((page.current_page, page.total_pages), (2, 4));
    assert!(page.has_previous && page.has_next);

    assert_eq!(page.results[0].title, "Ana Pérez");
    assert!(matches!(
        &page.results[0].kind,
        RecordKind::User { department: Some(d), position: Some(p), is_active: true, .. }
            if d == "Ventas" && p == "Jefa"
    ));
    assert_eq!(page.results[1].title, "Torre Norte");
    assert!(matches!(&page.results[1].kind, RecordKind::Project { .. }));
    assert_eq!(page.results[2].title, "Luis Soto");
    assert!(matches!(
        &page.results[2].kind,
        RecordKind::Manager { points: Some(120), .. }
    ));
    assert_eq!(
        page.results[3].kind,
        RecordKind::Other {
            kind: "invoice".to_string()
        }
    );
    assert_eq!(page.results[3].url.as_deref(), Some("/billing/4/"));
}

#[test]
fn test_paginated_defaults_from_requested_page() {
    let body = r#"{"results": [{"id": 7}]}"#;
    let page = validate_response(ok_json(body), Backend::Paginated, 3).unwrap();
    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_previous);
    assert!(!page.has_next);
    assert_eq!(page.results[0].title, "#7");
    assert_eq!(page.results[0].kind.tag(), "user");
}

#[test]
fn test_legacy_payload_derives_pagination() {
    let body = r#"{
        "users": [
            {"id": 5, "username": "ana", "full_name": "Ana Pérez", "email": "ana@example.com", "is_staff": true, "is_active": true},
            {"id": 6, "username": "bob", "full_name": "", "is_staff": false, "is_active": false}
        ],
        "total": 25,
        "page": 2,
        "per_page": 10
    }"#;
    let page = validate_response(ok_json(body), Backend::Legacy, 2).unwrap();

    assert_eq!(page.total_results, 25);
    assert_eq!((page.current_page, page.total_pages), (2, 3));
    assert!(page.has_previous && page.has_next);

    assert_eq!(page.results[0].title, "Ana Pérez");
    assert_eq!(page.results[0].url.as_deref(), Some("/manager/modify/5/"));
    assert_eq!(page.results[1].title, "bob");
    assert!(matches!(
        page.results[1].kind,
        RecordKind::User { is_active: false, .. }
    ));
}

#[test]
fn test_legacy_payload_without_metadata_is_single_page() {
    let body = r#"{"users": [{"id": 1, "full_name": "Ana"}]}"#;
    let page = validate_response(ok_json(body), Backend::Legacy, 1).unwrap();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_results, 1);
    assert!(!page.has_next);
}

#[test]
fn test_legacy_page_count_saturates() {
    let body = r#"{"users": [{"id": 1, "full_name": "Ana"}], "total": 10000000000, "page": 1, "per_page": 1}"#;
    let page = validate_response(ok_json(body), Backend::Legacy, 1).unwrap();
    assert_eq!(page.total_pages, u32::MAX);
    assert_eq!(page.total_results, 10_000_000_000);
    assert!(page.has_next);
}
