#![allow(unused_must_use)]
//! Tests for content negotiation across formatters and charsets.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn accept_charset_utf16_encodes_vcard() {
    TestRequest::get("/api/contacts/42")
        .accept("text/vcard")
        .accept_charset("utf-16")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-16le")
        .assert_body_encoded(&vcard_block("Jane", "Doe", "42"), TextEncoding::Utf16);
}

#[test_log::test(tokio::test)]
async fn unsupported_charset_falls_back_to_utf8() {
    TestRequest::get("/api/contacts/42")
        .accept("text/vcard")
        .accept_charset("iso-8859-1")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8")
        .assert_body_encoded(&vcard_block("Jane", "Doe", "42"), TextEncoding::Utf8);
}

#[test_log::test(tokio::test)]
async fn unmatched_accept_falls_back_to_json() {
    TestRequest::get("/api/contacts/42")
        .accept("image/png")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "application/json; charset=utf-8");
}

#[test_log::test(tokio::test)]
async fn unmatched_accept_is_406_when_strict() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    TestRequest::get("/api/contacts/42")
        .accept("image/png")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);
}

#[test_log::test(tokio::test)]
async fn strict_mode_still_serves_missing_accept() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    TestRequest::get("/api/contacts/42")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "application/json; charset=utf-8");
}

#[test_log::test(tokio::test)]
async fn higher_quality_range_wins() {
    TestRequest::get("/api/contacts/42")
        .accept("application/json;q=0.2, text/vcard;q=0.9")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8");
}

#[test_log::test(tokio::test)]
async fn accept_charset_wildcard_uses_utf8() {
    TestRequest::get("/api/contacts/42")
        .accept("text/vcard")
        .accept_charset("*")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8")
        .assert_body_encoded(&vcard_block("Jane", "Doe", "42"), TextEncoding::Utf8);
}

#[test_log::test(tokio::test)]
async fn strict_mode_serves_empty_accept() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    TestRequest::get("/api/contacts/42")
        .accept("")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "application/json; charset=utf-8");
}

#[test_log::test(tokio::test)]
async fn strict_mode_keeps_not_found_status() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    let res = TestRequest::get("/api/contacts/999")
        .accept("text/vcard")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header("Content-Type", "application/json; charset=utf-8");
    assert_eq!(res.json()["status"], 404);
}

#[test_log::test(tokio::test)]
async fn strict_mode_keeps_conflict_status() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    TestRequest::post("/api/contacts")
        .accept("text/vcard")
        .json_body(r#"{"id": "42", "firstName": "Jane", "lastName": "Doe"}"#)
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn strict_mode_rejects_create_before_storing() {
    let service = create_test_service_with("[api]\nstrict_accept = true", seed_contacts());

    let res = TestRequest::post("/api/contacts")
        .accept("image/png")
        .json_body(r#"{"id": "100", "firstName": "Ann", "lastName": "Lee"}"#)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);
    assert!(res.header("Location").is_none());

    TestRequest::get("/api/contacts/100")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
