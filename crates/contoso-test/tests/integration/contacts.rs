#![allow(unused_must_use)]
//! Tests for the contacts routes.
//!
//! Verifies listing, fetching and creating contacts through the full router.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn healthcheck_is_ok() {
    let res = TestRequest::get("/api/app/healthcheck")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.text(), "OK");
}

/// ## Summary
/// A single contact requested as vCard is one exact 2.1 block.
#[test_log::test(tokio::test)]
async fn get_contact_as_vcard() {
    let res = TestRequest::get("/api/contacts/42")
        .accept("text/vcard")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8");

    assert_eq!(res.text(), vcard_block("Jane", "Doe", "42"));
}

/// ## Summary
/// A list is the blocks of each contact back to back, in list order.
#[test_log::test(tokio::test)]
async fn list_contacts_as_vcard_concatenates_blocks() {
    let res = TestRequest::get("/api/contacts")
        .accept("text/vcard")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK);

    let expected = [
        vcard_block("Carson", "Alexander", "1"),
        vcard_block("Meredith", "Alonso", "2"),
        vcard_block("Jane", "Doe", "42"),
    ]
    .concat();
    assert_eq!(res.text(), expected);
}

#[test_log::test(tokio::test)]
async fn empty_list_as_vcard_has_empty_body() {
    let res = TestRequest::get("/api/contacts")
        .accept("text/vcard")
        .send(&create_test_service_with("", Vec::new()))
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8");

    assert!(res.body.is_empty());
}

#[test_log::test(tokio::test)]
async fn list_contacts_defaults_to_json() {
    let res = TestRequest::get("/api/contacts")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "application/json; charset=utf-8");

    let body = res.json();
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(body[2]["firstName"], "Jane");
}

/// ## Summary
/// Problem details are never rendered as vCard, even when only vCard is asked for.
#[test_log::test(tokio::test)]
async fn missing_contact_is_json_problem() {
    let res = TestRequest::get("/api/contacts/nope")
        .accept("text/vcard")
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header("Content-Type", "application/json; charset=utf-8");

    assert_eq!(res.json()["title"], "Not Found");
}

#[test_log::test(tokio::test)]
async fn created_contact_is_readable_as_vcard() {
    let service = create_test_service();

    TestRequest::post("/api/contacts")
        .json_body(r#"{"id":"100","firstName":"Ann","lastName":"Lee"}"#)
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_header("Location", "/api/contacts/100");

    let res = TestRequest::get("/api/contacts/100")
        .accept("text/vcard")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.text(), vcard_block("Ann", "Lee", "100"));
}

#[test_log::test(tokio::test)]
async fn location_of_reserved_id_leads_back_to_contact() {
    let service = create_test_service();

    let created = TestRequest::post("/api/contacts")
        .json_body(r#"{"id":"ann lee@example.com","firstName":"Ann","lastName":"Lee"}"#)
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_header("Location", "/api/contacts/ann%20lee%40example.com");

    let location = created.header("Location").unwrap_or_default().to_owned();
    let res = TestRequest::get(&location)
        .accept("text/vcard")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.text(), vcard_block("Ann", "Lee", "ann lee@example.com"));
}

#[test_log::test(tokio::test)]
async fn duplicate_create_is_conflict() {
    TestRequest::post("/api/contacts")
        .json_body(r#"{"id":"42","firstName":"Jane","lastName":"Doe"}"#)
        .send(&create_test_service())
        .await
        .assert_status(StatusCode::CONFLICT);
}

/// ## Summary
/// Reserved characters are escaped by default and passed through when escaping is off.
#[test_log::test(tokio::test)]
async fn escaping_follows_settings() {
    let contacts = vec![contoso_test::component::contact::Contact::new(
        "7", "Ann", "Smith;Jones",
    )];

    let escaped = TestRequest::get("/api/contacts/7")
        .accept("text/vcard")
        .send(&create_test_service_with("", contacts.clone()))
        .await;
    assert!(escaped.text().contains("N:Smith\\;Jones;Ann\r\n"));

    let literal = TestRequest::get("/api/contacts/7")
        .accept("text/vcard")
        .send(&create_test_service_with(
            "[vcard]\nescape_fields = false",
            contacts,
        ))
        .await;
    assert!(literal.text().contains("N:Smith;Jones;Ann\r\n"));
}
