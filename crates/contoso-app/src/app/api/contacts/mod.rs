//! Contacts API: list, fetch and create contacts in the negotiated format.

use salvo::http::StatusCode;
use salvo::http::header::{HeaderValue, LOCATION};
use salvo::{Depot, Request, Response, Router, handler};

use contoso_core::constants::{CONTACTS_ROUTE_COMPONENT, CONTACTS_ROUTE_PREFIX};
use contoso_core::contact::{ContactId, NewContact};
use contoso_core::error::CoreError;
use contoso_core::types::{ContactPayload, PayloadKind};

use super::negotiate::{ApiPayload, ProblemDetails, negotiate, respond};
use crate::store_handler::get_store_from_depot;

async fn respond_problem(
    req: &Request,
    depot: &Depot,
    res: &mut Response,
    status: StatusCode,
    detail: impl Into<String>,
) {
    let payload = ApiPayload::from(ProblemDetails::new(status, detail));
    respond(req, depot, res, status, &payload).await;
}

/// ## Summary
/// GET /api/contacts - Every contact, ordered by last then first name.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn list_contacts(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get contact store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let contacts = store.list().await;
    tracing::debug!(count = contacts.len(), "Listing contacts");

    let payload = ApiPayload::from(ContactPayload::Sequence(contacts));
    respond(req, depot, res, StatusCode::OK, &payload).await;
}

/// ## Summary
/// GET /api/contacts/{id} - One contact.
///
/// ## Errors
/// Returns HTTP 404 with problem details if no contact has the id.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn get_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(id) = req.param::<String>("id") else {
        respond_problem(req, depot, res, StatusCode::BAD_REQUEST, "Missing contact id").await;
        return;
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get contact store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let id = ContactId::from(id);
    match store.get(&id).await {
        Some(contact) => {
            let payload = ApiPayload::from(ContactPayload::Single(contact));
            respond(req, depot, res, StatusCode::OK, &payload).await;
        }
        None => {
            tracing::debug!(%id, "Contact not found");
            respond_problem(
                req,
                depot,
                res,
                StatusCode::NOT_FOUND,
                format!("No contact with id {id}"),
            )
            .await;
        }
    }
}

/// ## Summary
/// POST /api/contacts - Create a contact from a JSON body.
///
/// ## Side Effects
/// Inserts the contact into the store. A missing id is generated. Nothing is
/// stored when the response cannot be negotiated.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid contact.
/// Returns HTTP 406 under strict matching if no formatter fits `Accept`.
/// Returns HTTP 409 if a contact with the same id exists.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn create_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let new_contact: NewContact = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse contact body");
            respond_problem(req, depot, res, StatusCode::BAD_REQUEST, "Invalid contact body")
                .await;
            return;
        }
    };

    match negotiate(req, depot, PayloadKind::Contact) {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!("Rejecting create that cannot be answered in an acceptable format");
            res.status_code(StatusCode::NOT_ACCEPTABLE);
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to negotiate response");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    }

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get contact store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let contact = match store.insert(new_contact.into_contact()).await {
        Ok(contact) => contact,
        Err(CoreError::Conflict(detail)) => {
            respond_problem(req, depot, res, StatusCode::CONFLICT, detail).await;
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert contact");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    tracing::info!(id = %contact.id, "Created contact");

    let location = contact_location(&contact.id);
    match HeaderValue::from_str(&location) {
        Ok(value) => {
            if res.add_header(LOCATION, value, true).is_err() {
                tracing::warn!(%location, "Failed to set Location header");
            }
        }
        Err(e) => tracing::warn!(error = %e, %location, "Location is not a valid header value"),
    }

    let payload = ApiPayload::from(ContactPayload::Single(contact));
    respond(req, depot, res, StatusCode::CREATED, &payload).await;
}

/// Path of a contact, with the id percent-encoded as one path segment.
fn contact_location(id: &ContactId) -> String {
    format!("{CONTACTS_ROUTE_PREFIX}/{}", urlencoding::encode(id.as_str()))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACTS_ROUTE_COMPONENT)
        .get(list_contacts)
        .post(create_contact)
        .push(Router::with_path("{id}").get(get_contact))
}
