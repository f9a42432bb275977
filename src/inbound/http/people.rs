//! People endpoints: the request pipeline for the person resource.
//!
//! ```text
//! GET  /people                 people index
//! GET  /people/add             empty add-person form
//! POST /people/add             validate payload, insert, redirect to index
//! GET  /people/{person_id}     person detail
//! POST /people/{person_id}/delete  remove person
//! ```
//!
//! Each flow resolves or validates its inputs into a typed domain outcome
//! before a view-model is produced. Rendering stays with the view layer,
//! which receives these payloads verbatim.

use actix_web::{get, http::header, post, web, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::ports::{PersonStore, PersonStoreError};
use crate::domain::{
    resolve_person, validate_person, Error, FieldErrors, Person, PersonId, ResolutionOutcome,
    ValidationOutcome,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// View-model for the people index.
#[derive(Debug, Serialize, ToSchema)]
pub struct PeopleListView {
    pub people: Vec<Person>,
}

/// View-model for a single person detail page.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonDetailView {
    pub person: Person,
}

/// View-model for the add-person form.
///
/// On a failed submission `person` echoes the original payload (not the
/// sanitized draft) so the user can correct mistakes without retyping
/// everything, and `errors` carries one message per offending field.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonFormView {
    #[schema(value_type = Object)]
    pub person: Value,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

/// View-model confirming a deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonDeletedView {
    #[schema(value_type = i64, example = 1)]
    pub id: PersonId,
}

fn store_failure(operation: &'static str, context: &str, err: &PersonStoreError) -> Error {
    error!(operation, context, error = %err, "person store failure");
    Error::internal("person store failure")
}

/// Shared pre-resolution: convert a path parameter into a person or an API
/// error with the common 400/404/500 mapping. View-one and delete both go
/// through here so their failure semantics cannot drift apart.
async fn require_person(raw_id: &str, store: &dyn PersonStore) -> Result<Person, Error> {
    match resolve_person(Some(raw_id), store).await {
        Ok(ResolutionOutcome::Found(person)) => Ok(person),
        Ok(ResolutionOutcome::NotFound) => {
            Err(Error::not_found(format!("no person with id {raw_id}")))
        }
        Ok(ResolutionOutcome::MalformedRequest) => Err(Error::invalid_request(
            "person id must be an integer",
        )
        .with_details(serde_json::json!({ "field": "personId", "value": raw_id }))),
        Err(err) => Err(store_failure("resolve", raw_id, &err)),
    }
}

/// List all people.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "People index", body = PeopleListView),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<PeopleListView>> {
    let people = state
        .people
        .list()
        .await
        .map_err(|err| store_failure("list", "people", &err))?;
    Ok(web::Json(PeopleListView { people }))
}

/// Render the empty add-person form.
#[utoipa::path(
    get,
    path = "/people/add",
    responses((status = 200, description = "Empty form", body = PersonFormView)),
    tags = ["people"],
    operation_id = "addPersonForm"
)]
#[get("/people/add")]
pub async fn add_person_form() -> web::Json<PersonFormView> {
    web::Json(PersonFormView {
        person: Value::Object(Map::new()),
        errors: FieldErrors::new(),
    })
}

/// Validate a submitted payload and insert the person.
///
/// A valid payload redirects to the people index. Field-level violations
/// are recovered locally: the form is re-rendered with the original values
/// and a field-keyed error map, never an HTTP error status.
#[utoipa::path(
    post,
    path = "/people/add",
    responses(
        (status = 303, description = "Person created; redirect to the people index"),
        (status = 200, description = "Form re-rendered with validation errors", body = PersonFormView),
        (status = 400, description = "Payload is not a key-value map", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "addPerson"
)]
#[post("/people/add")]
pub async fn add_person(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let submitted = payload.into_inner();
    let Some(fields) = submitted.as_object() else {
        return Err(Error::invalid_request("payload must be a key-value map"));
    };
    match validate_person(fields) {
        ValidationOutcome::Valid(draft) => {
            let inserted = state
                .people
                .insert(draft)
                .await
                .map_err(|err| store_failure("insert", &submitted.to_string(), &err))?;
            info!(id = %inserted.id, "person added");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/people"))
                .finish())
        }
        ValidationOutcome::Invalid(errors) => Ok(HttpResponse::Ok().json(PersonFormView {
            person: submitted,
            errors,
        })),
    }
}

/// Show one person.
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    params(("person_id" = String, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person detail", body = PersonDetailView),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such person", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "showPerson"
)]
#[get("/people/{person_id}")]
pub async fn show_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PersonDetailView>> {
    let person = require_person(path.as_str(), state.people.as_ref()).await?;
    Ok(web::Json(PersonDetailView { person }))
}

/// Delete one person, confirming with the removed identifier.
#[utoipa::path(
    post,
    path = "/people/{person_id}/delete",
    params(("person_id" = String, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = PersonDeletedView),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such person", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
#[post("/people/{person_id}/delete")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PersonDeletedView>> {
    let person = require_person(path.as_str(), state.people.as_ref()).await?;
    let removed = state
        .people
        .remove(person.id)
        .await
        .map_err(|err| store_failure("remove", path.as_str(), &err))?;
    // Resolution and removal are separate store calls; a concurrent delete
    // may win the race, which still surfaces as not-found.
    let removed = removed
        .ok_or_else(|| Error::not_found(format!("no person with id {}", path.as_str())))?;
    info!(id = %removed.id, "person removed");
    Ok(web::Json(PersonDeletedView { id: removed.id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockPersonStore;
    use crate::outbound::persistence::InMemoryPersonStore;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn test_app(
        store: Arc<dyn PersonStore>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        // `/people/add` must register ahead of `/people/{person_id}` so the
        // literal segment wins route matching.
        App::new()
            .app_data(web::Data::new(HttpState::new(store)))
            .service(list_people)
            .service(add_person_form)
            .service(add_person)
            .service(show_person)
            .service(delete_person)
    }

    async fn body_json(response: actix_web::dev::ServiceResponse) -> Value {
        let bytes = actix_test::read_body(response).await;
        serde_json::from_slice(&bytes).expect("response JSON")
    }

    #[actix_web::test]
    async fn list_returns_seeded_people() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::seeded()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people").to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value = body_json(response).await;
        let people = value
            .get("people")
            .and_then(Value::as_array)
            .expect("people array");
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].get("name"), Some(&json!("Sophie")));
        assert_eq!(people[1].get("name"), Some(&json!("Dan")));
    }

    #[actix_web::test]
    async fn show_person_returns_matching_detail() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::seeded()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/2").to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value = body_json(response).await;
        let person = value.get("person").expect("person field");
        assert_eq!(person.get("id"), Some(&json!(2)));
        assert_eq!(person.get("name"), Some(&json!("Dan")));
        assert_eq!(person.get("age").and_then(Value::as_f64), Some(42.0));
    }

    #[actix_web::test]
    async fn show_person_is_idempotent() {
        let store = Arc::new(InMemoryPersonStore::seeded());
        let app = actix_test::init_service(test_app(store.clone())).await;
        for _ in 0..2 {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri("/people/1").to_request(),
            )
            .await;
            assert!(response.status().is_success());
            let value = body_json(response).await;
            assert_eq!(
                value.get("person").and_then(|p| p.get("name")),
                Some(&json!("Sophie"))
            );
        }
        let people = store.list().await.expect("list");
        assert_eq!(people.len(), 2);
    }

    #[actix_web::test]
    async fn unknown_id_maps_to_404() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::seeded()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/9999").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value = body_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("not_found")));
    }

    #[rstest]
    #[case("/people/abc")]
    #[case("/people/4.5")]
    #[actix_web::test]
    async fn unparseable_id_maps_to_400(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::seeded()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("invalid_request")));
    }

    #[actix_web::test]
    async fn add_form_renders_an_empty_person() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::seeded()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/add").to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value = body_json(response).await;
        assert_eq!(value.get("person"), Some(&json!({})));
        assert!(value.get("errors").is_none());
    }

    #[actix_web::test]
    async fn valid_submission_inserts_and_redirects() {
        let store = Arc::new(InMemoryPersonStore::seeded());
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/add")
                .set_json(json!({ "name": "Ada", "age": 30, "hobby": "maths" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some("/people"));

        // Round-trip: the store gained exactly one person with a fresh id
        // and the extra key was stripped.
        let people = store.list().await.expect("list");
        assert_eq!(people.len(), 3);
        let detail = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/3").to_request(),
        )
        .await;
        assert!(detail.status().is_success());
        let value = body_json(detail).await;
        let person = value.get("person").expect("person field");
        assert_eq!(person.get("name"), Some(&json!("Ada")));
        assert_eq!(person.get("age").and_then(Value::as_f64), Some(30.0));
        assert!(person.get("hobby").is_none());
    }

    #[actix_web::test]
    async fn invalid_submission_re_renders_original_values() {
        let store = Arc::new(InMemoryPersonStore::seeded());
        let app = actix_test::init_service(test_app(store.clone())).await;

        let submitted = json!({ "name": "", "age": 30, "hobby": "maths" });
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/add")
                .set_json(submitted.clone())
                .to_request(),
        )
        .await;
        // Validation failures are recovered into the form, not an error status.
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value.get("person"), Some(&submitted));
        let errors = value.get("errors").expect("errors field");
        assert_eq!(errors.get("name"), Some(&json!("name must not be empty")));

        let people = store.list().await.expect("list");
        assert_eq!(people.len(), 2);
    }

    #[actix_web::test]
    async fn submission_missing_every_field_reports_each_violation() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::new()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/add")
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        let errors = value.get("errors").expect("errors field");
        assert!(errors.get("name").is_some());
        assert!(errors.get("age").is_some());
    }

    #[actix_web::test]
    async fn non_object_payload_maps_to_400() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryPersonStore::new()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/add")
                .set_json(json!([1, 2, 3]))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_confirms_with_the_removed_id() {
        let store = Arc::new(InMemoryPersonStore::seeded());
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/1/delete")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value = body_json(response).await;
        assert_eq!(value.get("id"), Some(&json!(1)));

        let detail = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/1").to_request(),
        )
        .await;
        assert_eq!(detail.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case("/people/9999/delete", StatusCode::NOT_FOUND)]
    #[case("/people/abc/delete", StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn delete_failures_map_like_view_one(
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let store = Arc::new(InMemoryPersonStore::seeded());
        let app = actix_test::init_service(test_app(store.clone())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), expected);

        let people = store.list().await.expect("list");
        assert_eq!(people.len(), 2);
    }

    #[actix_web::test]
    async fn store_failure_during_lookup_maps_to_redacted_500() {
        let mut mock = MockPersonStore::new();
        mock.expect_find_by_id()
            .returning(|_| Err(PersonStoreError::query("connection reset")));
        let app = actix_test::init_service(test_app(Arc::new(mock))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/people/1").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value = body_json(response).await;
        assert_eq!(value.get("message"), Some(&json!("Internal server error")));
        assert!(value.get("details").is_none());
    }

    #[actix_web::test]
    async fn store_failure_during_insert_maps_to_500() {
        let mut mock = MockPersonStore::new();
        mock.expect_insert()
            .returning(|_| Err(PersonStoreError::query("disk full")));
        let app = actix_test::init_service(test_app(Arc::new(mock))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/people/add")
                .set_json(json!({ "name": "Ada", "age": 30 }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
