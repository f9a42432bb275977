//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API,
//! registering the people endpoints, the health probes, and the schemas of
//! every view-model and error payload they emit.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People service API",
        description = "HTTP interface for managing the in-memory people collection."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::add_person_form,
        crate::inbound::http::people::add_person,
        crate::inbound::http::people::show_person,
        crate::inbound::http::people::delete_person,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        crate::domain::Person,
        crate::domain::PersonId,
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::inbound::http::people::PeopleListView,
        crate::inbound::http::people::PersonDetailView,
        crate::inbound::http::people::PersonFormView,
        crate::inbound::http::people::PersonDeletedView,
    ))
)]
pub struct ApiDoc;
