//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::people::{
    add_person, add_person_form, delete_person, list_people, show_person,
};
use crate::inbound::http::state::HttpState;

/// Assemble the application with all routes and shared state.
///
/// `/people/add` must register ahead of `/people/{person_id}` so the literal
/// segment wins route matching.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(list_people)
        .service(add_person_form)
        .service(add_person)
        .service(show_person)
        .service(delete_person)
        .service(live)
        .service(ready)
}

/// Bind the HTTP listener and return the running server future.
///
/// # Errors
/// Returns [`std::io::Error`] when the configured address cannot be bound.
pub fn run(
    config: &ServerConfig,
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(http_state.clone(), health_state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}
