//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test};
use serde_json::Value;

use crate::Trace;
use crate::domain::Validator;
use crate::inbound::http::state::HttpState;

/// Build an app over fresh in-memory stores, wrapped in the trace middleware.
pub fn test_app(
    state: &HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let state = state.clone();
    App::new().wrap(Trace).configure(move |cfg| state.configure(cfg))
}

/// State over empty in-memory stores.
pub fn fresh_state() -> HttpState {
    HttpState::in_memory(Arc::new(Validator::new()))
}

/// Read a response body as JSON.
pub async fn read_json(response: ServiceResponse) -> Value {
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("response body is JSON")
}
