use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use mcpay_core::invocation::{self, Invocation, InvocationContext, InvocationResponse};
use uuid::Uuid;

use crate::state::AppState;

/// `ANY /payment`: adapt an HTTP request to a checkout invocation.
///
/// Every request gets a fresh request id; its first 8 characters become the
/// order id prefix.
pub(super) async fn payment(state: State<AppState>, method: Method, body: Bytes) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let span = tracing::info_span!("checkout", request_id = %request_id, method = %method);
    let _enter = span.enter();

    let body = match std::str::from_utf8(&body) {
        Ok(body) => Some(body.to_owned()),
        Err(_) if method == Method::POST => return into_http(invocation::reject_invalid_utf8()),
        Err(_) => None,
    };
    let invocation = Invocation {
        method: method.as_str().to_owned(),
        body,
    };
    let context = InvocationContext { request_id };

    let response = invocation::handle(&invocation, &context, &state.providers);
    into_http(response)
}

fn into_http(response: InvocationResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder.body(Body::from(response.body)).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP response");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })
}
