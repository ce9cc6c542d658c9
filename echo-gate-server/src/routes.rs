use axum::{extract::State, routing::get, Router};
use echo_gate_runner::InvocationHandler;

use crate::params::RequestParameters;

#[derive(Clone)]
struct AppState {
    handler: InvocationHandler,
}

/// Every path answers GET (and HEAD) and POST with the same handler
pub fn router(handler: InvocationHandler) -> Router {
    Router::new()
        .route("/", get(invoke).post(invoke))
        .route("/*path", get(invoke).post(invoke))
        .with_state(AppState { handler })
}

/// The response stays empty whatever the launch outcome
async fn invoke(State(state): State<AppState>, params: RequestParameters) {
    state.handler.handle(&params);
}
