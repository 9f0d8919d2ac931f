//! HTTP surface of the front-end.
//!
//! # Design
//! One page at `/` reads the action from the query string and hands it to
//! the controller; `/error` is the generic failure page. Mutations answer
//! with a 303 so a reload does not repeat them.

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{TodoService, Transport};

use crate::controller::{self, ActionQuery, Outcome};
use crate::view;

pub struct AppState<T> {
    pub service: Arc<TodoService<T>>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

pub fn router<T: Transport + 'static>(service: TodoService<T>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let uri = request.uri().to_string();
        tracing::info_span!("http_request", method = ?request.method(), uri)
    });

    let state = AppState {
        service: Arc::new(service),
    };

    Router::new()
        .route("/", get(index::<T>))
        .route("/error", get(failure_page))
        .layer(trace_layer)
        .with_state(state)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn index<T: Transport + 'static>(
    State(state): State<AppState<T>>,
    Query(query): Query<ActionQuery>,
) -> Response {
    match controller::handle(&state.service, &query).await {
        Outcome::Page(list) => Html(view::render_list(&list)).into_response(),
        Outcome::Redirect => Redirect::to("/").into_response(),
        Outcome::Failure => Redirect::to("/error").into_response(),
    }
}

async fn failure_page() -> (StatusCode, Html<String>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(view::render_failure()))
}
