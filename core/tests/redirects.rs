//! Redirect answers from the remote API over real HTTP.
//!
//! # Design
//! A throwaway axum server answers the item routes with 3xx and serves a
//! success at the redirect targets. Every server hit is counted, so the
//! tests see both the error the service reports and whether a second
//! request went out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Redirect;
use axum::routing::{any, delete, get};
use axum::Router;

use todo_core::{ApiError, ClientConfig, TodoService};

type Hits = Arc<AtomicUsize>;

async fn start_redirecting_server() -> (String, Hits) {
    let hits = Hits::default();
    let app = Router::new()
        .route(
            "/items/",
            get(|State(hits): State<Hits>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/other")])
            }),
        )
        .route(
            "/items/{id}",
            delete(|State(hits): State<Hits>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Redirect::to("/gone")
            }),
        )
        .route(
            "/other",
            get(|State(hits): State<Hits>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "[]"
            }),
        )
        .route(
            "/gone",
            any(|State(hits): State<Hits>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }),
        )
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    (format!("http://{addr}/items"), hits)
}

#[tokio::test]
async fn see_other_on_delete_is_a_remote_error() {
    let (base_url, hits) = start_redirecting_server().await;
    let service = TodoService::connect(&ClientConfig::new(base_url)).unwrap();

    let err = service.delete_item(Some("5")).await.unwrap_err();
    assert!(matches!(err, ApiError::Remote(_)), "got {err:?}");
    assert_eq!(err.status(), Some(303));

    // The redirect target was never requested.
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn moved_permanently_on_list_is_a_remote_error() {
    let (base_url, hits) = start_redirecting_server().await;
    let service = TodoService::connect(&ClientConfig::new(base_url)).unwrap();

    let err = service.list_items().await.unwrap_err();
    assert!(matches!(err, ApiError::Remote(_)), "got {err:?}");
    assert_eq!(err.status(), Some(301));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
