use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
}

#[derive(Deserialize)]
pub struct NewTodoItem {
    #[serde(alias = "Title")]
    pub title: Option<String>,
}

#[derive(Default)]
pub struct Store {
    items: BTreeMap<i64, TodoItem>,
    last_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::default();
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", patch(toggle_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<TodoItem>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<NewTodoItem>,
) -> Result<(StatusCode, Json<TodoItem>), StatusCode> {
    let title = input
        .title
        .filter(|t| !t.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut store = db.write().await;
    store.last_id += 1;
    let item = TodoItem {
        id: store.last_id,
        title,
        is_done: false,
    };
    store.items.insert(item.id, item.clone());
    info!(id = item.id, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn toggle_item(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.items.get_mut(&id) {
        Some(item) => {
            item.is_done = !item.is_done;
            info!(id, is_done = item.is_done, "toggled item");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(_) => {
            info!(id, "deleted item");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
