//! Turns one user action into one client call and a view outcome.
//!
//! Validation failures keep the user on the list page with an inline
//! message. Every other failure is logged and sent to the generic error
//! page; nothing is retried.

use serde::Deserialize;
use tracing::{error, info, warn};

use todo_core::{ApiError, TodoItem, TodoService, Transport};

/// The action selected by the `action` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    List,
    Create,
    Toggle,
    Delete,
}

impl Action {
    /// Case-insensitive; anything unrecognised is `List`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(a) if a.eq_ignore_ascii_case("create") => Action::Create,
            Some(a) if a.eq_ignore_ascii_case("toggle") || a.eq_ignore_ascii_case("switch") => {
                Action::Toggle
            }
            Some(a) if a.eq_ignore_ascii_case("delete") => Action::Delete,
            _ => Action::List,
        }
    }
}

/// Query parameters bound from the page request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
    pub id: Option<String>,
    #[serde(alias = "newTitle")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub items: Vec<TodoItem>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render the list page.
    Page(ListView),
    /// Mutation done; go back to the list.
    Redirect,
    /// Unrecoverable for this interaction.
    Failure,
}

pub async fn handle<T: Transport>(service: &TodoService<T>, query: &ActionQuery) -> Outcome {
    let action = Action::parse(query.action.as_deref());
    info!(?action, "handling action");

    let result = match action {
        Action::List => service.list_items().await.map(|items| {
            Outcome::Page(ListView { items, error: None })
        }),
        Action::Create => service
            .create_item(query.title.as_deref())
            .await
            .map(|_| Outcome::Redirect),
        Action::Toggle => service
            .toggle_item(query.id.as_deref())
            .await
            .map(|_| Outcome::Redirect),
        Action::Delete => service
            .delete_item(query.id.as_deref())
            .await
            .map(|_| Outcome::Redirect),
    };

    match result {
        Ok(outcome) => outcome,
        Err(ApiError::Validation(rejected)) => {
            warn!(?action, reason = %rejected, "rejected input");
            match service.list_items().await {
                Ok(items) => Outcome::Page(ListView {
                    items,
                    error: Some(rejected.to_string()),
                }),
                Err(e) => failure(action, &e),
            }
        }
        Err(e) => failure(action, &e),
    }
}

fn failure(action: Action, e: &ApiError) -> Outcome {
    error!(?action, kind = e.kind(), status = ?e.status(), error = %e, "action failed");
    Outcome::Failure
}
