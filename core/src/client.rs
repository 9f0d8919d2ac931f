//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the base URL and the default headers and carries
//! no mutable state between calls. Each operation is split into a `build_*`
//! method that validates its input and produces an `HttpRequest`, and a
//! `parse_*` method that consumes an `HttpResponse`. Input that fails
//! validation never becomes a request, so the remote error channel only ever
//! reports what the server said.
//!
//! Success bodies are decoded leniently: an empty list body is an empty
//! list, and an empty or unreadable create body is a default item. Any
//! status outside 2xx is a `RemoteError` whatever the body says.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, RemoteError, ValidationError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodoItem, TodoItem};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl TodoClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            default_headers: config.default_headers.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url(), None)
    }

    pub fn build_create_item(&self, title: Option<&str>) -> Result<HttpRequest, ApiError> {
        let title = validate_title(title)?;
        let payload = NewTodoItem {
            title: title.to_string(),
        };
        let body = serde_json::to_string(&payload).map_err(ApiError::Encode)?;
        let mut req = self.request(HttpMethod::Post, self.collection_url(), Some(body));
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        Ok(req)
    }

    pub fn build_toggle_item(&self, id: Option<&str>) -> Result<HttpRequest, ApiError> {
        let id = parse_id(id)?;
        Ok(self.request(HttpMethod::Patch, self.item_url(id), None))
    }

    pub fn build_delete_item(&self, id: Option<&str>) -> Result<HttpRequest, ApiError> {
        let id = parse_id(id)?;
        Ok(self.request(HttpMethod::Delete, self.item_url(id), None))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<TodoItem>> =
            serde_json::from_str(&response.body).map_err(ApiError::Decode)?;
        Ok(items.unwrap_or_default())
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response)?;
        match serde_json::from_str::<Option<TodoItem>>(&response.body) {
            Ok(item) => Ok(item.unwrap_or_default()),
            Err(e) => {
                debug!(error = %e, "create response body not decodable, using default item");
                Ok(TodoItem::default())
            }
        }
    }

    pub fn parse_toggle_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: self.default_headers.clone(),
            body,
        }
    }
}

/// Reject a missing or empty title.
pub fn validate_title(title: Option<&str>) -> Result<&str, ValidationError> {
    match title {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ValidationError::EmptyTitle),
    }
}

/// Parse an item id, accepting surrounding whitespace and a leading sign.
pub fn parse_id(id: Option<&str>) -> Result<i64, ValidationError> {
    id.and_then(|raw| raw.trim().parse().ok())
        .ok_or(ValidationError::NonNumericId)
}

/// Map any status outside 2xx to a `RemoteError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let body = if response.body.is_empty() {
        None
    } else {
        Some(response.body.clone())
    };
    Err(RemoteError {
        status: response.status,
        body,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new(&ClientConfig::new("http://localhost:5006/api/TodoItems")).unwrap()
    }

    #[test]
    fn new_rejects_missing_base_url() {
        let err = TodoClient::new(&ClientConfig::new("")).unwrap_err();
        assert_eq!(err, ConfigError::MissingBaseUrl);
    }

    #[test]
    fn new_rejects_base_url_with_query() {
        let err = TodoClient::new(&ClientConfig::new("http://h/api/TodoItems?api-version=2"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }), "got {err:?}");
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:5006/api/TodoItems/");
        assert!(req.body.is_none());
        assert_eq!(req.header("accept"), Some("application/json"));
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let req = client().build_create_item(Some("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:5006/api/TodoItems/");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk"}));
    }

    #[test]
    fn build_create_item_rejects_empty_title() {
        for title in [None, Some("")] {
            let err = client().build_create_item(title).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ValidationError::EmptyTitle)));
            assert_eq!(err.to_string(), "title must not be empty");
        }
    }

    #[test]
    fn build_create_item_keeps_whitespace_title() {
        let req = client().build_create_item(Some("  ")).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "  ");
    }

    #[test]
    fn build_toggle_item_produces_correct_request() {
        let req = client().build_toggle_item(Some("5")).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://localhost:5006/api/TodoItems/5");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_delete_item_produces_correct_request() {
        let req = client().build_delete_item(Some(" 12 ")).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:5006/api/TodoItems/12");
        assert!(req.body.is_none());
    }

    #[test]
    fn id_operations_reject_non_numeric() {
        for id in [None, Some(""), Some("abc"), Some("1.5"), Some("12a")] {
            let err = client().build_toggle_item(id).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ValidationError::NonNumericId)), "{id:?}");
            let err = client().build_delete_item(id).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ValidationError::NonNumericId)), "{id:?}");
        }
    }

    #[test]
    fn parse_id_accepts_sign() {
        assert_eq!(parse_id(Some("-3")), Ok(-3));
        assert_eq!(parse_id(Some("+8")), Ok(8));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new(&ClientConfig::new("http://localhost:3000/items/")).unwrap();
        assert_eq!(client.build_list_items().url, "http://localhost:3000/items/");
        assert_eq!(
            client.build_delete_item(Some("1")).unwrap().url,
            "http://localhost:3000/items/1"
        );
    }

    #[test]
    fn parse_list_items_success() {
        let response = HttpResponse::new(200, r#"[{"Id":1,"Title":"Test","IsDone":true}]"#);
        let items = client().parse_list_items(response).unwrap();
        assert_eq!(
            items,
            vec![TodoItem {
                id: 1,
                title: "Test".to_string(),
                is_done: true,
            }]
        );
    }

    #[test]
    fn parse_list_items_empty_body_is_empty_list() {
        for body in ["", "  \n", "null"] {
            let items = client().parse_list_items(HttpResponse::new(200, body)).unwrap();
            assert!(items.is_empty(), "{body:?}");
        }
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_create_item_success() {
        let response = HttpResponse::new(201, r#"{"Id":1,"Title":"Buy milk","IsDone":false}"#);
        let item = client().parse_create_item(response).unwrap();
        assert_eq!(
            item,
            TodoItem {
                id: 1,
                title: "Buy milk".to_string(),
                is_done: false,
            }
        );
    }

    #[test]
    fn parse_create_item_lenient_body() {
        for body in ["", "null", "<html>created</html>", "[1,2]"] {
            let item = client().parse_create_item(HttpResponse::new(201, body)).unwrap();
            assert_eq!(item, TodoItem::default(), "{body:?}");
        }
    }

    #[test]
    fn non_success_status_is_remote_error() {
        let c = client();
        for status in [301, 400, 404, 409, 500, 503] {
            let body = r#"[{"Id":1,"Title":"looks fine","IsDone":false}]"#;
            let err = c.parse_list_items(HttpResponse::new(status, body)).unwrap_err();
            assert_eq!(err.status(), Some(status));
            let err = c.parse_create_item(HttpResponse::new(status, body)).unwrap_err();
            assert_eq!(err.status(), Some(status));
            let err = c.parse_toggle_item(HttpResponse::new(status, "")).unwrap_err();
            assert_eq!(err.status(), Some(status));
            let err = c.parse_delete_item(HttpResponse::new(status, "")).unwrap_err();
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn remote_error_keeps_body() {
        let err = client()
            .parse_delete_item(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        match err {
            ApiError::Remote(remote) => {
                assert_eq!(remote.status, 500);
                assert_eq!(remote.body.as_deref(), Some("internal error"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn toggle_and_delete_ignore_success_body() {
        let c = client();
        assert!(c.parse_toggle_item(HttpResponse::new(204, "")).is_ok());
        assert!(c.parse_toggle_item(HttpResponse::new(200, "garbage")).is_ok());
        assert!(c.parse_delete_item(HttpResponse::new(200, "{}")).is_ok());
    }
}
