//! Event CRUD endpoints.
//!
//! Mutations load the full collection, apply the change in memory and only
//! then rewrite the file, so a failed request never corrupts the stored
//! list.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;

use haru_core::{Event, EventForm};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// GET /api/events - List all events
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let store = state.store().await;
    let events = store.load()?;
    Ok(Json(EventsResponse { events }))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(form): Json<EventForm>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let store = state.store().await;
    let mut events = store.load()?;

    let event = Event::with_new_id(form);
    events.push(event.clone());
    store.save(&events)?;

    tracing::info!(id = %event.id, title = %event.title, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id - Replace an existing event's fields
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<EventForm>,
) -> Result<Json<Event>, AppError> {
    let store = state.store().await;
    let mut events = store.load()?;

    let Some(slot) = events.iter_mut().find(|e| e.id == id) else {
        return Err(AppError::NotFound(id));
    };
    *slot = Event::from_form(id, form);
    let updated = slot.clone();
    store.save(&events)?;

    tracing::info!(id = %updated.id, "event updated");
    Ok(Json(updated))
}

/// DELETE /api/events/:id - Remove an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let store = state.store().await;
    let mut events = store.load()?;

    let before = events.len();
    events.retain(|e| e.id != id);
    if events.len() == before {
        return Err(AppError::NotFound(id));
    }
    store.save(&events)?;

    tracing::info!(id = %id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use haru_core::store::EventStore;
    use tower::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.json"));
        let app = router().with_state(AppState::new(store));
        (app, dir)
    }

    fn form_json() -> String {
        serde_json::json!({
            "title": "팀 회의",
            "date": "2024-11-01",
            "startTime": "10:00",
            "endTime": "11:00",
            "description": "주간 팀 미팅",
            "location": "회의실 A",
            "category": "업무",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        })
        .to_string()
    }

    fn post_event(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/events")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (app, _dir) = test_app();

        let response = app.clone().oneshot(post_event(form_json())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["title"], "팀 회의");
        assert!(created["id"].is_string());

        let response = app
            .oneshot(Request::builder().uri("/api/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed["events"].as_array().unwrap().len(), 1);
        assert_eq!(listed["events"][0]["startTime"], "10:00");
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_replaces_fields() {
        let (app, _dir) = test_app();

        let response = app.clone().oneshot(post_event(form_json())).await.unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let mut updated: serde_json::Value = serde_json::from_str(&form_json()).unwrap();
        updated["title"] = "옮겨진 회의".into();
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/events/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(updated.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let event = body_json(response).await;
        assert_eq!(event["id"], id.as_str());
        assert_eq!(event["title"], "옮겨진 회의");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let (app, _dir) = test_app();

        let request = Request::builder()
            .method("PUT")
            .uri("/api/events/nope")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(form_json()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_delete_removes_event() {
        let (app, _dir) = test_app();

        let response = app.clone().oneshot(post_event(form_json())).await.unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/events/{}", id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::builder().uri("/api/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert!(listed["events"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_404() {
        let (app, _dir) = test_app();

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/events/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
