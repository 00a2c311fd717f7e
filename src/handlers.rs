use crate::catalog::{find_task, Task};
use crate::errors::AppError;
use crate::models::{CatalogResponse, ProgressResponse, ToggleRequest, ToggleResponse};
use crate::progress::Progress;
use crate::state::AppState;
use crate::store::ProgressStore;
use crate::ui::{render_index, IndexView};
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    #[serde(default)]
    pub celebrate: Option<String>,
}

impl IndexParams {
    /// Anything other than a recognised truthy value is ignored.
    fn celebrate(&self) -> bool {
        matches!(
            self.celebrate.as_deref().map(str::trim),
            Some("1" | "true" | "yes" | "on")
        )
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Html<String> {
    let (date, completed) = state.store.lock().await.load_day();

    let view = IndexView {
        date: &date,
        completed: &completed,
        progress: Progress::compute(&completed, state.tasks),
        tasks: state.tasks,
        roles: state.roles,
        celebrate: params.celebrate(),
    };
    Html(render_index(&view))
}

pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let (date, completed) = state.store.lock().await.load_day();
    Json(to_response(date, &completed, state.tasks))
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        tasks: state.tasks,
        roles: state.roles,
    })
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let response = apply_toggle(&state, payload.id.trim()).await?;
    Ok(Json(response))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let response = apply_toggle(&state, &id).await?;
    if response.celebrate {
        Ok(Redirect::to("/?celebrate=1"))
    } else {
        Ok(Redirect::to("/"))
    }
}

async fn apply_toggle(state: &AppState, id: &str) -> Result<ToggleResponse, AppError> {
    let Some(task) = find_task(state.tasks, id) else {
        return Err(AppError::bad_request(format!("unknown task '{id}'")));
    };

    let store = state.store.lock().await;
    let (date, current) = store.load_day();
    let next = ProgressStore::toggle(task.id, &current);
    store.save_for(&date, &next)?;

    let celebrate = next.contains(task.id);
    info!(task = task.id, done = celebrate, %date, "toggled task");

    Ok(ToggleResponse {
        progress: to_response(date, &next, state.tasks),
        celebrate,
    })
}

fn to_response(date: String, completed: &BTreeSet<String>, tasks: &[Task]) -> ProgressResponse {
    ProgressResponse::new(date, completed, Progress::compute(completed, tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, RollingClock};
    use crate::models::CompletionRecord;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::store::DEFAULT_STORAGE_KEY;
    use axum::http::{StatusCode, Uri};
    use std::sync::Arc;

    const THREE_DONE: &str =
        r#"{"steps":["testnet-swap","daily-claim","discord-activity"],"date":"2024-06-01"}"#;

    fn state_with(storage: Arc<MemoryStore>, clock: Arc<dyn crate::clock::Clock>) -> AppState {
        AppState::new(ProgressStore::new(storage, clock))
    }

    fn stored(storage: &MemoryStore) -> CompletionRecord {
        serde_json::from_str(&storage.get(DEFAULT_STORAGE_KEY).unwrap()).unwrap()
    }

    fn query(uri: &str) -> Query<IndexParams> {
        Query::try_from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn toggle_across_midnight_stays_on_one_day() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(DEFAULT_STORAGE_KEY, THREE_DONE).unwrap();
        let clock = Arc::new(RollingClock::new("2024-06-01", "2024-06-02"));
        let state = state_with(storage.clone(), clock);

        let Json(response) = toggle(
            State(state.clone()),
            Json(ToggleRequest { id: "twitter-engagement".into() }),
        )
        .await
        .unwrap();
        assert_eq!(response.progress.date, "2024-06-01");
        assert!(response.progress.is_fully_complete);
        assert_eq!(stored(&storage).date, "2024-06-01");

        let Json(next_day) = get_progress(State(state)).await;
        assert_eq!(next_day.date, "2024-06-02");
        assert!(next_day.completed.is_empty());
        assert_eq!(
            stored(&storage),
            CompletionRecord { steps: vec![], date: "2024-06-02".into() }
        );
    }

    #[tokio::test]
    async fn toggle_rejects_unknown_task() {
        let state = state_with(Arc::new(MemoryStore::new()), Arc::new(FixedClock::new("2024-06-01")));
        let err = toggle(State(state), Json(ToggleRequest { id: "artist".into() }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn toggle_reports_quota_failure() {
        let storage = Arc::new(MemoryStore::with_capacity(64));
        let state = state_with(storage, Arc::new(FixedClock::new("2024-06-01")));
        let err = toggle(State(state), Json(ToggleRequest { id: "twitter-engagement".into() }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INSUFFICIENT_STORAGE);
    }

    #[tokio::test]
    async fn index_ignores_unrecognised_celebrate_values() {
        let state = state_with(Arc::new(MemoryStore::new()), Arc::new(FixedClock::new("2024-06-01")));

        for (uri, shown) in [
            ("http://localhost/?celebrate=1", true),
            ("http://localhost/?celebrate=yes", true),
            ("http://localhost/?celebrate=true", true),
            ("http://localhost/?celebrate=nope", false),
            ("http://localhost/?celebrate=", false),
            ("http://localhost/", false),
        ] {
            let Html(page) = index(State(state.clone()), query(uri)).await;
            assert_eq!(page.contains(r#"class="celebration show""#), shown, "{uri}");
        }
    }
}
