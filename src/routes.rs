use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, members, workout_sessions};

pub fn create_router(
    health_state: health::HealthState,
    members_state: members::MembersState,
    sessions_state: workout_sessions::WorkoutSessionsState,
) -> Router {
    let members = Router::new()
        .route("/members", post(members::create))
        .route(
            "/members/{id}",
            get(members::show)
                .put(members::update)
                .delete(members::delete),
        )
        .with_state(members_state);

    let sessions = Router::new()
        .route("/workout_sessions", post(workout_sessions::create))
        .route(
            "/workout_sessions/{id}",
            get(workout_sessions::show).put(workout_sessions::update),
        )
        .route(
            "/workout_sessions/members/{member_id}",
            get(workout_sessions::list_for_member),
        )
        .with_state(sessions_state);

    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        .merge(members)
        .merge(sessions)
        .layer(TraceLayer::new_for_http())
}
