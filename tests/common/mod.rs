#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use serde_json::Value;
use std::time::Duration;

use fitness_tracker::db::{create_memory_pool, DbPool};
use fitness_tracker::handlers::{health, members, workout_sessions};
use fitness_tracker::migrations::run_migrations;
use fitness_tracker::models::{MemberPayload, WorkoutSessionPayload};
use fitness_tracker::repositories::{MemberRepository, WorkoutSessionRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

/// A pool whose only connection is already checked out. Further checkouts
/// time out quickly while the returned connection is held.
pub fn exhausted_pool() -> (DbPool, PooledConnection<SqliteConnectionManager>) {
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(50))
        .build(SqliteConnectionManager::memory())
        .expect("Failed to create test pool");
    let held = pool.get().expect("Failed to check out connection");
    (pool, held)
}

pub fn create_test_app(pool: DbPool) -> Router {
    let health_state = health::HealthState { pool: pool.clone() };
    let members_state = members::MembersState {
        member_repo: MemberRepository::new(pool.clone()),
    };
    let sessions_state = workout_sessions::WorkoutSessionsState {
        session_repo: WorkoutSessionRepository::new(pool),
    };

    fitness_tracker::routes::create_router(health_state, members_state, sessions_state)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// Test data creation helpers
pub async fn create_test_member(pool: &DbPool, name: &str, age: i64, gender: &str) -> i64 {
    let member_repo = MemberRepository::new(pool.clone());
    member_repo
        .create(&MemberPayload {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        })
        .await
        .unwrap()
}

pub async fn create_test_session(
    pool: &DbPool,
    member_id: i64,
    date: NaiveDate,
    duration: i64,
    calories_burned: i64,
) -> i64 {
    let session_repo = WorkoutSessionRepository::new(pool.clone());
    session_repo
        .create(&WorkoutSessionPayload {
            member_id,
            date,
            duration,
            calories_burned,
        })
        .await
        .unwrap()
}
