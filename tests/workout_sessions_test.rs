mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use fitness_tracker::repositories::WorkoutSessionRepository;
use serde_json::json;
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_schedule_and_read_session() {
    let pool = common::setup_test_db();
    common::create_test_member(&pool, "Ana", 30, "F").await;
    let app = common::create_test_app(pool);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/workout_sessions",
            &json!({"member_id": 1, "date": "2024-01-05", "duration": 45, "calories_burned": 300}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Workout session scheduled successfully"})
    );

    let response = app
        .oneshot(common::empty_request("GET", "/workout_sessions/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"id": 1, "member_id": 1, "date": "2024-01-05", "duration": 45})
    );
}

#[tokio::test]
async fn test_get_unknown_session_returns_404() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::empty_request("GET", "/workout_sessions/3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Workout session not found"})
    );
}

#[tokio::test]
async fn test_schedule_session_with_bad_date_returns_400() {
    let pool = common::setup_test_db();
    common::create_test_member(&pool, "Ana", 30, "F").await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/workout_sessions",
            &json!({"member_id": 1, "date": "next tuesday", "duration": 45, "calories_burned": 300}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({"date": ["Not a valid date."]})
    );
}

#[tokio::test]
async fn test_schedule_session_missing_fields_returns_400() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/workout_sessions",
            &json!({"member_id": 1, "date": "2024-01-05"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert!(body.get("duration").is_some());
    assert!(body.get("calories_burned").is_some());
    assert!(body.get("member_id").is_none());
}

#[tokio::test]
async fn test_schedule_session_for_unknown_member_returns_500() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/workout_sessions",
            &json!({"member_id": 77, "date": "2024-01-05", "duration": 45, "calories_burned": 300}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Internal Server Error"})
    );

    let sessions = WorkoutSessionRepository::new(pool)
        .find_by_member(77)
        .await
        .unwrap();
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn test_update_session_replaces_fields() {
    let pool = common::setup_test_db();
    let member_id = common::create_test_member(&pool, "Ana", 30, "F").await;
    let id = common::create_test_session(&pool, member_id, date(2024, 1, 5), 45, 300).await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::json_request(
            "PUT",
            &format!("/workout_sessions/{}", id),
            &json!({"member_id": member_id, "date": "2024-01-06", "duration": 60, "calories_burned": 420}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Workout session details updated successfully"})
    );

    let session = WorkoutSessionRepository::new(pool)
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.date, date(2024, 1, 6));
    assert_eq!(session.duration, 60);
    assert_eq!(session.calories_burned, 420);
}

#[tokio::test]
async fn test_update_unknown_session_still_returns_200() {
    let pool = common::setup_test_db();
    let member_id = common::create_test_member(&pool, "Ana", 30, "F").await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/workout_sessions/500",
            &json!({"member_id": member_id, "date": "2024-01-06", "duration": 60, "calories_burned": 420}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_sessions_for_member() {
    let pool = common::setup_test_db();
    let ana = common::create_test_member(&pool, "Ana", 30, "F").await;
    let ben = common::create_test_member(&pool, "Ben", 41, "M").await;
    common::create_test_session(&pool, ana, date(2024, 1, 7), 30, 200).await;
    common::create_test_session(&pool, ben, date(2024, 1, 6), 50, 350).await;
    common::create_test_session(&pool, ana, date(2024, 1, 5), 45, 300).await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::empty_request(
            "GET",
            &format!("/workout_sessions/members/{}", ana),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!([
            {"id": 3, "member_id": ana, "date": "2024-01-05", "duration": 45},
            {"id": 1, "member_id": ana, "date": "2024-01-07", "duration": 30}
        ])
    );
}

#[tokio::test]
async fn test_list_sessions_for_member_without_sessions_is_empty() {
    let pool = common::setup_test_db();
    let member_id = common::create_test_member(&pool, "Ana", 30, "F").await;
    let app = common::create_test_app(pool);

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "GET",
            &format!("/workout_sessions/members/{}", member_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!([]));

    // Unknown members are not a 404 either
    let response = app
        .oneshot(common::empty_request("GET", "/workout_sessions/members/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_statement_failure_returns_generic_500() {
    let pool = common::setup_test_db();
    {
        let conn = pool.get().unwrap();
        conn.execute_batch("DROP TABLE WorkoutSessions;").unwrap();
    }
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::empty_request("GET", "/workout_sessions/members/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body, json!({"message": "Internal Server Error"}));
}

#[tokio::test]
async fn test_non_numeric_session_id_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    for uri in ["/workout_sessions/abc", "/workout_sessions/members/abc"] {
        let response = app
            .clone()
            .oneshot(common::empty_request("GET", uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            common::body_json(response).await,
            json!({"message": "Resource not found"})
        );
    }
}

#[tokio::test]
async fn test_list_sessions_without_connection_returns_500() {
    let (pool, _held) = common::exhausted_pool();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::empty_request("GET", "/workout_sessions/members/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Database connection failed"})
    );
}
