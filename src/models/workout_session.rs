use chrono::NaiveDate;
use rusqlite::Row;
use serde::Serialize;
use serde_json::Value;

use super::FromSqliteRow;
use crate::validation::{self, Field, Schema, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutSession {
    pub id: i64,
    pub member_id: i64,
    pub date: NaiveDate,
    pub duration: i64,
    /// Stored and accepted on write, but not part of the read representation.
    #[serde(skip_serializing)]
    pub calories_burned: i64,
}

impl FromSqliteRow for WorkoutSession {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("session_id")?,
            member_id: row.get("member_id")?,
            date: row.get("date")?,
            duration: row.get("duration")?,
            calories_burned: row.get("calories_burned")?,
        })
    }
}

/// Body of `POST /workout_sessions` and `PUT /workout_sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSessionPayload {
    pub member_id: i64,
    pub date: NaiveDate,
    pub duration: i64,
    pub calories_burned: i64,
}

impl WorkoutSessionPayload {
    pub const SCHEMA: Schema = &[
        Field::integer("member_id"),
        Field::date("date"),
        Field::integer("duration"),
        Field::integer("calories_burned"),
    ];

    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validation::validate(payload, Self::SCHEMA)?;
        Ok(Self {
            member_id: fields.take_integer("member_id")?,
            date: fields.take_date("date")?,
            duration: fields.take_integer("duration")?,
            calories_burned: fields.take_integer("calories_burned")?,
        })
    }
}
