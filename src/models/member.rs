use rusqlite::Row;
use serde::Serialize;
use serde_json::Value;

use super::FromSqliteRow;
use crate::validation::{self, Field, Schema, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: String,
}

impl FromSqliteRow for Member {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("member_id")?,
            name: row.get("name")?,
            age: row.get("age")?,
            gender: row.get("gender")?,
        })
    }
}

/// Body of `POST /members` and `PUT /members/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPayload {
    pub name: String,
    pub age: i64,
    pub gender: String,
}

impl MemberPayload {
    pub const SCHEMA: Schema = &[
        Field::string("name"),
        Field::integer("age"),
        Field::string("gender"),
    ];

    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validation::validate(payload, Self::SCHEMA)?;
        Ok(Self {
            name: fields.take_string("name")?,
            age: fields.take_integer("age")?,
            gender: fields.take_string("gender")?,
        })
    }
}
