pub mod member;
pub mod workout_session;

use rusqlite::Row;

pub use member::{Member, MemberPayload};
pub use workout_session::{WorkoutSession, WorkoutSessionPayload};

/// Maps one result row onto a model, by column name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
