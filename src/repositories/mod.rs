pub mod member_repo;
pub mod workout_session_repo;

pub use member_repo::MemberRepository;
pub use workout_session_repo::WorkoutSessionRepository;
