//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod location_report_repo;
pub mod session_repo;
pub mod user_repo;
pub mod video_repo;
pub mod vote_repo;

pub use comment_repo::CommentRepo;
pub use location_report_repo::LocationReportRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
pub use vote_repo::VoteRepo;
