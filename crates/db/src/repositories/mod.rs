//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod flow_repo;
pub mod flow_step_repo;
pub mod session_repo;
pub mod session_step_log_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use flow_repo::FlowRepo;
pub use flow_step_repo::FlowStepRepo;
pub use session_repo::SessionRepo;
pub use session_step_log_repo::SessionStepLogRepo;
pub use user_repo::UserRepo;
