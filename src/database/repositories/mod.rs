//! SeaORM repository implementations
//!
//! Repositories own all query construction. Handlers never touch the
//! connection directly; they go through a repository so every operation
//! receives its store handle explicitly.

pub mod task;
pub mod user;

pub use task::{TaskListQuery, TaskSeaOrmRepository};
pub use user::UserSeaOrmRepository;
