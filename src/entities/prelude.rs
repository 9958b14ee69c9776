pub use super::tasks::Entity as Tasks;
pub use super::users::Entity as Users;
