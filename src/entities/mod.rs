//! SeaORM entity definitions for the taskhub schema

pub mod prelude;

pub mod tasks;
pub mod users;
