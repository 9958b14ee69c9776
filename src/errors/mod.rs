//! Centralized error handling for the taskhub application
//!
//! This module provides an error handling system that unifies error types
//! across all application layers and keeps error reporting consistent.
//!
//! # Error Categories
//!
//! - **Database Errors**: connection failures, migrations, query execution
//! - **Repository Errors**: data access layer failures
//! - **Validation Errors**: input validation and business rule violations
//! - **Web Errors**: HTTP request/response handling issues

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;
