use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(description = "A registered user that can own tasks")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(description = "A to-do item owned by a user, with scheduling and status metadata")]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskCreateRequest {
    pub user_id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Defaults to 3 when omitted
    pub priority: Option<i32>,
    /// Defaults to "To Do" when omitted
    pub status: Option<String>,
}

/// Full-replace update payload. `user_id`, `title`, `subject`, `description`
/// and `due_date` always overwrite the stored values (including clearing the
/// optional ones); an omitted `priority` or `status` keeps the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskUpdateRequest {
    pub user_id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    pub status: Option<String>,
}

/// Position of a page within the full filtered result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    /// Number of records matching the filters, across all pages
    pub total_count: u64,
    /// Number of pages at `per_page` records each (0 when nothing matches)
    pub total_pages: u64,
    /// 1-based page the requested offset falls into
    pub current_page: u64,
    /// Requested page size
    pub per_page: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Compute page metadata for an offset/limit window over `total_count`
    /// matching records. A zero `limit` yields an empty zero-page result
    /// rather than dividing; callers are expected to reject it upstream.
    pub fn new(total_count: u64, skip: u64, limit: u64) -> Self {
        let (total_pages, current_page) = if limit > 0 {
            let total_pages = if total_count > 0 {
                total_count.div_ceil(limit)
            } else {
                0
            };
            (total_pages, skip / limit + 1)
        } else {
            (0, 0)
        };

        Self {
            total_count,
            total_pages,
            current_page,
            per_page: limit,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }
}

/// One page of tasks plus its position metadata
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_info_first_page() {
        let info = PageInfo::new(25, 0, 10);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.current_page, 1);
        assert!(info.has_next);
        assert!(!info.has_previous);
    }

    #[test]
    fn page_info_last_partial_page() {
        let info = PageInfo::new(25, 20, 10);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.current_page, 3);
        assert!(!info.has_next);
        assert!(info.has_previous);
    }

    #[test]
    fn page_info_exact_multiple() {
        let info = PageInfo::new(30, 10, 10);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.current_page, 2);
        assert!(info.has_next);
        assert!(info.has_previous);
    }

    #[test]
    fn page_info_empty_result_set() {
        let info = PageInfo::new(0, 0, 10);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.current_page, 1);
        assert!(!info.has_next);
        assert!(!info.has_previous);
    }

    #[test]
    fn page_info_offset_past_end() {
        let info = PageInfo::new(4, 40, 10);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.current_page, 5);
        assert!(!info.has_next);
        assert!(info.has_previous);
    }
}
