//! SeaORM Task repository implementation
//!
//! Holds the filtered pagination query builder behind the task-listing
//! endpoint: optional filters are folded into one predicate, and the count
//! query and the page query run against that same predicate inside a single
//! transaction so both observe one snapshot of the data.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::entities::{prelude::*, tasks};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{PageInfo, Task, TaskCreateRequest, TaskPage, TaskUpdateRequest};

pub const DEFAULT_PRIORITY: i32 = 3;
pub const DEFAULT_STATUS: &str = "To Do";

/// Filter and window parameters for the task listing query
///
/// `subject` and `status` match case-insensitively as substrings; `priority`
/// is parsed as an integer and compared exactly, and an unparsable value
/// drops the filter rather than failing the query. Empty strings mean
/// "no filter". All supplied filters must hold (conjunction).
#[derive(Debug, Clone)]
pub struct TaskListQuery {
    pub skip: u64,
    pub limit: u64,
    pub subject: String,
    pub priority: String,
    pub status: String,
}

impl Default for TaskListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            subject: String::new(),
            priority: String::new(),
            status: String::new(),
        }
    }
}

impl TaskListQuery {
    /// Fold the supplied filters into one predicate. The same condition is
    /// used for the count query and the page query, so a record counted is a
    /// record that can appear on some page.
    fn filter_condition(&self) -> Condition {
        let mut condition = Condition::all();

        if !self.subject.is_empty() {
            condition = condition.add(contains_ignore_case(tasks::Column::Subject, &self.subject));
        }
        if !self.priority.is_empty() {
            // An unparsable priority drops the filter, mirroring the lenient
            // behavior callers of the listing endpoint rely on.
            if let Ok(priority) = self.priority.trim().parse::<i32>() {
                condition = condition.add(tasks::Column::Priority.eq(priority));
            }
        }
        if !self.status.is_empty() {
            condition = condition.add(contains_ignore_case(tasks::Column::Status, &self.status));
        }

        condition
    }
}

/// Case-insensitive substring predicate, portable across backends:
/// `LOWER(column) LIKE '%needle%' ESCAPE '\'` with LIKE metacharacters in
/// the needle escaped so user input always means a literal substring.
fn contains_ignore_case(column: tasks::Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// SeaORM-based Task repository
#[derive(Clone)]
pub struct TaskSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl TaskSeaOrmRepository {
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Create a new task
    ///
    /// Referential integrity of `user_id` is enforced by the store's foreign
    /// key, not checked here.
    pub async fn create(&self, request: TaskCreateRequest) -> RepositoryResult<Task> {
        let now = Utc::now();

        let active_model = tasks::ActiveModel {
            user_id: Set(request.user_id),
            title: Set(request.title),
            subject: Set(request.subject),
            description: Set(request.description),
            due_date: Set(request.due_date),
            priority: Set(request.priority.unwrap_or(DEFAULT_PRIORITY)),
            status: Set(request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&*self.connection).await?;
        Ok(Self::to_domain(model))
    }

    /// Find task by ID
    pub async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Task>> {
        let model = Tasks::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Self::to_domain))
    }

    /// List one page of tasks matching the supplied filters
    ///
    /// Results are ordered by ascending ID (store-assigned, so this matches
    /// insertion order), making the page stable across repeated calls with
    /// identical data. Count and page run in one transaction against the
    /// identical predicate.
    pub async fn list(&self, query: &TaskListQuery) -> RepositoryResult<TaskPage> {
        if query.limit == 0 {
            return Err(RepositoryError::invalid_query(
                "limit",
                "page size must be a positive integer",
            ));
        }

        let condition = query.filter_condition();

        let txn = self.connection.begin().await?;
        let total_count = Tasks::find()
            .filter(condition.clone())
            .count(&txn)
            .await?;
        let models = Tasks::find()
            .filter(condition)
            .order_by_asc(tasks::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(TaskPage {
            tasks: models.into_iter().map(Self::to_domain).collect(),
            info: PageInfo::new(total_count, query.skip, query.limit),
        })
    }

    /// List all tasks whose due date falls on the given calendar day (UTC)
    pub async fn find_by_due_day(&self, day: NaiveDate) -> RepositoryResult<Vec<Task>> {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + chrono::Duration::days(1);

        let models = Tasks::find()
            .filter(tasks::Column::DueDate.gte(start))
            .filter(tasks::Column::DueDate.lt(end))
            .order_by_asc(tasks::Column::Id)
            .all(&*self.connection)
            .await?;
        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    /// Replace a task's fields
    ///
    /// `user_id`, `title`, `subject`, `description` and `due_date` are
    /// overwritten as given; an omitted `priority` or `status` keeps the
    /// stored value. `updated_at` is bumped on every call.
    pub async fn update(&self, id: i64, request: TaskUpdateRequest) -> RepositoryResult<Task> {
        let model = Tasks::find_by_id(id)
            .one(&*self.connection)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("tasks", "id", id))?;

        let mut active_model: tasks::ActiveModel = model.into();
        active_model.user_id = Set(request.user_id);
        active_model.title = Set(request.title);
        active_model.subject = Set(request.subject);
        active_model.description = Set(request.description);
        active_model.due_date = Set(request.due_date);
        if let Some(priority) = request.priority {
            active_model.priority = Set(priority);
        }
        if let Some(status) = request.status {
            active_model.status = Set(status);
        }
        active_model.updated_at = Set(Utc::now());

        let updated = active_model.update(&*self.connection).await?;
        Ok(Self::to_domain(updated))
    }

    /// Delete task by ID
    pub async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = Tasks::delete_by_id(id).exec(&*self.connection).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::record_not_found("tasks", "id", id));
        }
        Ok(())
    }

    fn to_domain(model: tasks::Model) -> Task {
        Task {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            subject: model.subject,
            description: model.description,
            due_date: model.due_date,
            priority: model.priority,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn default_query_has_no_filters() {
        let query = TaskListQuery::default();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 10);
        assert!(query.subject.is_empty());
        assert!(query.priority.is_empty());
        assert!(query.status.is_empty());
    }
}
