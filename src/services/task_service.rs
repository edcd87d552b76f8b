use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};

use crate::errors::{AppError, AppResult};
use crate::models::task::{self, Priority, SearchResult, Status};
use crate::models::{TaskFilter, TaskPayload};
use crate::services::{CategoryService, UserService};

const TASK_BATCH_SIZE: u64 = 10;

#[derive(Clone)]
pub struct TaskService {
    db: DatabaseConnection,
    users: UserService,
    categories: CategoryService,
}

impl TaskService {
    pub fn new(db: DatabaseConnection, users: UserService, categories: CategoryService) -> Self {
        Self {
            db,
            users,
            categories,
        }
    }

    // Creates a task on behalf of `creator_id`. The creation date is stamped
    // server-side.
    pub async fn create(&self, creator_id: i64, payload: TaskPayload) -> AppResult<task::Model> {
        let (description, status, priority) = self.validate(&payload, creator_id).await?;

        let task = task::ActiveModel {
            description: Set(description),
            status: Set(status),
            priority: Set(priority),
            assignee_id: Set(payload.assignee_id),
            creator_id: Set(creator_id),
            category_id: Set(payload.category_id),
            due_date: Set(payload.due_date),
            created_at: Set(Utc::now().date_naive()),
            ..Default::default()
        };

        Ok(task.insert(&self.db).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<task::Model> {
        task::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::TaskNotFound)
    }

    // Full-field replace-update. The replacement is validated against the same
    // rule set as create before anything is written, so a rejected update
    // leaves the stored task untouched. Validation failures surface as
    // TaskUpdateRejected to keep "edited into an invalid state" distinguishable
    // from "created invalid".
    pub async fn update(&self, id: i64, payload: TaskPayload) -> AppResult<task::Model> {
        let existing = self.get_by_id(id).await?;

        let (description, status, priority) = self
            .validate(&payload, existing.creator_id)
            .await
            .map_err(|e| match e {
                AppError::TaskInvalid => AppError::TaskUpdateRejected,
                other => other,
            })?;

        let mut task: task::ActiveModel = existing.into();
        task.description = Set(description);
        task.status = Set(status);
        task.priority = Set(priority);
        task.assignee_id = Set(payload.assignee_id);
        task.category_id = Set(payload.category_id);
        task.due_date = Set(payload.due_date);

        Ok(task.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = task::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::TaskNotFound);
        }
        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<task::Model>> {
        Ok(task::Entity::find().all(&self.db).await?)
    }

    // Runs the sparse filter template against the store and returns one page of
    // results plus the total match count. `offset` is floor-divided by the
    // fixed page size, so offsets that are not page multiples address the
    // containing page.
    pub async fn search(
        &self,
        filter: &TaskFilter,
        offset: u64,
        order_by: &str,
        ascending: bool,
    ) -> AppResult<SearchResult> {
        let query = apply_order(
            task::Entity::find().filter(build_condition(filter)),
            order_by,
            ascending,
        );

        let page = offset / TASK_BATCH_SIZE;
        let paginator = query.paginate(&self.db, TASK_BATCH_SIZE);
        let number_of_results = paginator.num_items().await?;
        let tasks = paginator.fetch_page(page).await?;

        tracing::debug!(
            "Task search returned {} of {} matches (page {})",
            tasks.len(),
            number_of_results,
            page
        );
        Ok(SearchResult {
            number_of_results,
            tasks,
        })
    }

    // Shared create/update rule set. Returns the required scalar fields once
    // they are known to be present.
    async fn validate(
        &self,
        payload: &TaskPayload,
        creator_id: i64,
    ) -> AppResult<(String, Status, Priority)> {
        let description = match payload.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => return Err(AppError::TaskInvalid),
        };
        let (status, priority) = match (payload.status, payload.priority) {
            (Some(s), Some(p)) => (s, p),
            _ => return Err(AppError::TaskInvalid),
        };

        if self.users.find_by_id(creator_id).await?.is_none() {
            return Err(AppError::TaskInvalid);
        }
        if let Some(assignee_id) = payload.assignee_id {
            if self.users.find_by_id(assignee_id).await?.is_none() {
                return Err(AppError::TaskInvalid);
            }
        }
        if let Some(category_id) = payload.category_id {
            if self.categories.find_by_id(category_id).await?.is_none() {
                return Err(AppError::TaskInvalid);
            }
        }

        Ok((description, status, priority))
    }
}

// Conjunction of equality predicates for every field set in the template, plus
// a case-insensitive substring match for a non-blank description. An empty
// template yields an unconstrained condition.
fn build_condition(filter: &TaskFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = filter.status {
        condition = condition.add(task::Column::Status.eq(status));
    }
    if let Some(priority) = filter.priority {
        condition = condition.add(task::Column::Priority.eq(priority));
    }
    if let Some(due_date) = filter.due_date {
        condition = condition.add(task::Column::DueDate.eq(due_date));
    }
    if let Some(assignee_id) = filter.assignee_id {
        condition = condition.add(task::Column::AssigneeId.eq(assignee_id));
    }
    if let Some(creator_id) = filter.creator_id {
        condition = condition.add(task::Column::CreatorId.eq(creator_id));
    }
    if let Some(category_id) = filter.category_id {
        condition = condition.add(task::Column::CategoryId.eq(category_id));
    }
    if let Some(description) = filter.description.as_deref() {
        if !description.trim().is_empty() {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(task::Column::Description)))
                    .like(format!("%{}%", description.to_lowercase())),
            );
        }
    }

    condition
}

// Sort fields outside the allow-list, including the empty string, silently fall
// back to id ascending and ignore the direction flag.
fn apply_order(query: Select<task::Entity>, order_by: &str, ascending: bool) -> Select<task::Entity> {
    let column = match order_by {
        "dueDate" => Some(task::Column::DueDate),
        "status" => Some(task::Column::Status),
        "priority" => Some(task::Column::Priority),
        _ => None,
    };

    match column {
        Some(col) if ascending => query.order_by_asc(col),
        Some(col) => query.order_by_desc(col),
        None => query.order_by_asc(task::Column::Id),
    }
}
