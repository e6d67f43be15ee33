//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        OrderDirection, OrderField, PersistedTaskData, Priority, Task, TaskId, TaskOrdering,
        TaskQuery, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let owned = query.clone();
        self.run_blocking(move |connection| {
            let statement = apply_ordering(apply_filters(&owned), owned.ordering());
            let rows = statement
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn apply_filters(query: &TaskQuery) -> tasks::BoxedQuery<'static, Pg> {
    let mut statement = tasks::table.into_boxed();
    if let Some(status) = query.status() {
        statement = statement.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(now) = query.overdue_at() {
        statement = statement
            .filter(tasks::due_date.lt(now))
            .filter(tasks::status.ne(TaskStatus::Completed.as_str()));
    }
    if let Some(term) = query.search() {
        let pattern = format!("%{}%", escape_like(term));
        statement = statement.filter(
            tasks::title
                .ilike(pattern.clone())
                .or(tasks::description.ilike(pattern).assume_not_null()),
        );
    }
    statement
}

fn apply_ordering(
    statement: tasks::BoxedQuery<'static, Pg>,
    ordering: TaskOrdering,
) -> tasks::BoxedQuery<'static, Pg> {
    use OrderDirection::{Ascending, Descending};

    let ordered = match (ordering.field(), ordering.direction()) {
        (OrderField::Title, Ascending) => statement.order(tasks::title.asc()),
        (OrderField::Title, Descending) => statement.order(tasks::title.desc()),
        (OrderField::Priority, Ascending) => statement.order(tasks::priority.asc()),
        (OrderField::Priority, Descending) => statement.order(tasks::priority.desc()),
        (OrderField::DueDate, Ascending) => statement.order(tasks::due_date.asc()),
        (OrderField::DueDate, Descending) => statement.order(tasks::due_date.desc()),
        (OrderField::CreatedAt, Ascending) => statement.order(tasks::created_at.asc()),
        (OrderField::CreatedAt, Descending) => statement.order(tasks::created_at.desc()),
        (OrderField::Status, Ascending) => statement.order(tasks::status.asc()),
        (OrderField::Status, Descending) => statement.order(tasks::status.desc()),
    };
    if ordering.field() == OrderField::CreatedAt {
        ordered
    } else {
        ordered.then_order_by(tasks::created_at.desc())
    }
}

/// Escapes `LIKE` metacharacters in a search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().value(),
        due_date: task.due_date(),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().value(),
        due_date: task.due_date(),
        completed_at: task.completed_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        status: persisted_status,
        priority: persisted_priority,
        due_date,
        completed_at,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = Priority::new(persisted_priority).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
        priority,
        due_date,
        completed_at,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
