use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::schema::init_schema;
use super::store::{
    CampusStore, ALREADY_REGISTERED, ATTENDANCE_ALREADY_MARKED, EMAIL_TAKEN, EVENT_FULL,
    EVENT_NOT_FOUND, FEEDBACK_ALREADY_SUBMITTED, REGISTRATION_NOT_FOUND,
};
use crate::models::{
    EventFilter, EventListing, EventReport, NewCollege, NewEvent, NewFeedback, NewStudent,
    StudentReport,
};
use crate::utils::error::AppError;

const MAX_CONNECTIONS: u32 = 5;

const LIST_EVENTS: &str = "
    SELECT e.id, e.title, e.description, e.event_type, e.event_date, e.college_id,
           e.capacity, e.created_at, c.name AS college_name,
           COUNT(r.id) AS registrations_count
    FROM events e
    LEFT JOIN colleges c ON e.college_id = c.id
    LEFT JOIN registrations r ON e.id = r.event_id";

const EVENT_POPULARITY: &str = "
    SELECT e.id, e.title, e.event_type, e.event_date, c.name AS college_name,
           COUNT(r.id) AS total_registrations,
           COUNT(a.id) AS total_attendance,
           ROUND(AVG(f.rating), 2) AS avg_rating
    FROM events e
    LEFT JOIN colleges c ON e.college_id = c.id
    LEFT JOIN registrations r ON e.id = r.event_id
    LEFT JOIN attendance a ON r.id = a.registration_id
    LEFT JOIN feedback f ON r.id = f.registration_id
    GROUP BY e.id
    ORDER BY total_registrations DESC";

// A negative LIMIT is unbounded in SQLite.
const STUDENT_PARTICIPATION: &str = "
    SELECT s.id, s.name, s.email, c.name AS college_name,
           COUNT(r.id) AS total_registrations,
           COUNT(a.id) AS total_attendance,
           ROUND(AVG(f.rating), 2) AS avg_rating
    FROM students s
    LEFT JOIN colleges c ON s.college_id = c.id
    LEFT JOIN registrations r ON s.id = r.student_id
    LEFT JOIN attendance a ON r.id = a.registration_id
    LEFT JOIN feedback f ON r.id = f.registration_id
    GROUP BY s.id
    ORDER BY total_registrations DESC
    LIMIT ?";

/// [`CampusStore`] backed by a single SQLite file.
///
/// Foreign keys are declared in the schema but not enforced, so students and
/// events may reference colleges that do not exist.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `database_url` and applies
    /// the schema.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// A private in-memory database. The pool holds exactly one connection
    /// that never expires, since each SQLite memory connection is its own
    /// database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        init_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Maps a UNIQUE constraint failure to `Conflict`; anything else stays a
/// database error.
fn conflict_on_unique(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Conflict(message.to_string());
        }
    }

    AppError::DatabaseError(err)
}

#[async_trait]
impl CampusStore for SqliteStore {
    async fn create_college(&self, college: &NewCollege) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO colleges (name, location) VALUES (?, ?)")
            .bind(&college.name)
            .bind(&college.location)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn create_student(&self, student: &NewStudent) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO students (name, email, college_id) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.college_id)
            .execute(&self.pool)
            .await
            .map_err(|e| conflict_on_unique(e, EMAIL_TAKEN))?;

        Ok(result.last_insert_rowid())
    }

    async fn create_event(&self, event: &NewEvent) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO events (title, description, event_type, event_date, college_id, capacity)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.event_type)
        .bind(&event.event_date)
        .bind(event.college_id)
        .bind(event.capacity)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventListing>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new(LIST_EVENTS);
        let mut keyword = " WHERE ";

        if let Some(college_id) = filter.college_id {
            query.push(keyword).push("e.college_id = ").push_bind(college_id);
            keyword = " AND ";
        }
        if let Some(event_type) = &filter.event_type {
            query
                .push(keyword)
                .push("e.event_type = ")
                .push_bind(event_type.clone());
        }

        query.push(" GROUP BY e.id ORDER BY e.event_date, e.id");

        let events = query
            .build_query_as::<EventListing>()
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    async fn register_student(&self, event_id: i64, student_id: i64) -> Result<i64, AppError> {
        let mut conn = self.pool.acquire().await?;

        let seats: Option<(i64, i64)> = sqlx::query_as(
            "SELECT e.capacity, COUNT(r.id)
             FROM events e
             LEFT JOIN registrations r ON e.id = r.event_id
             WHERE e.id = ?
             GROUP BY e.id",
        )
        .bind(event_id)
        .fetch_optional(&mut *conn)
        .await?;

        let (capacity, registered) =
            seats.ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))?;
        if registered >= capacity {
            return Err(AppError::Capacity(EVENT_FULL.to_string()));
        }

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM registrations WHERE student_id = ? AND event_id = ?")
                .bind(student_id)
                .bind(event_id)
                .fetch_optional(&mut *conn)
                .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(ALREADY_REGISTERED.to_string()));
        }

        insert_registration(&mut conn, event_id, student_id).await
    }

    async fn mark_attendance(&self, registration_id: i64) -> Result<i64, AppError> {
        let mut conn = self.pool.acquire().await?;

        ensure_registration(&mut conn, registration_id).await?;

        let marked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM attendance WHERE registration_id = ?")
                .bind(registration_id)
                .fetch_optional(&mut *conn)
                .await?;
        if marked.is_some() {
            return Err(AppError::Conflict(ATTENDANCE_ALREADY_MARKED.to_string()));
        }

        insert_attendance(&mut conn, registration_id).await
    }

    async fn submit_feedback(
        &self,
        registration_id: i64,
        feedback: &NewFeedback,
    ) -> Result<i64, AppError> {
        let mut conn = self.pool.acquire().await?;

        ensure_registration(&mut conn, registration_id).await?;

        let submitted: Option<i64> =
            sqlx::query_scalar("SELECT id FROM feedback WHERE registration_id = ?")
                .bind(registration_id)
                .fetch_optional(&mut *conn)
                .await?;
        if submitted.is_some() {
            return Err(AppError::Conflict(FEEDBACK_ALREADY_SUBMITTED.to_string()));
        }

        insert_feedback(&mut conn, registration_id, feedback).await
    }

    async fn event_popularity(&self) -> Result<Vec<EventReport>, AppError> {
        let rows = sqlx::query_as::<_, EventReport>(EVENT_POPULARITY)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn student_participation(&self) -> Result<Vec<StudentReport>, AppError> {
        self.student_rows(-1).await
    }

    async fn top_students(&self, limit: u32) -> Result<Vec<StudentReport>, AppError> {
        self.student_rows(i64::from(limit)).await
    }
}

impl SqliteStore {
    async fn student_rows(&self, limit: i64) -> Result<Vec<StudentReport>, AppError> {
        let rows = sqlx::query_as::<_, StudentReport>(STUDENT_PARTICIPATION)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

async fn ensure_registration(
    conn: &mut sqlx::SqliteConnection,
    registration_id: i64,
) -> Result<(), AppError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM registrations WHERE id = ?")
        .bind(registration_id)
        .fetch_optional(&mut *conn)
        .await?;

    found
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(REGISTRATION_NOT_FOUND.to_string()))
}

/// Takes a seat only if one is still free. The seat count is evaluated inside
/// the insert itself, so a concurrent registration that took the last seat
/// turns this into a no-op.
async fn insert_registration(
    conn: &mut sqlx::SqliteConnection,
    event_id: i64,
    student_id: i64,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO registrations (student_id, event_id)
         SELECT ?, e.id FROM events e
         WHERE e.id = ?
           AND (SELECT COUNT(*) FROM registrations r WHERE r.event_id = e.id) < e.capacity",
    )
    .bind(student_id)
    .bind(event_id)
    .execute(&mut *conn)
    .await
    .map_err(|e| conflict_on_unique(e, ALREADY_REGISTERED))?;

    if result.rows_affected() == 0 {
        debug!(event_id, student_id, "Lost race for the last seat");
        return Err(AppError::Capacity(EVENT_FULL.to_string()));
    }

    Ok(result.last_insert_rowid())
}

async fn insert_attendance(
    conn: &mut sqlx::SqliteConnection,
    registration_id: i64,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO attendance (registration_id) VALUES (?)")
        .bind(registration_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| conflict_on_unique(e, ATTENDANCE_ALREADY_MARKED))?;

    Ok(result.last_insert_rowid())
}

async fn insert_feedback(
    conn: &mut sqlx::SqliteConnection,
    registration_id: i64,
    feedback: &NewFeedback,
) -> Result<i64, AppError> {
    let result =
        sqlx::query("INSERT INTO feedback (registration_id, rating, comments) VALUES (?, ?, ?)")
            .bind(registration_id)
            .bind(feedback.rating)
            .bind(&feedback.comments)
            .execute(&mut *conn)
            .await
            .map_err(|e| conflict_on_unique(e, FEEDBACK_ALREADY_SUBMITTED))?;

    Ok(result.last_insert_rowid())
}
