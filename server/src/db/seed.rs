use sqlx::SqlitePool;
use tracing::info;

const SAMPLE_STUDENTS: [(&str, &str); 5] = [
    ("John Doe", "john.doe@university.edu"),
    ("Jane Smith", "jane.smith@university.edu"),
    ("Bob Johnson", "bob.johnson@university.edu"),
    ("Alice Brown", "alice.brown@university.edu"),
    ("Charlie Wilson", "charlie.wilson@university.edu"),
];

// (title, description, event_type, event_date, capacity)
const SAMPLE_EVENTS: [(&str, &str, &str, &str, i64); 5] = [
    ("Tech Workshop", "Learn about latest technologies", "Workshop", "2024-12-15", 50),
    ("Hackathon 2024", "48-hour coding competition", "Hackathon", "2024-12-20", 100),
    ("AI Seminar", "Introduction to Artificial Intelligence", "Seminar", "2024-12-25", 75),
    ("Career Fair", "Meet potential employers", "Fest", "2025-01-10", 200),
    ("Web Development Bootcamp", "Hands-on web development", "Workshop", "2025-01-15", 30),
];

/// Loads demo data into an empty database. Returns `false` without touching
/// anything when at least one college already exists.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let colleges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM colleges")
        .fetch_one(pool)
        .await?;
    if colleges > 0 {
        info!(colleges, "Database already populated, skipping sample data");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let college_id = sqlx::query("INSERT INTO colleges (name, location) VALUES (?, ?)")
        .bind("Sample University")
        .bind("City Center")
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    for (name, email) in SAMPLE_STUDENTS {
        sqlx::query("INSERT OR IGNORE INTO students (name, email, college_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(college_id)
            .execute(&mut *tx)
            .await?;
    }

    for (title, description, event_type, event_date, capacity) in SAMPLE_EVENTS {
        sqlx::query(
            "INSERT INTO events (title, description, event_type, event_date, college_id, capacity)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(event_type)
        .bind(event_date)
        .bind(college_id)
        .bind(capacity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        college_id,
        students = SAMPLE_STUDENTS.len(),
        events = SAMPLE_EVENTS.len(),
        "Sample data loaded"
    );
    Ok(true)
}
