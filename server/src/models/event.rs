use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::non_blank;
use crate::utils::error::AppError;

pub const DEFAULT_CAPACITY: i64 = 100;

const MISSING_FIELDS: &str = "Title, event_type, event_date, and college_id are required";

#[derive(Debug, Default, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub college_id: Option<i64>,
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub event_date: String,
    pub college_id: i64,
    pub capacity: i64,
}

impl CreateEventRequest {
    pub fn validate(self) -> Result<NewEvent, AppError> {
        let (Some(title), Some(event_type), Some(event_date), Some(college_id)) = (
            self.title,
            self.event_type,
            self.event_date,
            self.college_id,
        ) else {
            return Err(AppError::ValidationError(MISSING_FIELDS.to_string()));
        };

        Ok(NewEvent {
            title,
            description: self.description.unwrap_or_default(),
            event_type,
            event_date,
            college_id,
            capacity: self.capacity.unwrap_or(DEFAULT_CAPACITY),
        })
    }
}

/// Raw `GET /api/events` query string.
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub college_id: Option<String>,
    pub event_type: Option<String>,
}

/// Listing filters; both are exact matches and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub college_id: Option<i64>,
    pub event_type: Option<String>,
}

impl EventQuery {
    pub fn into_filter(self) -> Result<EventFilter, AppError> {
        let college_id = non_blank(self.college_id)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    AppError::ValidationError("college_id must be an integer".to_string())
                })
            })
            .transpose()?;

        Ok(EventFilter {
            college_id,
            event_type: non_blank(self.event_type),
        })
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventListing {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub event_date: String,
    pub college_id: Option<i64>,
    pub capacity: i64,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub created_at: NaiveDateTime,
    pub college_name: Option<String>,
    pub registrations_count: i64,
}
