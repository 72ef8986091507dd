use serde::Deserialize;
use serde_json::Value;

use crate::utils::error::AppError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub student_id: Option<i64>,
}

impl RegisterRequest {
    pub fn student_id(&self) -> Result<i64, AppError> {
        self.student_id
            .ok_or_else(|| AppError::ValidationError("Student ID is required".to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackRequest {
    /// Any JSON value; anything other than a whole number in range is
    /// rejected by `validate()`.
    pub rating: Option<Value>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub rating: i64,
    pub comments: String,
}

impl FeedbackRequest {
    pub fn validate(self) -> Result<NewFeedback, AppError> {
        let rating = self
            .rating
            .ok_or_else(|| AppError::ValidationError("Rating is required".to_string()))?;

        let rating = whole_number(&rating)
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Rating must be between {MIN_RATING} and {MAX_RATING}"
                ))
            })?;

        Ok(NewFeedback {
            rating,
            comments: self.comments.unwrap_or_default(),
        })
    }
}

/// `5` and `5.0` both count; `4.5`, strings and booleans do not.
fn whole_number(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}
