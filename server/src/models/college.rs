use serde::Deserialize;

use super::non_blank;
use crate::utils::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateCollegeRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollege {
    pub name: String,
    pub location: String,
}

impl CreateCollegeRequest {
    pub fn validate(self) -> Result<NewCollege, AppError> {
        let name = non_blank(self.name)
            .ok_or_else(|| AppError::ValidationError("College name is required".to_string()))?;

        Ok(NewCollege {
            name,
            location: self.location.unwrap_or_default(),
        })
    }
}
