use serde::Deserialize;

use crate::utils::error::AppError;

const MISSING_FIELDS: &str = "Name, email, and college_id are required";

#[derive(Debug, Default, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub college_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub college_id: i64,
}

impl CreateStudentRequest {
    pub fn validate(self) -> Result<NewStudent, AppError> {
        match (self.name, self.email, self.college_id) {
            (Some(name), Some(email), Some(college_id)) => Ok(NewStudent {
                name,
                email,
                college_id,
            }),
            _ => Err(AppError::ValidationError(MISSING_FIELDS.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_required() {
        let partial = CreateStudentRequest {
            name: Some("Ada".to_string()),
            email: Some("ada@tech.edu".to_string()),
            college_id: None,
        };

        let err = partial.validate().unwrap_err();
        assert_eq!(err.public_message(), MISSING_FIELDS);
    }

    #[test]
    fn test_valid_student() {
        let student = CreateStudentRequest {
            name: Some("Ada".to_string()),
            email: Some("ada@tech.edu".to_string()),
            college_id: Some(3),
        }
        .validate()
        .unwrap();

        assert_eq!(student.college_id, 3);
        assert_eq!(student.email, "ada@tech.edu");
    }

    #[test]
    fn test_empty_strings_count_as_present() {
        let student = CreateStudentRequest {
            name: Some(String::new()),
            email: Some(String::new()),
            college_id: Some(1),
        }
        .validate()
        .unwrap();

        assert_eq!(student.name, "");
        assert_eq!(student.email, "");
    }
}
