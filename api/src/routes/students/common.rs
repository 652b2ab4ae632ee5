use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "Student name is required"))]
    pub name: String,
    /// Reference image key/URL; absent stores as "".
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub image: Option<String>,
}
