//! Request payloads shared by the class handlers.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[validate(length(min = 1, message = "Class name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_number: String,
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub room_number: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignStudentsRequest {
    pub student_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfessorAssignmentRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Class id is required"))]
    pub class_id: String,
}
