use chrono::{DateTime, Utc};
use serde::Deserialize;

/// All fields are required; they are optional here so that an incomplete
/// body reads as a validation failure rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub class_id: Option<String>,
    pub professor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub class_id: Option<String>,
    pub professor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddAttendanceRequest {
    pub student_id: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub portrait_url: Option<String>,
}
