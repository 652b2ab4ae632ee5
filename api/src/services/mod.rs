pub mod attendance_feed;
pub mod dashboard;
pub mod error;
pub mod object_storage;
