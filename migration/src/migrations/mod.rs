pub mod m202606010001_create_users;
pub mod m202606010002_create_classes;
pub mod m202606010003_create_students;
pub mod m202606010004_create_sessions;
pub mod m202606010005_create_attendance_records;
pub mod m202606010006_create_logs;
pub mod m202606010007_create_assignments;
