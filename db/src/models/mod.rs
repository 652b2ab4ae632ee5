pub mod attendance_record;
pub mod class;
pub mod class_professor;
pub mod class_student;
pub mod log;
pub mod session;
pub mod session_student;
pub mod student;
pub mod user;
