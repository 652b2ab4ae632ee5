mod attendance_test;
mod auth_test;
mod classes_test;
mod dashboard_test;
mod logs_test;
mod storage_test;
mod students_test;
