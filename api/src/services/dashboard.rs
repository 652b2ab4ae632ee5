//! Dashboard aggregation: composes class, assignment, session, and
//! attendance data for one class into a single view object.

use std::collections::HashMap;

use db::models::{attendance_record, class, class_professor, class_student, session, student};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::services::error::ServiceError;

#[derive(serde::Serialize)]
pub struct DashboardData {
    pub class: class::Model,
    pub professors: Vec<String>,
    pub students: Vec<student::Model>,
    pub sessions: Vec<session::Model>,
    /// session id -> attendance records for that session.
    pub attendance: HashMap<String, Vec<attendance_record::Model>>,
}

/// Builds the dashboard view for `class_id`.
///
/// Fails with `NotFound` when the class does not resolve, or when any
/// assigned student id no longer resolves to a student. No partial result
/// is returned on failure.
pub async fn build_dashboard_data(
    db: &DatabaseConnection,
    class_id: &str,
) -> Result<DashboardData, ServiceError> {
    let class = class::Entity::find_by_id(class_id.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Class", class_id))?;

    let professors = class_professor::Entity::find()
        .filter(class_professor::Column::ClassId.eq(class_id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.username)
        .collect();

    let student_ids: Vec<String> = class_student::Entity::find()
        .filter(class_student::Column::ClassId.eq(class_id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.student_id)
        .collect();

    let mut students = Vec::with_capacity(student_ids.len());
    for student_id in &student_ids {
        let student = student::Entity::find_by_id(student_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", student_id))?;
        students.push(student);
    }

    let sessions = session::Entity::find()
        .filter(session::Column::ClassId.eq(class_id))
        .order_by_asc(session::Column::StartTime)
        .all(db)
        .await?;

    let session_ids: Vec<String> = sessions.iter().map(|s| s.id.clone()).collect();
    let attendance = attendance_for_sessions(db, &session_ids).await?;

    Ok(DashboardData {
        class,
        professors,
        students,
        sessions,
        attendance,
    })
}

/// Fetches attendance for the given sessions, grouped by session id.
/// Sessions with no records simply have no entry in the map.
pub async fn attendance_for_sessions(
    db: &DatabaseConnection,
    session_ids: &[String],
) -> Result<HashMap<String, Vec<attendance_record::Model>>, ServiceError> {
    if session_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = attendance_record::Entity::find()
        .filter(attendance_record::Column::SessionId.is_in(session_ids.to_vec()))
        .all(db)
        .await?;

    let mut grouped: HashMap<String, Vec<attendance_record::Model>> = HashMap::new();
    for row in rows {
        grouped.entry(row.session_id.clone()).or_default().push(row);
    }
    Ok(grouped)
}
