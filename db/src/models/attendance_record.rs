use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

/// A student's check-in evidence for one session.
///
/// `status` carries the manual-review state machine:
/// `NULL`/`""` (pending) -> `ESCALATED` -> back to pending, or `DISMISSED`
/// (terminal).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub session_id: String,
    pub check_in: DateTime<Utc>,
    pub portrait_url: String,
    pub portrait_captured: bool,
    /// Student id the face-recognition pipeline matched, when it disagrees
    /// with the claimed student.
    pub fr_identified_id: Option<String>,
    pub status: Option<String>,
    pub flagged: bool,
    pub video_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const STATUS_ESCALATED: &str = "ESCALATED";
pub const STATUS_DISMISSED: &str = "DISMISSED";

/// `NULL` and `""` both read as pending.
pub fn is_valid_status(status: Option<&str>) -> bool {
    matches!(status, None | Some("") | Some(STATUS_ESCALATED) | Some(STATUS_DISMISSED))
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::session::Entity",
        from = "Column::SessionId",
        to = "super::session::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new attendance record with a generated id. Parent session
    /// and student existence is validated by the caller before insertion.
    pub async fn create(
        db: &DatabaseConnection,
        student_id: &str,
        session_id: &str,
        check_in: DateTime<Utc>,
        portrait_url: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            student_id: Set(student_id.to_owned()),
            session_id: Set(session_id.to_owned()),
            check_in: Set(check_in),
            portrait_url: Set(portrait_url.to_owned()),
            portrait_captured: Set(!portrait_url.is_empty()),
            fr_identified_id: Set(None),
            status: Set(None),
            flagged: Set(false),
            video_key: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }
}
