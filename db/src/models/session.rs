use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

/// One concrete meeting instance of a class.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub class_id: String,
    pub professor_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new session with a generated id. The caller is responsible
    /// for checking that `class_id` resolves to an existing class.
    pub async fn create(
        db: &DatabaseConnection,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        class_id: &str,
        professor_id: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            start_time: Set(start_time),
            end_time: Set(end_time),
            class_id: Set(class_id.to_owned()),
            professor_id: Set(professor_id.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }
}
