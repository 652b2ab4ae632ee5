use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Reference image key/URL used by face recognition; may be empty.
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new student with a generated id. An absent image stores as "".
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        image: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            image: Set(image.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }
}
