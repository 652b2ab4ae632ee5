use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

/// A recurring course offering with a fixed room and meeting time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub room_number: String,
    /// Scheduled start time of the recurring meeting (display string, e.g. "08:30").
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new class with a generated id.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        room_number: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            room_number: Set(room_number.to_owned()),
            start_time: Set(start_time.to_owned()),
            end_time: Set(end_time.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }
}
