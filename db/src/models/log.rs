use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

/// Append/delete-only audit trail entry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new log entry; the server assigns id and timestamp.
    pub async fn create(
        db: &DatabaseConnection,
        user_id: &str,
        action: &str,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            timestamp: Set(Utc::now()),
            user_id: Set(user_id.to_owned()),
            action: Set(action.to_owned()),
            entity_type: Set(entity_type.to_owned()),
            entity_id: Set(entity_id.to_owned()),
        };
        active.insert(db).await
    }
}
