use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::source_record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "source_data")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub source_record_id: Uuid,
    pub question: String,
    pub answer: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SourceRecord,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SourceRecord => Entity::belongs_to(source_record::Entity)
                .from(Column::SourceRecordId)
                .to(source_record::Column::Id)
                .into(),
        }
    }
}

impl Related<source_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SourceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    source_record_id: Uuid,
    question: &str,
    answer: &str,
) -> Result<Model, errors::ModelError> {
    if question.trim().is_empty() {
        return Err(errors::ModelError::Validation("question required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        source_record_id: Set(source_record_id),
        question: Set(question.to_string()),
        answer: Set(answer.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
