use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::form;
use crate::source_data;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "source_record")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub form_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Form,
    SourceData,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Form => Entity::belongs_to(form::Entity)
                .from(Column::FormId)
                .to(form::Column::Id)
                .into(),
            Relation::SourceData => Entity::has_many(source_data::Entity).into(),
        }
    }
}

impl Related<form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl Related<source_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SourceData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, form_id: Uuid) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        form_id: Set(form_id),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
