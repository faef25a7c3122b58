use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One word and its delimited synonym list
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "synonyms")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub word_id: i32,

    /// Head word
    pub word: String,

    /// Synonyms serialized as one delimited string
    #[sea_orm(column_type = "Text")]
    pub synonyms: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
