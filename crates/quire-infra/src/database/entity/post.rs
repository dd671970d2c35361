//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use quire_core::DomainError;
use quire_core::domain::{Post, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from a stored row to the domain Post.
impl TryFrom<Model> for Post {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(model.id)?,
            title: model.title,
            content: model.content,
            category: model.category,
            tags: model.tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
