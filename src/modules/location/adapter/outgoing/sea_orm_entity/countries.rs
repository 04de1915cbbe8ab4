use sea_orm::entity::prelude::*;

use crate::location::application::domain::entities::Region;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Region {
    fn from(m: Model) -> Self {
        Region {
            code: m.code,
            name: m.name,
        }
    }
}
