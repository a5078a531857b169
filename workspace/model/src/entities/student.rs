use sea_orm::entity::prelude::*;

pub use super::trainer::Gender;

/// Represents an enrolled student. Students carry the same personal record
/// shape as trainers but live in their own table, so `aadhar` uniqueness is
/// scoped to students only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub dob: Date,
    #[sea_orm(unique)]
    pub aadhar: String,
    pub gender: Gender,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub educational_qualification: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
