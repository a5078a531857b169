use sea_orm::entity::prelude::*;

/// Gender recorded for trainers and students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    Other,
}

/// Represents a trainer employed by the training organization.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trainers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub dob: Date,
    /// Government identity number; unique among trainers.
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
