use sea_orm::entity::prelude::*;

/// Completion status tracked for courses and subcourses.
///
/// The three literals are stored verbatim; any state may move to any other
/// state through a client-issued update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ProgressStatus {
    #[sea_orm(string_value = "Not Started")]
    NotStarted,
    #[sea_orm(string_value = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

/// A top-level catalog entry with a single progress status.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Where the catalog entry points when opened.
    pub redirection_link: Option<String>,
    #[sea_orm(default_value = "Not Started")]
    pub status: ProgressStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A course owns its subcourses; deleting the course removes them.
    #[sea_orm(has_many = "super::sub_course::Entity")]
    SubCourse,
}

impl Related<super::sub_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
