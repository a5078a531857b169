use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create trainers table
        manager
            .create_table(
                Table::create()
                    .table(Trainers::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainers::Id))
                    .col(string(Trainers::Name))
                    .col(date(Trainers::Dob))
                    .col(string(Trainers::Aadhar).unique_key())
                    .col(string_len(Trainers::Gender, 10))
                    .col(text_null(Trainers::Address))
                    .col(string_null(Trainers::EducationalQualification))
                    .to_owned(),
            )
            .await?;

        // Create students table. Same shape as trainers, but a separate
        // table so the aadhar unique constraint is scoped per entity.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string(Students::Name))
                    .col(date(Students::Dob))
                    .col(string(Students::Aadhar).unique_key())
                    .col(string_len(Students::Gender, 10))
                    .col(text_null(Students::Address))
                    .col(string_null(Students::EducationalQualification))
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::Title))
                    .col(string_null(Courses::Thumbnail))
                    .col(string_null(Courses::RedirectionLink))
                    .col(string_len(Courses::Status, 20).default("Not Started"))
                    .to_owned(),
            )
            .await?;

        // Create sub_courses table
        manager
            .create_table(
                Table::create()
                    .table(SubCourses::Table)
                    .if_not_exists()
                    .col(pk_auto(SubCourses::Id))
                    .col(string(SubCourses::Title))
                    .col(text_null(SubCourses::Description))
                    .col(string_null(SubCourses::Link))
                    .col(string_len(SubCourses::Status, 20).default("Not Started"))
                    .col(integer(SubCourses::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_course_course")
                            .from(SubCourses::Table, SubCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop children before parents
        manager
            .drop_table(Table::drop().table(SubCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trainers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Trainers {
    Table,
    Id,
    Name,
    Dob,
    Aadhar,
    Gender,
    Address,
    EducationalQualification,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
    Dob,
    Aadhar,
    Gender,
    Address,
    EducationalQualification,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Thumbnail,
    RedirectionLink,
    Status,
}

#[derive(DeriveIden)]
enum SubCourses {
    Table,
    Id,
    Title,
    Description,
    Link,
    Status,
    CourseId,
}
