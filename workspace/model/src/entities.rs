//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the training administration service here:
//! personnel records (trainers and students) and the course catalog with
//! its per-module status tracking.

pub mod course;
pub mod student;
pub mod sub_course;
pub mod trainer;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::course::Entity as Course;
    pub use super::student::Entity as Student;
    pub use super::sub_course::Entity as SubCourse;
    pub use super::trainer::Entity as Trainer;
}
