pub mod courses;
pub mod health;
pub mod students;
pub mod subcourses;
pub mod trainers;
