pub mod assessments;
pub mod class_groups;
pub mod common;
pub mod competence_goals;
pub mod dashboard;
pub mod status;
pub mod students;
pub mod tasks;
pub mod users;

pub use common::response::ErrorBody;
