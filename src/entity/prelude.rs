//! 预导入模块，方便使用

pub use super::assessments::{
    ActiveModel as AssessmentActiveModel, Entity as Assessments, Model as AssessmentModel,
};
pub use super::class_group_students::{
    ActiveModel as ClassGroupStudentActiveModel, Entity as ClassGroupStudents,
    Model as ClassGroupStudentModel,
};
pub use super::class_groups::{
    ActiveModel as ClassGroupActiveModel, Entity as ClassGroups, Model as ClassGroupModel,
};
pub use super::competence_goals::{
    ActiveModel as CompetenceGoalActiveModel, Entity as CompetenceGoals,
    Model as CompetenceGoalModel,
};
pub use super::students::{ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel};
pub use super::tasks::{ActiveModel as TaskActiveModel, Entity as Tasks, Model as TaskModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
