//! 教学班实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub grade_level: i32,
    pub teacher_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_group_students::Entity")]
    ClassGroupStudents,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_group_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroupStudents.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_group(self) -> crate::models::class_groups::entities::ClassGroup {
        crate::models::class_groups::entities::ClassGroup {
            id: self.id,
            name: self.name,
            subject: self.subject,
            grade_level: self.grade_level,
            teacher_id: self.teacher_id,
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
