//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub grade_level: i32,
    pub home_class: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_group_students::Entity")]
    ClassGroupStudents,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
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
    pub fn into_student(self) -> crate::models::students::entities::Student {
        crate::models::students::entities::Student {
            id: self.id,
            name: self.name,
            grade_level: self.grade_level,
            home_class: self.home_class,
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
