//! 能力目标实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "competence_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject: String,
    pub grade_level: i32,
    pub area: String,
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_competence_goal(self) -> crate::models::competence_goals::entities::CompetenceGoal {
        crate::models::competence_goals::entities::CompetenceGoal {
            id: self.id,
            subject: self.subject,
            grade_level: self.grade_level,
            area: self.area,
            code: self.code,
            description: self.description,
        }
    }
}
