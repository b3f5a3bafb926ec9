//! 评估实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_group_id: i64,
    pub competence_goal_id: Option<i64>,
    pub date: i64,
    pub grade: Option<i32>,
    pub is_published: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::ClassGroupId",
        to = "super::class_groups::Column::Id"
    )]
    ClassGroup,
    #[sea_orm(
        belongs_to = "super::competence_goals::Entity",
        from = "Column::CompetenceGoalId",
        to = "super::competence_goals::Column::Id"
    )]
    CompetenceGoal,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl Related<super::competence_goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetenceGoal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assessment(self) -> crate::models::assessments::entities::Assessment {
        crate::models::assessments::entities::Assessment {
            id: self.id,
            student_id: self.student_id,
            class_group_id: self.class_group_id,
            competence_goal_id: self.competence_goal_id,
            date: super::timestamp_to_datetime(self.date),
            grade: self.grade,
            is_published: self.is_published,
            description: self.description,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
