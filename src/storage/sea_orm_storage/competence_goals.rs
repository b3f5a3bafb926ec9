//! 能力目标存储操作

use super::SeaOrmStorage;
use crate::entity::competence_goals::{ActiveModel, Column, Entity as CompetenceGoals};
use crate::errors::{Result, VurderingError};
use crate::models::competence_goals::{
    entities::CompetenceGoal,
    requests::{CompetenceGoalListQuery, CreateCompetenceGoalRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建能力目标
    pub async fn create_competence_goal_impl(
        &self,
        req: CreateCompetenceGoalRequest,
    ) -> Result<CompetenceGoal> {
        let model = ActiveModel {
            subject: Set(req.subject),
            grade_level: Set(req.grade_level),
            area: Set(req.area),
            code: Set(req.code),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("创建能力目标失败: {e}")))?;

        Ok(result.into_competence_goal())
    }

    /// 通过 ID 获取能力目标
    pub async fn get_competence_goal_by_id_impl(&self, id: i64) -> Result<Option<CompetenceGoal>> {
        let result = CompetenceGoals::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询能力目标失败: {e}")))?;

        Ok(result.map(|m| m.into_competence_goal()))
    }

    /// 列出能力目标
    pub async fn list_competence_goals_impl(
        &self,
        query: CompetenceGoalListQuery,
    ) -> Result<Vec<CompetenceGoal>> {
        let mut select = CompetenceGoals::find();

        // 学科筛选
        if let Some(subject) = query.subject {
            select = select.filter(Column::Subject.eq(subject));
        }

        // 年级筛选
        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

        let goals = select
            .order_by_asc(Column::Area)
            .order_by_asc(Column::Code)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询能力目标列表失败: {e}"))
            })?;

        Ok(goals.into_iter().map(|m| m.into_competence_goal()).collect())
    }
}
