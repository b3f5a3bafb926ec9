//! 评估存储操作

use super::SeaOrmStorage;
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::errors::{Result, VurderingError};
use crate::models::assessments::{
    entities::Assessment,
    requests::{AssessmentListQuery, CreateAssessmentRequest, UpdateAssessmentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建评估
    pub async fn create_assessment_impl(
        &self,
        req: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_group_id: Set(req.class_group_id),
            competence_goal_id: Set(req.competence_goal_id),
            date: Set(req.date.unwrap_or(now).timestamp()),
            grade: Set(req.grade),
            is_published: Set(req.is_published),
            description: Set(req.description),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("创建评估失败: {e}")))?;

        Ok(result.into_assessment())
    }

    /// 通过 ID 获取评估
    pub async fn get_assessment_by_id_impl(&self, id: i64) -> Result<Option<Assessment>> {
        let result = Assessments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询评估失败: {e}")))?;

        Ok(result.map(|m| m.into_assessment()))
    }

    /// 列出评估
    pub async fn list_assessments_impl(
        &self,
        query: AssessmentListQuery,
    ) -> Result<Vec<Assessment>> {
        let mut select = Assessments::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 教学班筛选
        if let Some(class_group_ids) = query.class_group_ids {
            if class_group_ids.is_empty() {
                return Ok(vec![]);
            }
            select = select.filter(Column::ClassGroupId.is_in(class_group_ids));
        }

        if query.published_only {
            select = select.filter(Column::IsPublished.eq(true));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let assessments = select
            .all(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询评估列表失败: {e}")))?;

        Ok(assessments.into_iter().map(|m| m.into_assessment()).collect())
    }

    /// 更新评估
    pub async fn update_assessment_impl(
        &self,
        id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        // 先检查评估是否存在
        let existing = self.get_assessment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }

        if let Some(competence_goal_id) = update.competence_goal_id {
            model.competence_goal_id = Set(competence_goal_id);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(date) = update.date {
            model.date = Set(date.timestamp());
        }

        if let Some(is_published) = update.is_published {
            model.is_published = Set(is_published);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("更新评估失败: {e}")))?;

        self.get_assessment_by_id_impl(id).await
    }

    /// 删除评估
    pub async fn delete_assessment_impl(&self, id: i64) -> Result<bool> {
        let result = Assessments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("删除评估失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
