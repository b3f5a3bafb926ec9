//! 教学班存储操作

use super::SeaOrmStorage;
use crate::entity::class_group_students::{
    Column as MembershipColumn, Entity as ClassGroupStudents,
};
use crate::entity::class_groups::{ActiveModel, Column, Entity as ClassGroups};
use crate::errors::{Result, VurderingError};
use crate::models::class_groups::{
    entities::ClassGroup,
    requests::{ClassGroupListQuery, CreateClassGroupRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教学班
    pub async fn create_class_group_impl(
        &self,
        req: CreateClassGroupRequest,
    ) -> Result<ClassGroup> {
        let model = ActiveModel {
            name: Set(req.name),
            subject: Set(req.subject),
            grade_level: Set(req.grade_level),
            teacher_id: Set(req.teacher_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("创建教学班失败: {e}")))?;

        Ok(result.into_class_group())
    }

    /// 通过 ID 获取教学班
    pub async fn get_class_group_by_id_impl(&self, id: i64) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询教学班失败: {e}")))?;

        Ok(result.map(|m| m.into_class_group()))
    }

    /// 列出教学班
    pub async fn list_class_groups_impl(
        &self,
        query: ClassGroupListQuery,
    ) -> Result<Vec<ClassGroup>> {
        let mut select = ClassGroups::find();

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let groups = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询教学班列表失败: {e}"))
            })?;

        Ok(groups.into_iter().map(|m| m.into_class_group()).collect())
    }

    /// 列出学生所在的教学班
    pub async fn list_class_groups_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<ClassGroup>> {
        let memberships = ClassGroupStudents::find()
            .filter(MembershipColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询学生教学班关联失败: {e}"))
            })?;

        let class_group_ids: Vec<i64> = memberships.iter().map(|m| m.class_group_id).collect();
        if class_group_ids.is_empty() {
            return Ok(vec![]);
        }

        let groups = ClassGroups::find()
            .filter(Column::Id.is_in(class_group_ids))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询教学班列表失败: {e}"))
            })?;

        Ok(groups.into_iter().map(|m| m.into_class_group()).collect())
    }
}
