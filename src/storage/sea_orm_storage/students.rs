//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::class_group_students::{
    ActiveModel as MembershipActiveModel, Column as MembershipColumn,
    Entity as ClassGroupStudents,
};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, VurderingError};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            grade_level: Set(req.grade_level),
            home_class: Set(req.home_class),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let mut select = Students::find();

        // 年级筛选
        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

        // 主班级筛选
        if let Some(home_class) = query.home_class {
            select = select.filter(Column::HomeClass.eq(home_class));
        }

        let students = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出教学班内的学生
    pub async fn list_students_in_class_group_impl(
        &self,
        class_group_id: i64,
    ) -> Result<Vec<Student>> {
        let memberships = ClassGroupStudents::find()
            .filter(MembershipColumn::ClassGroupId.eq(class_group_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询教学班成员失败: {e}"))
            })?;

        let student_ids: Vec<i64> = memberships.iter().map(|m| m.student_id).collect();
        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let students = Students::find()
            .filter(Column::Id.is_in(student_ids))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 学生加入教学班
    pub async fn add_student_to_class_group_impl(
        &self,
        class_group_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        if self
            .is_student_in_class_group_impl(class_group_id, student_id)
            .await?
        {
            return Ok(false);
        }

        let model = MembershipActiveModel {
            class_group_id: Set(class_group_id),
            student_id: Set(student_id),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("加入教学班失败: {e}")))?;

        Ok(true)
    }

    /// 学生是否属于教学班
    pub async fn is_student_in_class_group_impl(
        &self,
        class_group_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        let count = ClassGroupStudents::find()
            .filter(MembershipColumn::ClassGroupId.eq(class_group_id))
            .filter(MembershipColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                VurderingError::database_operation(format!("查询教学班成员失败: {e}"))
            })?;

        Ok(count > 0)
    }
}
