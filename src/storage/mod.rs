use std::sync::Arc;

use crate::models::{
    assessments::{
        entities::Assessment,
        requests::{AssessmentListQuery, CreateAssessmentRequest, UpdateAssessmentRequest},
    },
    class_groups::{
        entities::ClassGroup,
        requests::{ClassGroupListQuery, CreateClassGroupRequest},
    },
    competence_goals::{
        entities::CompetenceGoal,
        requests::{CompetenceGoalListQuery, CreateCompetenceGoalRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
    },
    tasks::{
        entities::Task,
        requests::{CreateTaskRequest, UpdateTaskRequest},
    },
    users::entities::{CreateUserRequest, User},
};

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 批量获取用户
    async fn list_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生，按姓名排序
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    // 列出教学班内的学生，按姓名排序
    async fn list_students_in_class_group(&self, class_group_id: i64) -> Result<Vec<Student>>;
    // 学生加入教学班，已是成员时返回 false
    async fn add_student_to_class_group(&self, class_group_id: i64, student_id: i64)
    -> Result<bool>;

    /// 教学班管理方法
    // 创建教学班
    async fn create_class_group(&self, class_group: CreateClassGroupRequest)
    -> Result<ClassGroup>;
    // 通过ID获取教学班
    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>>;
    // 列出教学班，按名称排序
    async fn list_class_groups(&self, query: ClassGroupListQuery) -> Result<Vec<ClassGroup>>;
    // 列出学生所在的教学班
    async fn list_class_groups_for_student(&self, student_id: i64) -> Result<Vec<ClassGroup>>;
    // 学生是否属于教学班
    async fn is_student_in_class_group(&self, class_group_id: i64, student_id: i64)
    -> Result<bool>;

    /// 评估管理方法
    // 创建评估
    async fn create_assessment(&self, assessment: CreateAssessmentRequest) -> Result<Assessment>;
    // 通过ID获取评估
    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>>;
    // 列出评估，按日期倒序
    async fn list_assessments(&self, query: AssessmentListQuery) -> Result<Vec<Assessment>>;
    // 更新评估
    async fn update_assessment(
        &self,
        id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>>;
    // 删除评估
    async fn delete_assessment(&self, id: i64) -> Result<bool>;

    /// 能力目标方法
    // 创建能力目标
    async fn create_competence_goal(
        &self,
        goal: CreateCompetenceGoalRequest,
    ) -> Result<CompetenceGoal>;
    // 通过ID获取能力目标
    async fn get_competence_goal_by_id(&self, id: i64) -> Result<Option<CompetenceGoal>>;
    // 列出能力目标，按领域和编码排序
    async fn list_competence_goals(
        &self,
        query: CompetenceGoalListQuery,
    ) -> Result<Vec<CompetenceGoal>>;

    /// 待办管理方法
    // 列出用户的待办
    async fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>>;
    // 创建待办
    async fn create_task(&self, owner_id: i64, task: CreateTaskRequest) -> Result<Task>;
    // 通过ID获取待办
    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>>;
    // 更新待办
    async fn update_task(&self, id: i64, update: UpdateTaskRequest) -> Result<Option<Task>>;
    // 删除待办
    async fn delete_task(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(&config.url, config).await?;
    Ok(Arc::new(storage))
}
