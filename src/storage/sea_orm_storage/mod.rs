//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assessments;
mod class_groups;
mod competence_goals;
mod students;
mod tasks;
mod users;

use crate::config::DatabaseConfig;
use crate::errors::{Result, VurderingError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| VurderingError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 测试用的内存数据库，单连接保证数据共享
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        Self::connect(&config.url, &config).await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| VurderingError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库不支持 WAL
        if !url.contains(":memory:") {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| VurderingError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| VurderingError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(VurderingError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn list_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.list_users_by_ids_impl(ids).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_impl(query).await
    }

    async fn list_students_in_class_group(&self, class_group_id: i64) -> Result<Vec<Student>> {
        self.list_students_in_class_group_impl(class_group_id).await
    }

    async fn add_student_to_class_group(
        &self,
        class_group_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        self.add_student_to_class_group_impl(class_group_id, student_id)
            .await
    }

    // 教学班模块
    async fn create_class_group(
        &self,
        class_group: CreateClassGroupRequest,
    ) -> Result<ClassGroup> {
        self.create_class_group_impl(class_group).await
    }

    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        self.get_class_group_by_id_impl(id).await
    }

    async fn list_class_groups(&self, query: ClassGroupListQuery) -> Result<Vec<ClassGroup>> {
        self.list_class_groups_impl(query).await
    }

    async fn list_class_groups_for_student(&self, student_id: i64) -> Result<Vec<ClassGroup>> {
        self.list_class_groups_for_student_impl(student_id).await
    }

    async fn is_student_in_class_group(
        &self,
        class_group_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        self.is_student_in_class_group_impl(class_group_id, student_id)
            .await
    }

    // 评估模块
    async fn create_assessment(&self, assessment: CreateAssessmentRequest) -> Result<Assessment> {
        self.create_assessment_impl(assessment).await
    }

    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>> {
        self.get_assessment_by_id_impl(id).await
    }

    async fn list_assessments(&self, query: AssessmentListQuery) -> Result<Vec<Assessment>> {
        self.list_assessments_impl(query).await
    }

    async fn update_assessment(
        &self,
        id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        self.update_assessment_impl(id, update).await
    }

    async fn delete_assessment(&self, id: i64) -> Result<bool> {
        self.delete_assessment_impl(id).await
    }

    // 能力目标模块
    async fn create_competence_goal(
        &self,
        goal: CreateCompetenceGoalRequest,
    ) -> Result<CompetenceGoal> {
        self.create_competence_goal_impl(goal).await
    }

    async fn get_competence_goal_by_id(&self, id: i64) -> Result<Option<CompetenceGoal>> {
        self.get_competence_goal_by_id_impl(id).await
    }

    async fn list_competence_goals(
        &self,
        query: CompetenceGoalListQuery,
    ) -> Result<Vec<CompetenceGoal>> {
        self.list_competence_goals_impl(query).await
    }

    // 待办模块
    async fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>> {
        self.list_tasks_impl(owner_id).await
    }

    async fn create_task(&self, owner_id: i64, task: CreateTaskRequest) -> Result<Task> {
        self.create_task_impl(owner_id, task).await
    }

    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.get_task_by_id_impl(id).await
    }

    async fn update_task(&self, id: i64, update: UpdateTaskRequest) -> Result<Option<Task>> {
        self.update_task_impl(id, update).await
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        self.delete_task_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("vurdering.db").unwrap(),
            "sqlite://vurdering.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/vurdering").unwrap(),
            "postgres://localhost/vurdering"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }

    async fn seeded() -> (SeaOrmStorage, User, ClassGroup, Student) {
        use crate::models::users::entities::UserRole;

        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let teacher = storage
            .create_user(CreateUserRequest {
                name: "Kari Lærer".to_string(),
                email: "kari@skole.no".to_string(),
                role: UserRole::Teacher,
                contact_teacher_class: Some("8A".to_string()),
            })
            .await
            .unwrap();
        let group = storage
            .create_class_group(CreateClassGroupRequest {
                name: "8A Matematikk".to_string(),
                subject: "Matematikk".to_string(),
                grade_level: 8,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                name: "Ola".to_string(),
                grade_level: 8,
                home_class: Some("8A".to_string()),
            })
            .await
            .unwrap();
        (storage, teacher, group, student)
    }

    #[tokio::test]
    async fn test_membership_is_unique() {
        let (storage, _, group, student) = seeded().await;

        assert!(
            storage
                .add_student_to_class_group(group.id, student.id)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .add_student_to_class_group(group.id, student.id)
                .await
                .unwrap()
        );
        assert!(
            storage
                .is_student_in_class_group(group.id, student.id)
                .await
                .unwrap()
        );

        let members = storage.list_students_in_class_group(group.id).await.unwrap();
        assert_eq!(members.len(), 1);

        let groups = storage
            .list_class_groups_for_student(student.id)
            .await
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, group.id);
    }

    #[tokio::test]
    async fn test_assessments_listed_newest_first_and_nullable_update() {
        let (storage, _, group, student) = seeded().await;
        let now = chrono::Utc::now();

        for days in [30, 1, 10] {
            storage
                .create_assessment(CreateAssessmentRequest {
                    student_id: student.id,
                    class_group_id: group.id,
                    competence_goal_id: None,
                    date: Some(now - chrono::Duration::days(days)),
                    grade: Some(4),
                    is_published: days != 10,
                    description: Some("Prøve".to_string()),
                })
                .await
                .unwrap();
        }

        let all = storage
            .list_assessments(AssessmentListQuery::for_student(student.id))
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].date >= w[1].date));

        let published = storage
            .list_assessments(AssessmentListQuery {
                student_id: Some(student.id),
                published_only: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(published.len(), 2);

        let updated = storage
            .update_assessment(
                all[0].id,
                UpdateAssessmentRequest {
                    grade: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.grade, None);
        assert_eq!(updated.description.as_deref(), Some("Prøve"));

        assert!(storage.delete_assessment(all[0].id).await.unwrap());
        assert!(!storage.delete_assessment(all[0].id).await.unwrap());
        assert!(
            storage
                .update_assessment(all[0].id, UpdateAssessmentRequest::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_task_lifecycle() {
        use crate::models::tasks::entities::TaskPriority;

        let (storage, teacher, _, _) = seeded().await;
        let task = storage
            .create_task(
                teacher.id,
                CreateTaskRequest {
                    title: "Rett prøver".to_string(),
                    description: None,
                    priority: TaskPriority::High,
                    due_date: None,
                },
            )
            .await
            .unwrap();
        assert!(!task.done);

        let updated = storage
            .update_task(
                task.id,
                UpdateTaskRequest {
                    done: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.done);
        assert_eq!(updated.priority, TaskPriority::High);

        assert_eq!(storage.list_tasks(teacher.id).await.unwrap().len(), 1);
        assert!(storage.delete_task(task.id).await.unwrap());
        assert!(storage.get_task_by_id(task.id).await.unwrap().is_none());
    }
}
