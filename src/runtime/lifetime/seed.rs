//! 演示数据
//!
//! 只在数据库没有任何用户时写入，重复启动不会重复创建。

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::class_groups::requests::CreateClassGroupRequest;
use crate::models::competence_goals::requests::CreateCompetenceGoalRequest;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::users::entities::{CreateUserRequest, User, UserRole};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

const DEMO_CLASS: &str = "8A";

const DEMO_STUDENTS: &[&str] = &[
    "Emma Hansen",
    "Noah Johansen",
    "Olivia Olsen",
    "Jakob Larsen",
    "Nora Andersen",
];

// (学科, 领域, 编码, 描述)
const DEMO_GOALS: &[(&str, &str, &str, &str)] = &[
    (
        "Matematikk",
        "Tall og algebra",
        "MAT08-01",
        "Utforske og beskrive regnestrategier med brøk og prosent",
    ),
    (
        "Matematikk",
        "Tall og algebra",
        "MAT08-02",
        "Løse likninger og ulikheter av første grad",
    ),
    (
        "Matematikk",
        "Geometri",
        "MAT08-03",
        "Beregne areal og omkrets av sammensatte figurer",
    ),
    (
        "Matematikk",
        "Statistikk",
        "MAT08-04",
        "Presentere data i tabeller og diagrammer",
    ),
    (
        "Norsk",
        "Muntlig kommunikasjon",
        "NOR08-01",
        "Lytte til og bygge videre på innspill fra andre",
    ),
    (
        "Norsk",
        "Skriving",
        "NOR08-02",
        "Skrive tekster med klar struktur og tilpasset formål",
    ),
];

/// 写入演示数据，已有用户时跳过
pub async fn seed_demo_data(storage: &dyn Storage, config: &AppConfig) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Database already has {} user(s), skipping demo seed", count);
        return Ok(());
    }

    info!("No users found in database, creating demo data...");

    let teacher = storage
        .create_user(CreateUserRequest {
            name: "Kari Nordmann".to_string(),
            email: "kari.nordmann@skole.no".to_string(),
            role: UserRole::Teacher,
            contact_teacher_class: Some(DEMO_CLASS.to_string()),
        })
        .await?;

    let principal = storage
        .create_user(CreateUserRequest {
            name: "Per Rektor".to_string(),
            email: "per.rektor@skole.no".to_string(),
            role: UserRole::Principal,
            contact_teacher_class: None,
        })
        .await?;

    let math = storage
        .create_class_group(CreateClassGroupRequest {
            name: format!("{DEMO_CLASS} Matematikk"),
            subject: "Matematikk".to_string(),
            grade_level: 8,
            teacher_id: teacher.id,
        })
        .await?;

    let norwegian = storage
        .create_class_group(CreateClassGroupRequest {
            name: format!("{DEMO_CLASS} Norsk"),
            subject: "Norsk".to_string(),
            grade_level: 8,
            teacher_id: teacher.id,
        })
        .await?;

    let mut students = Vec::with_capacity(DEMO_STUDENTS.len());
    for name in DEMO_STUDENTS {
        let student = storage
            .create_student(CreateStudentRequest {
                name: (*name).to_string(),
                grade_level: 8,
                home_class: Some(DEMO_CLASS.to_string()),
            })
            .await?;
        storage
            .add_student_to_class_group(math.id, student.id)
            .await?;
        storage
            .add_student_to_class_group(norwegian.id, student.id)
            .await?;
        students.push(student);
    }

    let mut math_goal_ids = Vec::new();
    for (subject, area, code, description) in DEMO_GOALS {
        let goal = storage
            .create_competence_goal(CreateCompetenceGoalRequest {
                subject: (*subject).to_string(),
                grade_level: 8,
                area: (*area).to_string(),
                code: (*code).to_string(),
                description: (*description).to_string(),
            })
            .await?;
        if goal.subject == math.subject {
            math_goal_ids.push(goal.id);
        }
    }

    // 不同学生得到不同的评估覆盖：最后一名学生没有评估
    let now = Utc::now();
    for (index, student) in students.iter().enumerate().take(students.len() - 1) {
        for round in 0..(students.len() - 1 - index) {
            storage
                .create_assessment(CreateAssessmentRequest {
                    student_id: student.id,
                    class_group_id: math.id,
                    competence_goal_id: math_goal_ids.get(round % math_goal_ids.len()).copied(),
                    date: Some(now - Duration::days((index as i64 + 1) * 12 + round as i64 * 7)),
                    grade: Some(((index + round) % 5 + 2) as i32),
                    is_published: round % 2 == 0,
                    description: Some(format!("Vurdering {}", round + 1)),
                })
                .await?;
        }
    }

    info!(
        "Demo data created: {} students, class groups {} and {}",
        students.len(),
        math.id,
        norwegian.id
    );

    if config.is_development() {
        log_demo_tokens(config, &[&teacher, &principal]);
    }

    Ok(())
}

// 开发环境下打印演示用户的访问令牌
fn log_demo_tokens(config: &AppConfig, users: &[&User]) {
    warn!("==========================================================");
    warn!("  DEMO ACCESS TOKENS (development only)");
    for user in users {
        match JwtUtils::generate_access_token(&config.jwt, user.id, &user.role.to_string()) {
            Ok(token) => warn!("  {} ({}): {}", user.name, user.role, token),
            Err(e) => warn!("  Failed to generate token for {}: {}", user.name, e),
        }
    }
    warn!("==========================================================");
}
