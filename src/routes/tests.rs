use actix_web::{App, http::StatusCode, test, web};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

use super::{configure_api_routes, not_found};
use crate::config::{JwtConfig, StatusPolicy};
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::class_groups::{entities::ClassGroup, requests::CreateClassGroupRequest};
use crate::models::competence_goals::{
    entities::CompetenceGoal, requests::CreateCompetenceGoalRequest,
};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::models::users::entities::{CreateUserRequest, User, UserRole};
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::jwt::JwtUtils;
use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

struct Fixture {
    storage: Arc<dyn Storage>,
    teacher: User,
    other_teacher: User,
    principal: User,
    parent: User,
    math: ClassGroup,
    anne: Student,
    bjorn: Student,
    cecilie: Student,
    outsider: Student,
    goals: Vec<CompetenceGoal>,
}

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "route-test-secret".to_string(),
        access_token_expiry: 60,
        leeway: 0,
    }
}

fn token_for(user: &User) -> String {
    JwtUtils::generate_access_token(&jwt_config(), user.id, &user.role.to_string()).unwrap()
}

fn bearer(user: &User) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user)))
}

async fn create_user(
    storage: &dyn Storage,
    name: &str,
    role: UserRole,
    contact_teacher_class: Option<&str>,
) -> User {
    storage
        .create_user(CreateUserRequest {
            name: name.to_string(),
            email: format!("{}@skole.no", name.to_lowercase().replace(' ', ".")),
            role,
            contact_teacher_class: contact_teacher_class.map(str::to_string),
        })
        .await
        .unwrap()
}

async fn create_student(storage: &dyn Storage, name: &str, home_class: &str) -> Student {
    storage
        .create_student(CreateStudentRequest {
            name: name.to_string(),
            grade_level: 8,
            home_class: Some(home_class.to_string()),
        })
        .await
        .unwrap()
}

async fn record(
    storage: &dyn Storage,
    student: &Student,
    group: &ClassGroup,
    goal: Option<&CompetenceGoal>,
    days_ago: i64,
    grade: Option<i32>,
) {
    storage
        .create_assessment(CreateAssessmentRequest {
            student_id: student.id,
            class_group_id: group.id,
            competence_goal_id: goal.map(|g| g.id),
            date: Some(Utc::now() - Duration::days(days_ago)),
            grade,
            is_published: true,
            description: None,
        })
        .await
        .unwrap();
}

// 三名学生分别处于 CRITICAL / WARNING / OK
async fn fixture() -> Fixture {
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await.unwrap());
    let s = storage.as_ref();

    let teacher = create_user(s, "Kari Lærer", UserRole::Teacher, Some("8A")).await;
    let other_teacher = create_user(s, "Ola Lærer", UserRole::Teacher, None).await;
    let principal = create_user(s, "Per Rektor", UserRole::Principal, None).await;
    let parent = create_user(s, "Forelder", UserRole::Parent, None).await;

    let math = s
        .create_class_group(CreateClassGroupRequest {
            name: "8A Matematikk".to_string(),
            subject: "Matematikk".to_string(),
            grade_level: 8,
            teacher_id: teacher.id,
        })
        .await
        .unwrap();
    s.create_class_group(CreateClassGroupRequest {
        name: "8B Norsk".to_string(),
        subject: "Norsk".to_string(),
        grade_level: 8,
        teacher_id: other_teacher.id,
    })
    .await
    .unwrap();

    let anne = create_student(s, "Anne", "8A").await;
    let bjorn = create_student(s, "Bjørn", "8A").await;
    let cecilie = create_student(s, "Cecilie", "8B").await;
    let outsider = create_student(s, "Dag", "8B").await;
    for student in [&anne, &bjorn, &cecilie] {
        s.add_student_to_class_group(math.id, student.id)
            .await
            .unwrap();
    }

    let mut goals = Vec::new();
    for (area, code) in [("Tall", "MAT-1"), ("Tall", "MAT-2"), ("Geometri", "MAT-3")] {
        goals.push(
            s.create_competence_goal(CreateCompetenceGoalRequest {
                subject: "Matematikk".to_string(),
                grade_level: 8,
                area: area.to_string(),
                code: code.to_string(),
                description: format!("Mål {code}"),
            })
            .await
            .unwrap(),
        );
    }

    record(s, &bjorn, &math, Some(&goals[0]), 5, Some(4)).await;
    record(s, &cecilie, &math, Some(&goals[0]), 3, Some(5)).await;
    record(s, &cecilie, &math, None, 10, Some(3)).await;

    Fixture {
        storage,
        teacher,
        other_teacher,
        principal,
        parent,
        math,
        anne,
        bjorn,
        cecilie,
        outsider,
        goals,
    }
}

macro_rules! test_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new(jwt_config()))
                .app_data(web::Data::new(StatusPolicy::default()))
                .configure(configure_api_routes)
                .default_service(web::to(not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_missing_or_invalid_token_is_unauthorized() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let forged = JwtUtils::generate_access_token(
        &JwtConfig {
            secret: "someone-else".to_string(),
            ..jwt_config()
        },
        f.teacher.id,
        "TEACHER",
    )
    .unwrap();
    let req = test::TestRequest::get()
        .uri("/api/students")
        .insert_header(("Authorization", format!("Bearer {forged}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_role_must_match_stored_role() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    // 家长持有声称 TEACHER 的令牌
    let token = JwtUtils::generate_access_token(&jwt_config(), f.parent.id, "TEACHER").unwrap();
    let req = test::TestRequest::get()
        .uri("/api/students")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_wrong_role_is_forbidden() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    for uri in [
        "/api/students".to_string(),
        format!("/api/class-groups/{}", f.math.id),
        "/api/rektor/class-groups".to_string(),
    ] {
        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(bearer(&f.parent))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/api/rektor/class-groups")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .insert_header(bearer(&f.principal))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_list_students_with_grade_filter() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/students?grade=8")
        .insert_header(bearer(&f.principal))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anne", "Bjørn", "Cecilie", "Dag"]);

    let req = test::TestRequest::get()
        .uri("/api/students?grade=9")
        .insert_header(bearer(&f.principal))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri("/api/students?grade=abc")
        .insert_header(bearer(&f.principal))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_student_detail() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/students/{}?classGroupId={}",
            f.bjorn.id, f.math.id
        ))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Bjørn");
    assert_eq!(body["classGroups"].as_array().unwrap().len(), 1);
    assert_eq!(body["assessments"].as_array().unwrap().len(), 1);
    assert_eq!(body["status"]["status"], "WARNING");
    assert_eq!(body["status"]["count"], 1);
    assert_eq!(body["status"]["daysSinceLast"], 5);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}", f.anne.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"]["status"], "CRITICAL");
    assert!(body["status"]["daysSinceLast"].is_null());

    // 不存在的限定教学班
    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}?classGroupId=9999", f.bjorn.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/students/9999")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/students/abc")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_competence_profile() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}/competence-profile", f.cecilie.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "classGroupId is required");

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/students/{}/competence-profile?classGroupId={}",
            f.cecilie.id, f.math.id
        ))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["subject"], "Matematikk");
    assert_eq!(body["assessmentCount"], 2);
    assert_eq!(body["averageGrade"], 4.0);
    assert_eq!(body["unlinkedAssessmentCount"], 1);

    let areas = body["areas"].as_array().unwrap();
    assert_eq!(areas[0]["area"], "Geometri");
    assert_eq!(areas[0]["coveragePercent"], 0.0);
    assert_eq!(areas[1]["area"], "Tall");
    assert_eq!(areas[1]["coveredGoalCount"], 1);
    assert_eq!(areas[1]["coveragePercent"], 50.0);

    // 没有评估的学生也返回画像
    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/students/{}/competence-profile?classGroupId={}",
            f.anne.id, f.math.id
        ))
        .insert_header(bearer(&f.principal))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["assessmentCount"], 0);
    assert!(body["averageGrade"].is_null());
    assert_eq!(body["areas"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/students/{}/competence-profile?classGroupId=9999",
            f.anne.id
        ))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_class_group_views() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/class-groups")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/class-groups")
        .insert_header(bearer(&f.principal))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/class-groups/{}", f.math.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["teacher"]["name"], "Kari Lærer");
    assert_eq!(body["students"].as_array().unwrap().len(), 3);
    let recent = body["recentAssessments"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["studentName"], "Cecilie");

    let req = test::TestRequest::get()
        .uri(&format!("/api/class-groups/{}/students-status", f.math.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let statuses: Vec<(&str, &str)> = body["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["name"].as_str().unwrap(), s["status"].as_str().unwrap()))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("Anne", "CRITICAL"),
            ("Bjørn", "WARNING"),
            ("Cecilie", "OK")
        ]
    );
    assert_eq!(body["summary"]["total"], 3);
    assert_eq!(body["summary"]["criticalCount"], 1);

    let req = test::TestRequest::get()
        .uri("/api/class-groups/9999/students-status")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_principal_overview_counts_add_up() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/rektor/class-groups")
        .insert_header(bearer(&f.principal))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 2);

    for group in groups {
        let total = group["okCount"].as_i64().unwrap()
            + group["warningCount"].as_i64().unwrap()
            + group["criticalCount"].as_i64().unwrap();
        assert_eq!(total, group["studentCount"].as_i64().unwrap());
    }

    let math = groups
        .iter()
        .find(|g| g["id"].as_i64() == Some(f.math.id))
        .unwrap();
    assert_eq!(math["teacherName"], "Kari Lærer");
    assert_eq!(math["studentCount"], 3);
    assert_eq!(math["okCount"], 1);
}

#[actix_web::test]
async fn test_teacher_dashboard_stats() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["classGroupCount"], 1);
    assert_eq!(body["studentCount"], 3);
    assert_eq!(body["assessmentCount"], 3);
    assert_eq!(body["warningCount"], 1);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .insert_header(bearer(&f.other_teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["classGroupCount"], 1);
    assert_eq!(body["studentCount"], 0);
    assert_eq!(body["warningCount"], 0);
}

#[actix_web::test]
async fn test_contact_teacher_view() {
    let f = fixture().await;

    // 未发布的成绩不计入平均分，但计入评估次数
    f.storage
        .create_assessment(CreateAssessmentRequest {
            student_id: f.bjorn.id,
            class_group_id: f.math.id,
            competence_goal_id: None,
            date: Some(Utc::now() - Duration::days(1)),
            grade: Some(1),
            is_published: false,
            description: None,
        })
        .await
        .unwrap();

    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/kontaktlaerer/elever")
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["className"], "8A");
    let students = body["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1]["name"], "Bjørn");
    assert_eq!(students[1]["subjects"], json!(["Matematikk"]));
    assert_eq!(students[1]["averageGrade"], 4.0);
    assert_eq!(students[1]["assessmentCount"], 2);
    assert_eq!(students[0]["assessmentCount"], 0);
    assert!(students[0]["averageGrade"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/kontaktlaerer/elever")
        .insert_header(bearer(&f.other_teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_competence_goals_for_any_role() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/competence-goals?subject=Matematikk&grade=8")
        .insert_header(bearer(&f.parent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["goals"].as_array().unwrap().len(), 3);
    assert_eq!(body["byArea"]["Tall"].as_array().unwrap().len(), 2);
    assert_eq!(body["byArea"]["Geometri"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/competence-goals?subject=Norsk")
        .insert_header(bearer(&f.parent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["goals"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_assessment_recording_rules() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let payload = |student_id: i64, grade: Option<i32>, goal_id: Option<i64>| {
        json!({
            "studentId": student_id,
            "classGroupId": f.math.id,
            "competenceGoalId": goal_id,
            "grade": grade,
            "isPublished": true,
        })
    };

    // 非任课教师
    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.other_teacher))
        .set_json(payload(f.anne.id, Some(4), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.principal))
        .set_json(payload(f.anne.id, Some(4), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.teacher))
        .set_json(payload(f.anne.id, Some(7), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.teacher))
        .set_json(payload(f.outsider.id, Some(4), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.teacher))
        .set_json(payload(f.anne.id, Some(4), Some(9999)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "studentId": f.anne.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/assessments")
        .insert_header(bearer(&f.teacher))
        .set_json(payload(f.anne.id, Some(5), Some(f.goals[2].id)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["grade"], 5);

    // grade 置空
    let req = test::TestRequest::patch()
        .uri(&format!("/api/assessments/{id}"))
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "grade": null }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["grade"].is_null());
    assert_eq!(body["competenceGoalId"], f.goals[2].id);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assessments/{id}"))
        .insert_header(bearer(&f.other_teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assessments/{id}"))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/assessments?studentId={}", f.anne.id))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_tasks_are_private_to_owner() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "title": "  Rett prøver  ", "priority": "HIGH" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Value = test::read_body_json(resp).await;
    let id = task["id"].as_i64().unwrap();
    assert_eq!(task["title"], "Rett prøver");
    assert_eq!(task["done"], false);

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "title": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 他人的待办视为不存在
    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{id}"))
        .insert_header(bearer(&f.other_teacher))
        .set_json(json!({ "done": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{id}"))
        .insert_header(bearer(&f.other_teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{id}"))
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "done": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["done"], true);
    assert_eq!(body["priority"], "HIGH");

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(bearer(&f.other_teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{id}"))
        .insert_header(bearer(&f.teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tasks/{id}"))
        .insert_header(bearer(&f.teacher))
        .set_json(json!({ "done": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_me_and_unknown_route() {
    let f = fixture().await;
    let app = test_app!(f.storage);

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(bearer(&f.parent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "PARENT");
    assert_eq!(body["id"], f.parent.id);

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
