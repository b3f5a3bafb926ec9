use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeSet;

use super::DashboardService;
use crate::errors::VurderingError;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::dashboard::responses::{ContactTeacherResponse, ContactTeacherStudent};
use crate::models::students::requests::StudentListQuery;
use crate::models::users::entities::User;
use crate::services::aggregation::round2;

pub async fn list_contact_students(
    service: &DashboardService,
    request: &HttpRequest,
    user: &User,
) -> ActixResult<HttpResponse> {
    let class_name = user
        .contact_teacher_class
        .clone()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| VurderingError::authorization("You are not a contact teacher for any class"))?;

    let storage = service.get_storage(request)?;

    let students = storage
        .list_students(StudentListQuery {
            grade_level: None,
            home_class: Some(class_name.clone()),
        })
        .await?;

    let mut entries = Vec::with_capacity(students.len());
    for student in students {
        let subjects: BTreeSet<String> = storage
            .list_class_groups_for_student(student.id)
            .await?
            .into_iter()
            .map(|g| g.subject)
            .collect();

        let assessment_count = storage
            .list_assessments(AssessmentListQuery::for_student(student.id))
            .await?
            .len() as i64;

        // 只有已发布且有成绩的评估计入平均分
        let grades: Vec<i32> = storage
            .list_assessments(AssessmentListQuery {
                published_only: true,
                ..AssessmentListQuery::for_student(student.id)
            })
            .await?
            .into_iter()
            .filter_map(|a| a.grade)
            .collect();
        let average_grade = (!grades.is_empty())
            .then(|| round2(grades.iter().sum::<i32>() as f64 / grades.len() as f64));

        entries.push(ContactTeacherStudent {
            id: student.id,
            name: student.name,
            grade_level: student.grade_level,
            subjects: subjects.into_iter().collect(),
            average_grade,
            assessment_count,
        });
    }

    Ok(HttpResponse::Ok().json(ContactTeacherResponse {
        class_name,
        students: entries,
    }))
}
