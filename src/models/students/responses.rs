use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;
use crate::models::assessments::entities::Assessment;
use crate::models::class_groups::entities::ClassGroup;
use crate::models::status::StatusSummary;

// 学生详情响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub class_groups: Vec<ClassGroup>,
    pub assessments: Vec<Assessment>,
    pub status: StatusSummary,
}

// 能力目标领域汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct AreaSummary {
    pub area: String,
    pub goal_count: i64,
    pub covered_goal_count: i64,
    pub assessment_count: i64,
    pub graded_count: i64,
    pub average_grade: Option<f64>,
    pub coverage_percent: f64,
}

// 学生在教学班内的能力画像
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CompetenceProfile {
    pub student_id: i64,
    pub class_group_id: i64,
    pub subject: String,
    pub grade_level: i32,
    pub assessment_count: i64,
    pub graded_count: i64,
    pub average_grade: Option<f64>,
    pub unlinked_assessment_count: i64,
    pub areas: Vec<AreaSummary>,
}
