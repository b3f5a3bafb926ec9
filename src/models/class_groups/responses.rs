use serde::Serialize;
use ts_rs::TS;

use super::entities::ClassGroup;
use crate::models::assessments::entities::Assessment;
use crate::models::status::{StatusCounts, StatusSummary};
use crate::models::students::entities::Student;
use crate::models::users::entities::UserSummary;

// 带学生姓名的评估记录
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct RecentAssessment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assessment: Assessment,
    pub student_name: String,
}

// 教学班详情响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct ClassGroupDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class_group: ClassGroup,
    pub teacher: Option<UserSummary>,
    pub students: Vec<Student>,
    pub recent_assessments: Vec<RecentAssessment>,
}

// 单个学生的状态行
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct StudentStatusEntry {
    pub id: i64,
    pub name: String,
    pub grade_level: i32,
    #[serde(flatten)]
    #[ts(flatten)]
    pub summary: StatusSummary,
}

// 教学班学生状态响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct StudentsStatusResponse {
    pub class_group: ClassGroup,
    pub students: Vec<StudentStatusEntry>,
    pub summary: StatusCounts,
}
