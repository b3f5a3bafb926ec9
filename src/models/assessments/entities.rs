use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 成绩等级范围（挪威 1–6 分制）
pub const MIN_GRADE: i32 = 1;
pub const MAX_GRADE: i32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    pub id: i64,
    pub student_id: i64,
    pub class_group_id: i64,
    pub competence_goal_id: Option<i64>,
    pub date: chrono::DateTime<chrono::Utc>,
    // None 表示尚未评分或免评（fritatt）
    pub grade: Option<i32>,
    pub is_published: bool,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
