use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct ClassGroup {
    // 教学班ID
    pub id: i64,
    // 名称，例如 "8A Matematikk"
    pub name: String,
    // 学科
    pub subject: String,
    // 年级
    pub grade_level: i32,
    // 任课教师ID
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
