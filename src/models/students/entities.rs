use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 年级
    pub grade_level: i32,
    // 所属行政班（联系教师视图按此筛选）
    pub home_class: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
