use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 能力目标（课程标准中的学习目标，静态参考数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/competence_goal.ts")]
pub struct CompetenceGoal {
    pub id: i64,
    pub subject: String,
    pub grade_level: i32,
    // 领域分组
    pub area: String,
    pub code: String,
    pub description: String,
}
