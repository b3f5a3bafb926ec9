use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::query::empty_string_as_none;

// 能力目标查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/competence_goal.ts")]
pub struct CompetenceGoalQueryParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub grade: Option<i32>,
}

// 能力目标查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CompetenceGoalListQuery {
    pub subject: Option<String>,
    pub grade_level: Option<i32>,
}

impl From<CompetenceGoalQueryParams> for CompetenceGoalListQuery {
    fn from(params: CompetenceGoalQueryParams) -> Self {
        Self {
            subject: params.subject,
            grade_level: params.grade,
        }
    }
}

// 创建能力目标（初始化数据使用）
#[derive(Debug, Clone)]
pub struct CreateCompetenceGoalRequest {
    pub subject: String,
    pub grade_level: i32,
    pub area: String,
    pub code: String,
    pub description: String,
}
