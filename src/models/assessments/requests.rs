use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::nullable::deserialize_nullable;
use crate::models::common::query::empty_string_as_none;

// 评估列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentQueryParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub class_group_id: Option<i64>,
}

// 评估列表查询参数（用于存储层），结果按日期倒序
#[derive(Debug, Clone, Default)]
pub struct AssessmentListQuery {
    pub student_id: Option<i64>,
    pub class_group_ids: Option<Vec<i64>>,
    pub published_only: bool,
    pub limit: Option<u64>,
}

impl AssessmentListQuery {
    pub fn for_student(student_id: i64) -> Self {
        Self {
            student_id: Some(student_id),
            ..Default::default()
        }
    }

    pub fn for_class_group(class_group_id: i64) -> Self {
        Self {
            class_group_ids: Some(vec![class_group_id]),
            ..Default::default()
        }
    }
}

// 创建评估请求
//
// date 省略时使用当前时间，is_published 默认 false
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentRequest {
    pub student_id: i64,
    pub class_group_id: i64,
    pub competence_goal_id: Option<i64>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub grade: Option<i32>,
    #[serde(default)]
    pub is_published: bool,
    pub description: Option<String>,
}

// 更新评估请求，grade / competenceGoalId / description 传 null 可清空
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentRequest {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub grade: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub competence_goal_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub is_published: Option<bool>,
}
