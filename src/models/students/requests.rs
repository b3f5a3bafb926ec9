use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::query::empty_string_as_none;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub grade: Option<i32>,
}

// 带教学班范围的查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ClassGroupScopeParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[ts(optional)]
    pub class_group_id: Option<i64>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub grade_level: Option<i32>,
    pub home_class: Option<String>,
}

// 创建学生（初始化数据使用）
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub name: String,
    pub grade_level: i32,
    pub home_class: Option<String>,
}
