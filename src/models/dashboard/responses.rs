use serde::Serialize;
use ts_rs::TS;

// 教师首页统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherDashboardStats {
    pub class_group_count: i64,
    pub student_count: i64,
    pub assessment_count: i64,
    // 在本人教学班中没有任何评估的学生数
    pub warning_count: i64,
}

// 联系教师视图中的学生
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ContactTeacherStudent {
    pub id: i64,
    pub name: String,
    pub grade_level: i32,
    pub subjects: Vec<String>,
    // 已发布且已评分评估的平均分
    pub average_grade: Option<f64>,
    pub assessment_count: i64,
}

// 联系教师视图响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ContactTeacherResponse {
    pub class_name: String,
    pub students: Vec<ContactTeacherStudent>,
}

// 校长视图：单个教学班的状态统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ClassGroupOverview {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub grade_level: i32,
    pub teacher_name: Option<String>,
    pub student_count: i64,
    pub ok_count: i64,
    pub warning_count: i64,
    pub critical_count: i64,
}
