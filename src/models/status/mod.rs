//! 评估状态相关类型

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生评估状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub enum StudentStatus {
    Ok,
    Warning,
    Critical,
}

impl StudentStatus {
    /// 排序权重：CRITICAL 最前，OK 最后
    pub fn rank(self) -> u8 {
        match self {
            StudentStatus::Critical => 0,
            StudentStatus::Warning => 1,
            StudentStatus::Ok => 2,
        }
    }
}

// 状态汇总（单个学生）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub struct StatusSummary {
    pub status: StudentStatus,
    pub days_since_last: Option<i64>,
    pub count: i64,
}

// 各状态人数统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub struct StatusCounts {
    pub total: i64,
    pub ok_count: i64,
    pub warning_count: i64,
    pub critical_count: i64,
}

impl StatusCounts {
    pub fn record(&mut self, status: StudentStatus) {
        self.total += 1;
        match status {
            StudentStatus::Ok => self.ok_count += 1,
            StudentStatus::Warning => self.warning_count += 1,
            StudentStatus::Critical => self.critical_count += 1,
        }
    }
}

impl FromIterator<StudentStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = StudentStatus>>(iter: I) -> Self {
        let mut counts = StatusCounts::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}
