use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

use super::entities::CompetenceGoal;

// 能力目标列表响应：平铺列表 + 按领域分组
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/competence_goal.ts")]
pub struct CompetenceGoalListResponse {
    pub goals: Vec<CompetenceGoal>,
    pub by_area: BTreeMap<String, Vec<CompetenceGoal>>,
}

impl CompetenceGoalListResponse {
    pub fn from_goals(goals: Vec<CompetenceGoal>) -> Self {
        let mut by_area: BTreeMap<String, Vec<CompetenceGoal>> = BTreeMap::new();
        for goal in &goals {
            by_area
                .entry(goal.area.clone())
                .or_default()
                .push(goal.clone());
        }
        Self { goals, by_area }
    }
}
