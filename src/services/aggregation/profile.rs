use std::collections::{BTreeMap, HashMap, HashSet};

use super::round2;
use crate::models::assessments::entities::Assessment;
use crate::models::class_groups::entities::ClassGroup;
use crate::models::competence_goals::entities::CompetenceGoal;
use crate::models::students::responses::{AreaSummary, CompetenceProfile};

#[derive(Default)]
struct AreaAccumulator {
    goal_count: i64,
    covered_goals: HashSet<i64>,
    assessment_count: i64,
    grades: Vec<i32>,
}

fn average(grades: &[i32]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let sum: i64 = grades.iter().map(|g| i64::from(*g)).sum();
    Some(round2(sum as f64 / grades.len() as f64))
}

/// 按能力领域汇总学生在教学班内的评估
///
/// `goals` 应为与教学班学科、年级匹配的目标；不属于这些目标的评估计入
/// `unlinked_assessment_count`。只统计属于该教学班的评估。
pub fn build_competence_profile(
    student_id: i64,
    class_group: &ClassGroup,
    goals: &[CompetenceGoal],
    assessments: &[Assessment],
) -> CompetenceProfile {
    let mut areas: BTreeMap<&str, AreaAccumulator> = BTreeMap::new();
    let mut goal_area: HashMap<i64, &str> = HashMap::new();

    for goal in goals
        .iter()
        .filter(|g| g.subject == class_group.subject && g.grade_level == class_group.grade_level)
    {
        areas.entry(goal.area.as_str()).or_default().goal_count += 1;
        goal_area.insert(goal.id, goal.area.as_str());
    }

    let mut assessment_count = 0;
    let mut unlinked_assessment_count = 0;
    let mut all_grades = Vec::new();

    for assessment in assessments
        .iter()
        .filter(|a| a.student_id == student_id && a.class_group_id == class_group.id)
    {
        assessment_count += 1;
        if let Some(grade) = assessment.grade {
            all_grades.push(grade);
        }

        let linked = assessment
            .competence_goal_id
            .and_then(|goal_id| goal_area.get(&goal_id).map(|area| (goal_id, *area)));

        match linked {
            Some((goal_id, area)) => {
                let acc = areas.entry(area).or_default();
                acc.covered_goals.insert(goal_id);
                acc.assessment_count += 1;
                if let Some(grade) = assessment.grade {
                    acc.grades.push(grade);
                }
            }
            None => unlinked_assessment_count += 1,
        }
    }

    let areas = areas
        .into_iter()
        .map(|(area, acc)| {
            let covered_goal_count = acc.covered_goals.len() as i64;
            let coverage_percent = if acc.goal_count == 0 {
                0.0
            } else {
                round2(covered_goal_count as f64 / acc.goal_count as f64 * 100.0)
            };
            AreaSummary {
                area: area.to_string(),
                goal_count: acc.goal_count,
                covered_goal_count,
                assessment_count: acc.assessment_count,
                graded_count: acc.grades.len() as i64,
                average_grade: average(&acc.grades),
                coverage_percent,
            }
        })
        .collect();

    CompetenceProfile {
        student_id,
        class_group_id: class_group.id,
        subject: class_group.subject.clone(),
        grade_level: class_group.grade_level,
        assessment_count,
        graded_count: all_grades.len() as i64,
        average_grade: average(&all_grades),
        unlinked_assessment_count,
        areas,
    }
}
