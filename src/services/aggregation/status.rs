use chrono::{DateTime, Utc};

use crate::config::StatusPolicy;
use crate::models::assessments::entities::Assessment;
use crate::models::class_groups::responses::StudentStatusEntry;
use crate::models::status::{StatusSummary, StudentStatus};

/// 汇总单个学生的评估状态
///
/// 传入 `class_group_id` 时只统计该教学班的评估。
pub fn summarize_status(
    assessments: &[Assessment],
    class_group_id: Option<i64>,
    policy: &StatusPolicy,
    now: DateTime<Utc>,
) -> StatusSummary {
    let counted: Vec<&Assessment> = assessments
        .iter()
        .filter(|a| class_group_id.is_none_or(|id| a.class_group_id == id))
        .collect();

    let count = counted.len() as i64;
    let days_since_last = counted
        .iter()
        .map(|a| a.date)
        .max()
        .map(|latest| (now - latest).num_days().max(0));

    StatusSummary {
        status: classify(count, days_since_last, policy),
        days_since_last,
        count,
    }
}

pub fn classify(count: i64, days_since_last: Option<i64>, policy: &StatusPolicy) -> StudentStatus {
    if count == 0 {
        return StudentStatus::Critical;
    }

    let stale = days_since_last.is_some_and(|days| days > policy.stale_after_days);
    if count < policy.min_assessments || stale {
        StudentStatus::Warning
    } else {
        StudentStatus::Ok
    }
}

/// CRITICAL → WARNING → OK，同状态按姓名（忽略大小写）再按 ID
pub fn sort_status_entries(entries: &mut [StudentStatusEntry]) {
    entries.sort_by(|a, b| {
        a.summary
            .status
            .rank()
            .cmp(&b.summary.status.rank())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn assessment(id: i64, class_group_id: i64, days_ago: i64, now: DateTime<Utc>) -> Assessment {
        Assessment {
            id,
            student_id: 1,
            class_group_id,
            competence_goal_id: None,
            date: now - Duration::days(days_ago),
            grade: Some(4),
            is_published: true,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn entry(id: i64, name: &str, status: StudentStatus) -> StudentStatusEntry {
        StudentStatusEntry {
            id,
            name: name.to_string(),
            grade_level: 8,
            summary: StatusSummary {
                status,
                days_since_last: None,
                count: 0,
            },
        }
    }

    #[test]
    fn test_no_assessments_is_critical() {
        let summary = summarize_status(&[], None, &StatusPolicy::default(), Utc::now());
        assert_eq!(summary.status, StudentStatus::Critical);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.days_since_last, None);
    }

    #[test]
    fn test_single_old_assessment_is_warning() {
        let now = Utc::now();
        let assessments = vec![assessment(1, 1, 400, now)];
        let summary = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assert_eq!(summary.status, StudentStatus::Warning);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.days_since_last, Some(400));
    }

    #[test]
    fn test_recent_and_enough_is_ok() {
        let now = Utc::now();
        let assessments = vec![assessment(1, 1, 40, now), assessment(2, 1, 3, now)];
        let summary = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assert_eq!(summary.status, StudentStatus::Ok);
        assert_eq!(summary.days_since_last, Some(3));
    }

    #[test]
    fn test_stale_latest_is_warning() {
        let now = Utc::now();
        let assessments = vec![assessment(1, 1, 31, now), assessment(2, 1, 60, now)];
        let summary = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assert_eq!(summary.status, StudentStatus::Warning);
        assert_eq!(summary.days_since_last, Some(31));

        // 恰好 30 天不算过期
        let assessments = vec![assessment(1, 1, 30, now), assessment(2, 1, 60, now)];
        let summary = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assert_eq!(summary.status, StudentStatus::Ok);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let now = Utc::now();
        let mut assessments = vec![
            assessment(1, 1, 12, now),
            assessment(2, 1, 2, now),
            assessment(3, 1, 50, now),
        ];
        let expected = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assessments.reverse();
        assert_eq!(
            summarize_status(&assessments, None, &StatusPolicy::default(), now),
            expected
        );
        assert_eq!(expected.days_since_last, Some(2));
    }

    #[test]
    fn test_future_dates_clamp_to_zero_days() {
        let now = Utc::now();
        let assessments = vec![assessment(1, 1, -5, now), assessment(2, 1, 1, now)];
        let summary = summarize_status(&assessments, None, &StatusPolicy::default(), now);
        assert_eq!(summary.days_since_last, Some(0));
    }

    #[test]
    fn test_class_group_scope() {
        let now = Utc::now();
        let assessments = vec![
            assessment(1, 1, 2, now),
            assessment(2, 1, 4, now),
            assessment(3, 2, 1, now),
        ];
        let policy = StatusPolicy::default();

        let scoped = summarize_status(&assessments, Some(2), &policy, now);
        assert_eq!(scoped.count, 1);
        assert_eq!(scoped.status, StudentStatus::Warning);

        let empty = summarize_status(&assessments, Some(3), &policy, now);
        assert_eq!(empty.status, StudentStatus::Critical);

        let all = summarize_status(&assessments, None, &policy, now);
        assert_eq!(all.count, 3);
        assert_eq!(all.status, StudentStatus::Ok);
    }

    #[test]
    fn test_custom_policy() {
        let policy = StatusPolicy {
            min_assessments: 1,
            stale_after_days: 500,
        };
        assert_eq!(classify(1, Some(400), &policy), StudentStatus::Ok);
        assert_eq!(classify(0, None, &policy), StudentStatus::Critical);
    }

    #[test]
    fn test_sort_order_for_every_permutation() {
        let base = vec![
            entry(1, "Ola", StudentStatus::Ok),
            entry(2, "kari", StudentStatus::Warning),
            entry(3, "Anne", StudentStatus::Critical),
            entry(4, "Bjørn", StudentStatus::Warning),
        ];
        let expected_ids = vec![3, 4, 2, 1];

        // 4! 种输入顺序
        let mut indices = [0usize, 1, 2, 3];
        let mut permutations = Vec::new();
        permute(&mut indices, 0, &mut permutations);
        assert_eq!(permutations.len(), 24);

        for order in permutations {
            let mut entries: Vec<StudentStatusEntry> =
                order.iter().map(|&i| base[i].clone()).collect();
            sort_status_entries(&mut entries);
            let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
            assert_eq!(ids, expected_ids);
        }
    }

    #[test]
    fn test_sort_ties_use_case_insensitive_name_then_id() {
        let mut entries = vec![
            entry(9, "ola", StudentStatus::Ok),
            entry(5, "Ola", StudentStatus::Ok),
            entry(7, "Anna", StudentStatus::Ok),
        ];
        sort_status_entries(&mut entries);
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 5, 9]);
    }

    fn permute(items: &mut [usize; 4], k: usize, out: &mut Vec<[usize; 4]>) {
        if k == items.len() {
            out.push(*items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, out);
            items.swap(k, i);
        }
    }
}
