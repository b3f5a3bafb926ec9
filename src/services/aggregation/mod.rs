//! 纯函数聚合：学生评估状态与能力画像
//!
//! 这里的函数只处理传入的快照，不访问存储，也不保存任何状态。

pub mod profile;
pub mod status;

pub use profile::build_competence_profile;
pub use status::{classify, sort_status_entries, summarize_status};

/// 四舍五入到两位小数
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.0), 4.0);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(200.0 / 3.0), 66.67);
    }
}
