//! 暫定分配計劃模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 暫定分配步驟（一條產線在一天內分配到的箱數）
///
/// `allocated_cases == used_headroom + bumped_flexible` 恆成立。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStep {
    /// 產線ID
    pub line_id: String,

    /// 生產日期
    pub production_date: NaiveDate,

    /// 分配箱數
    pub allocated_cases: i64,

    /// 使用剩餘產能的箱數
    pub used_headroom: i64,

    /// 擠掉彈性排程的箱數
    pub bumped_flexible: i64,
}

impl AllocationStep {
    /// 依剩餘產能優先的原則拆分分配量
    pub fn split(
        line_id: String,
        production_date: NaiveDate,
        allocated_cases: i64,
        headroom: i64,
    ) -> Self {
        let used_headroom = headroom.min(allocated_cases);
        Self {
            line_id,
            production_date,
            allocated_cases,
            used_headroom,
            bumped_flexible: allocated_cases - used_headroom,
        }
    }

    /// 檢查是否有擠掉彈性排程
    pub fn bumps_flexible(&self) -> bool {
        self.bumped_flexible > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefers_headroom() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

        let step = AllocationStep::split("L1".to_string(), date, 8_000, 4_000);
        assert_eq!(step.used_headroom, 4_000);
        assert_eq!(step.bumped_flexible, 4_000);
        assert!(step.bumps_flexible());

        let step = AllocationStep::split("L1".to_string(), date, 3_000, 4_000);
        assert_eq!(step.used_headroom, 3_000);
        assert_eq!(step.bumped_flexible, 0);
        assert!(!step.bumps_flexible());
    }
}
