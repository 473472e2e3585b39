//! 產線與產線能力模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產線
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// 產線ID
    pub line_id: String,

    /// 產線名稱
    pub line_name: String,

    /// 每日產能（箱）
    pub daily_capacity_cases: i64,
}

impl Line {
    /// 創建新的產線
    pub fn new(line_id: String, line_name: String, daily_capacity_cases: i64) -> Self {
        Self {
            line_id,
            line_name,
            daily_capacity_cases,
        }
    }

    /// 計算剩餘產能，已排量超過產能時回傳 0
    pub fn headroom(&self, total_planned: i64) -> i64 {
        self.daily_capacity_cases.saturating_sub(total_planned).max(0)
    }
}

/// 產線與產品的生產能力
///
/// 沒有對應記錄表示該產線不能生產此產品。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineCapability {
    /// 產線ID
    pub line_id: String,

    /// 產品ID
    pub product_id: String,

    /// 產速（箱/小時）
    pub rate_cases_per_hour: Decimal,
}

impl LineCapability {
    /// 創建新的產線能力
    pub fn new(line_id: String, product_id: String, rate_cases_per_hour: Decimal) -> Self {
        Self {
            line_id,
            product_id,
            rate_cases_per_hour,
        }
    }

    /// 生產指定箱數所需工時
    pub fn hours_for(&self, cases: i64) -> Decimal {
        if self.rate_cases_per_hour <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        Decimal::from(cases) / self.rate_cases_per_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10_000, 6_000, 4_000)]
    #[case(10_000, 10_000, 0)]
    #[case(10_000, 12_500, 0)]
    #[case(0, 0, 0)]
    #[case(0, i64::MAX, 0)]
    #[case(i64::MAX, 0, i64::MAX)]
    fn test_headroom_is_clamped(#[case] capacity: i64, #[case] planned: i64, #[case] expected: i64) {
        let line = Line::new("L1".to_string(), "Line 1".to_string(), capacity);
        assert_eq!(line.headroom(planned), expected);
    }

    #[test]
    fn test_hours_for() {
        let cap = LineCapability::new("L1".to_string(), "SKU-1".to_string(), Decimal::from(500));
        assert_eq!(cap.hours_for(6_000), Decimal::from(12));
    }
}
