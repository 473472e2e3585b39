//! 產線稼動率

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sim_core::PlanningSnapshot;
use std::collections::BTreeMap;

/// 產線單日稼動率
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineUtilization {
    pub line_id: String,
    pub line_name: String,
    pub date: NaiveDate,

    /// 已排總箱數
    pub total_cases: i64,

    /// 每日產能
    pub daily_capacity_cases: i64,

    /// 稼動率（%），產能為 0 時為 None
    pub utilization_pct: Option<Decimal>,

    /// 剩餘產能（超排時為負，與模擬器的剩餘產能不同，這裡不截斷）
    pub headroom_cases: i64,
}

impl LineUtilization {
    /// 是否超排
    pub fn is_overbooked(&self) -> bool {
        self.headroom_cases < 0
    }
}

/// 計算所有有排程的 (產線, 日期) 稼動率，依日期、產線排序
///
/// 沒有產線主檔的排程不列入。
pub fn line_utilization(snapshot: &PlanningSnapshot) -> Vec<LineUtilization> {
    let mut totals: BTreeMap<(NaiveDate, &str), i64> = BTreeMap::new();
    for entry in snapshot.schedule() {
        let total = totals
            .entry((entry.production_date, entry.line_id.as_str()))
            .or_insert(0);
        *total = total.saturating_add(entry.planned_qty_cases);
    }

    totals
        .into_iter()
        .filter_map(|((date, line_id), total_cases)| {
            let line = snapshot.line(line_id)?;
            let capacity = line.daily_capacity_cases;

            let utilization_pct = if capacity > 0 {
                Some(Decimal::from(total_cases) / Decimal::from(capacity) * Decimal::ONE_HUNDRED)
            } else {
                None
            };

            Some(LineUtilization {
                line_id: line.line_id.clone(),
                line_name: line.line_name.clone(),
                date,
                total_cases,
                daily_capacity_cases: capacity,
                utilization_pct,
                headroom_cases: capacity.saturating_sub(total_cases),
            })
        })
        .collect()
}
