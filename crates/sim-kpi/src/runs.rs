//! 排程工時（甘特圖資料）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sim_core::PlanningSnapshot;

/// 已排生產批次與所需工時
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledRun {
    pub line_id: String,
    pub line_name: String,
    pub production_date: NaiveDate,
    pub product_id: String,
    pub product_name: String,
    pub planned_qty_cases: i64,
    pub is_firm: bool,
    pub rate_cases_per_hour: Decimal,

    /// 所需工時 = 計劃數量 / 產速
    pub hours_needed: Decimal,
}

/// 將排程與產線、產品、產線能力合併，依日期、產線排序
///
/// 缺少產線主檔或產線能力記錄的排程不列入；缺少產品主檔時以產品ID作為名稱。
pub fn scheduled_runs(snapshot: &PlanningSnapshot) -> Vec<ScheduledRun> {
    let mut runs: Vec<ScheduledRun> = snapshot
        .schedule()
        .iter()
        .filter_map(|entry| {
            let line = snapshot.line(&entry.line_id)?;
            let capability = snapshot.capability(&entry.line_id, &entry.product_id)?;
            let product_name = snapshot
                .product(&entry.product_id)
                .map(|p| p.product_name.clone())
                .unwrap_or_else(|| entry.product_id.clone());

            Some(ScheduledRun {
                line_id: entry.line_id.clone(),
                line_name: line.line_name.clone(),
                production_date: entry.production_date,
                product_id: entry.product_id.clone(),
                product_name,
                planned_qty_cases: entry.planned_qty_cases,
                is_firm: entry.is_firm,
                rate_cases_per_hour: capability.rate_cases_per_hour,
                hours_needed: capability.hours_for(entry.planned_qty_cases),
            })
        })
        .collect();

    runs.sort_by(|a, b| {
        a.production_date
            .cmp(&b.production_date)
            .then_with(|| a.line_id.cmp(&b.line_id))
    });

    if runs.len() < snapshot.schedule().len() {
        tracing::debug!(
            "{} 筆排程缺少產線或產線能力記錄，未列入",
            snapshot.schedule().len() - runs.len()
        );
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::{Line, LineCapability, Product, ScheduleEntry, SnapshotData};

    #[test]
    fn test_scheduled_runs() {
        let d1 = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();

        let snapshot = PlanningSnapshot::new(SnapshotData {
            lines: vec![
                Line::new("L1".to_string(), "Line 1".to_string(), 10_000),
                Line::new("L2".to_string(), "Line 2".to_string(), 10_000),
            ],
            products: vec![Product::new("SKU-1".to_string(), "Cola 12oz".to_string())],
            capabilities: vec![
                LineCapability::new("L1".to_string(), "SKU-1".to_string(), Decimal::from(500)),
                LineCapability::new("L2".to_string(), "SKU-1".to_string(), Decimal::from(400)),
                LineCapability::new("L2".to_string(), "SKU-2".to_string(), Decimal::from(250)),
            ],
            schedule: vec![
                ScheduleEntry::new("L2".to_string(), d2, "SKU-2".to_string(), 1_000),
                ScheduleEntry::new("L2".to_string(), d1, "SKU-1".to_string(), 2_000).with_firm(true),
                ScheduleEntry::new("L1".to_string(), d1, "SKU-1".to_string(), 6_000),
                // 沒有產線能力記錄
                ScheduleEntry::new("L1".to_string(), d1, "SKU-2".to_string(), 500),
            ],
            ..Default::default()
        })
        .unwrap();

        let runs = scheduled_runs(&snapshot);
        assert_eq!(runs.len(), 3);

        assert_eq!(runs[0].line_id, "L1");
        assert_eq!(runs[0].product_name, "Cola 12oz");
        assert_eq!(runs[0].hours_needed, Decimal::from(12));

        assert_eq!(runs[1].line_id, "L2");
        assert!(runs[1].is_firm);
        assert_eq!(runs[1].hours_needed, Decimal::from(5));

        assert_eq!(runs[2].production_date, d2);
        assert_eq!(runs[2].product_name, "SKU-2");
        assert_eq!(runs[2].hours_needed, Decimal::from(4));
    }
}
