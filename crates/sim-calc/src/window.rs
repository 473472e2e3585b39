//! 模擬時間窗

use chrono::NaiveDate;
use sim_core::{PlanningSnapshot, SimulatorConfig};

/// 模擬時間窗計算器
pub struct ScheduleWindow;

impl ScheduleWindow {
    /// 時間窗內出現過的排程日期（遞增、去重）
    ///
    /// 只回傳有排程的日期，不補齊空白日；交期當天包含在內。
    pub fn dates(
        snapshot: &PlanningSnapshot,
        due_date: NaiveDate,
        config: &SimulatorConfig,
    ) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = snapshot
            .schedule()
            .iter()
            .map(|e| e.production_date)
            .filter(|&d| config.in_window(d, due_date))
            .collect();

        dates.sort();
        dates.dedup();
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::{ScheduleEntry, SnapshotData};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn snapshot_with_dates(days: &[u32]) -> PlanningSnapshot {
        let schedule = days
            .iter()
            .map(|&d| ScheduleEntry::new("L1".to_string(), day(d), "SKU-1".to_string(), 100))
            .collect();
        PlanningSnapshot::new(SnapshotData {
            schedule,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_dates_sorted_and_deduplicated() {
        let snapshot = snapshot_with_dates(&[4, 1, 3, 1, 2]);
        let dates = ScheduleWindow::dates(&snapshot, day(10), &SimulatorConfig::default());
        assert_eq!(dates, vec![day(1), day(2), day(3), day(4)]);
    }

    #[test]
    fn test_due_date_is_inclusive() {
        let snapshot = snapshot_with_dates(&[1, 2, 3]);
        let dates = ScheduleWindow::dates(&snapshot, day(2), &SimulatorConfig::default());
        assert_eq!(dates, vec![day(1), day(2)]);
    }

    #[test]
    fn test_earliest_production_date() {
        let snapshot = snapshot_with_dates(&[1, 2, 3]);
        let config = SimulatorConfig::new().with_earliest_production_date(day(2));
        let dates = ScheduleWindow::dates(&snapshot, day(3), &config);
        assert_eq!(dates, vec![day(2), day(3)]);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let snapshot = snapshot_with_dates(&[1, 5]);
        let dates = ScheduleWindow::dates(&snapshot, day(5), &SimulatorConfig::default());
        assert_eq!(dates, vec![day(1), day(5)]);
    }
}
