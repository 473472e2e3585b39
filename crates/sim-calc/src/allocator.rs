//! 產能分配
//!
//! 依日期遞增、產線能力表順序逐一走訪 (產線, 日期)，貪婪地取用剩餘產能，
//! 不足時再擠掉彈性排程。確定排程永遠不會被計入可擠掉的量。

use chrono::NaiveDate;
use sim_core::{AllocationStep, Line, PlanningSnapshot, ScheduleEntry, SimulatorConfig};

use crate::window::ScheduleWindow;
use crate::CapacityShortage;

/// 單一產線單日的負載
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDayLoad {
    /// 已排總量（不分產品）
    pub total_planned: i64,

    /// 剩餘產能，永不為負
    pub headroom: i64,

    /// 可擠掉的彈性排程量
    pub flexible_displaceable: i64,
}

impl LineDayLoad {
    /// 計算產線在某日的負載，加總超出 i64 時停在 i64::MAX
    pub fn measure<'a>(line: &Line, entries: impl Iterator<Item = &'a ScheduleEntry>) -> Self {
        let mut total_planned: i64 = 0;
        let mut flexible_displaceable: i64 = 0;

        for entry in entries {
            total_planned = total_planned.saturating_add(entry.planned_qty_cases);
            if entry.is_flexible() {
                flexible_displaceable =
                    flexible_displaceable.saturating_add(entry.planned_qty_cases);
            }
        }

        Self {
            total_planned,
            headroom: line.headroom(total_planned),
            flexible_displaceable,
        }
    }

    /// 今日可用量
    pub fn available(&self, allow_flexible_displacement: bool) -> i64 {
        if allow_flexible_displacement {
            self.headroom.saturating_add(self.flexible_displaceable)
        } else {
            self.headroom
        }
    }
}

/// 產能分配結果
#[derive(Debug, Clone)]
pub struct Allocation {
    /// 分配步驟（依走訪順序）
    pub steps: Vec<AllocationStep>,

    /// 未滿足箱數
    pub remaining: i64,

    /// 產能短缺說明
    pub capacity_shortages: Vec<CapacityShortage>,
}

impl Allocation {
    /// 沒有可生產產線時的結果
    fn no_capable_line(requested: i64) -> Self {
        Self {
            steps: Vec::new(),
            remaining: requested,
            capacity_shortages: vec![CapacityShortage::NoCapableLine],
        }
    }

    /// 已分配總箱數
    pub fn allocated_total(&self) -> i64 {
        self.steps.iter().map(|s| s.allocated_cases).sum()
    }

    /// 是否有產線能生產該產品
    pub fn has_capable_line(&self) -> bool {
        !self
            .capacity_shortages
            .iter()
            .any(|s| matches!(s, CapacityShortage::NoCapableLine))
    }
}

/// 產能分配器
pub struct CapacityAllocator;

impl CapacityAllocator {
    /// 在交期前為產品分配追加箱數
    ///
    /// `allocated_total() + remaining == requested` 恆成立。
    pub fn allocate(
        product_id: &str,
        requested: i64,
        due_date: NaiveDate,
        snapshot: &PlanningSnapshot,
        config: &SimulatorConfig,
    ) -> Allocation {
        let capable_lines = snapshot.capable_lines(product_id);
        if capable_lines.is_empty() {
            tracing::debug!("產品 {} 沒有可生產的產線", product_id);
            return Allocation::no_capable_line(requested);
        }

        let dates = ScheduleWindow::dates(snapshot, due_date, config);
        tracing::debug!(
            "產品 {} 可生產產線 {:?}，時間窗日期 {} 個",
            product_id,
            capable_lines,
            dates.len()
        );

        let mut remaining = requested;
        let mut steps = Vec::new();

        'dates: for date in dates {
            for &line_id in &capable_lines {
                if remaining <= 0 {
                    break 'dates;
                }

                let Some(line) = snapshot.line(line_id) else {
                    tracing::warn!("產線 {} 有產線能力記錄但沒有產線主檔，跳過", line_id);
                    continue;
                };

                let load = LineDayLoad::measure(line, snapshot.entries_for(line_id, date));
                let available = load.available(config.allow_flexible_displacement);
                if available <= 0 {
                    continue;
                }

                let allocate_now = available.min(remaining);
                let step =
                    AllocationStep::split(line_id.to_string(), date, allocate_now, load.headroom);

                tracing::debug!(
                    "分配 {} @ {}: {} 箱（剩餘產能 {}，擠掉彈性 {}）",
                    line_id,
                    date,
                    step.allocated_cases,
                    step.used_headroom,
                    step.bumped_flexible
                );

                remaining -= allocate_now;
                steps.push(step);
            }
        }

        let mut capacity_shortages = Vec::new();
        if remaining > 0 {
            capacity_shortages.push(CapacityShortage::Unfulfilled {
                remaining,
                due_date,
            });
        }

        Allocation {
            steps,
            remaining,
            capacity_shortages,
        }
    }
}
