//! # Simulation KPI
//!
//! 排程看板指標：產線稼動率、排程工時、待審 DC 請求、物料交期風險

pub mod inventory;
pub mod runs;
pub mod utilization;

// Re-export 主要類型
pub use inventory::{inventory_risk, MaterialPosition};
pub use runs::{scheduled_runs, ScheduledRun};
pub use utilization::{line_utilization, LineUtilization};

use serde::{Deserialize, Serialize};
use sim_core::{DcRequest, PlanningSnapshot};

/// 看板指標摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSummary {
    /// 各產線每日稼動率
    pub line_utilization: Vec<LineUtilization>,

    /// 彈性排程筆數（可被擠掉的排程）
    pub flexible_slots_count: usize,

    /// 待審 DC 請求筆數
    pub pending_dc_requests: usize,
}

/// 指標計算器
pub struct KpiCalculator;

impl KpiCalculator {
    /// 計算看板指標摘要
    pub fn summarize(snapshot: &PlanningSnapshot, dc_requests: &[DcRequest]) -> KpiSummary {
        let line_utilization = line_utilization(snapshot);

        let flexible_slots_count = snapshot
            .schedule()
            .iter()
            .filter(|e| e.is_flexible())
            .count();

        let pending_dc_requests = dc_requests.iter().filter(|r| r.is_pending()).count();

        tracing::debug!(
            "指標摘要：產線日 {} 筆，彈性排程 {} 筆，待審請求 {} 筆",
            line_utilization.len(),
            flexible_slots_count,
            pending_dc_requests
        );

        KpiSummary {
            line_utilization,
            flexible_slots_count,
            pending_dc_requests,
        }
    }
}
