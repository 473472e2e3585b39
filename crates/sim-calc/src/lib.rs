//! # Simulation Calculation Engine
//!
//! 促銷追加需求的產能/物料可行性模擬引擎（不修改排程）

pub mod allocator;
pub mod composer;
pub mod material;
pub mod simulator;
pub mod window;

// Re-export 主要類型
pub use allocator::{Allocation, CapacityAllocator, LineDayLoad};
pub use composer::ResultComposer;
pub use material::MaterialChecker;
pub use simulator::{simulate, Simulator};
pub use window::ScheduleWindow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sim_core::AllocationStep;
use uuid::Uuid;

/// 模擬結果
///
/// `allocated_total + remaining == requested_extra_cases` 恆成立。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 請求ID
    pub request_id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 追加需求箱數
    pub requested_extra_cases: i64,

    /// 交期
    pub due_date: NaiveDate,

    /// 是否完全可行
    pub feasible: bool,

    /// 已分配總箱數
    pub allocated_total: i64,

    /// 未滿足箱數
    pub remaining: i64,

    /// 暫定分配計劃（依日期、產線順序）
    pub plan: Vec<AllocationStep>,

    /// 物料短缺
    pub material_shortages: Vec<MaterialShortage>,

    /// 產能短缺
    pub capacity_shortages: Vec<CapacityShortage>,

    /// 給 DC 的說明
    pub message: String,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u64>,
}

impl SimulationResult {
    /// 是否有擠掉任何彈性排程
    pub fn bumps_flexible(&self) -> bool {
        self.plan.iter().any(AllocationStep::bumps_flexible)
    }

    /// 物料短缺描述
    pub fn material_descriptions(&self) -> Vec<String> {
        self.material_shortages.iter().map(|s| s.describe()).collect()
    }

    /// 產能短缺描述
    pub fn capacity_descriptions(&self) -> Vec<String> {
        self.capacity_shortages.iter().map(|s| s.describe()).collect()
    }
}

/// 物料短缺
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialShortage {
    /// 需求量超過現有庫存
    Insufficient {
        material_id: String,
        material_name: String,
        required: Decimal,
        on_hand: Decimal,
        shortage: Decimal,
        supplier_lead_time_days: Option<u32>,
    },

    /// 產品沒有定義 BOM，無法確認物料
    NoBillOfMaterials { product_id: String },
}

impl MaterialShortage {
    pub fn describe(&self) -> String {
        match self {
            MaterialShortage::Insufficient {
                material_name,
                shortage,
                supplier_lead_time_days,
                ..
            } => {
                let lead = match supplier_lead_time_days {
                    Some(days) => format!("lead {}d", days),
                    None => "lead time unknown".to_string(),
                };
                format!(
                    "{} short by {} ({})",
                    material_name,
                    composer::format_quantity(*shortage),
                    lead
                )
            }
            MaterialShortage::NoBillOfMaterials { .. } => {
                "no BOM defined for this product".to_string()
            }
        }
    }

    /// 短缺量（無 BOM 時為 None）
    pub fn shortage(&self) -> Option<Decimal> {
        match self {
            MaterialShortage::Insufficient { shortage, .. } => Some(*shortage),
            MaterialShortage::NoBillOfMaterials { .. } => None,
        }
    }
}

/// 產能短缺
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityShortage {
    /// 沒有任何產線能生產該產品
    NoCapableLine,

    /// 交期前仍有未分配的箱數
    Unfulfilled { remaining: i64, due_date: NaiveDate },
}

impl CapacityShortage {
    pub fn describe(&self) -> String {
        match self {
            CapacityShortage::NoCapableLine => "no capable line for this product".to_string(),
            CapacityShortage::Unfulfilled {
                remaining,
                due_date,
            } => format!(
                "Short {} cases before {}",
                composer::format_cases(*remaining),
                due_date
            ),
        }
    }
}
