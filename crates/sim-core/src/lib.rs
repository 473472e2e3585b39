//! # Simulation Core
//!
//! 產能可行性模擬的核心資料模型：產線、產品、排程、BOM、庫存快照

pub mod config;
pub mod line;
pub mod material;
pub mod plan;
pub mod product;
pub mod request;
pub mod schedule;
pub mod snapshot;

// Re-export 主要類型
pub use config::SimulatorConfig;
pub use line::{Line, LineCapability};
pub use material::{BillOfMaterialLine, Material, MaterialStock};
pub use plan::AllocationStep;
pub use product::Product;
pub use request::{parse_due_date, DcRequest, DcRequestStatus, SimulationRequest};
pub use schedule::ScheduleEntry;
pub use snapshot::{PlanningSnapshot, SnapshotData};

/// 模擬錯誤類型
///
/// 只有輸入格式錯誤會成為錯誤；產能不足、物料短缺等皆為正常的可行性結果。
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("無效的需求數量: {0}（必須大於 0）")]
    InvalidQuantity(i64),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的快照資料: {0}")]
    InvalidSnapshot(String),

    #[error("重複的記錄: {0}")]
    DuplicateRecord(String),

    #[error("快照解析錯誤: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
