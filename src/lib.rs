//! # Promo Sim
//!
//! 促銷追加需求可行性模擬：「DC 若在 D 日前追加 N 箱產品 P，工廠能否交付？不能的話原因為何？」
//!
//! 本 crate 只重新匯出各子 crate，方便下游整合。

pub use sim_calc as calc;
pub use sim_core as model;
pub use sim_kpi as kpi;

pub use sim_calc::{simulate, SimulationResult, Simulator};
pub use sim_core::{PlanningSnapshot, SimError, SimulationRequest, SimulatorConfig};
