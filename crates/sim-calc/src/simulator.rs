//! 模擬主入口

use rayon::prelude::*;
use sim_core::{PlanningSnapshot, SimulationRequest, SimulatorConfig};

use crate::allocator::CapacityAllocator;
use crate::composer::ResultComposer;
use crate::material::MaterialChecker;
use crate::SimulationResult;

/// 可行性模擬器
///
/// 純計算：不寫入快照、不快取、不重試。同一份快照可同時供多個呼叫使用。
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// 創建新的模擬器
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// 模擬單一請求
    ///
    /// 只有輸入格式錯誤會回傳 `Err`；產能或物料不足都是正常的不可行結果。
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        snapshot: &PlanningSnapshot,
    ) -> sim_core::Result<SimulationResult> {
        request.validate()?;

        tracing::info!(
            "開始模擬：產品 {}，追加 {} 箱，交期 {}",
            request.product_id,
            request.requested_extra_cases,
            request.due_date
        );

        let start_time = std::time::Instant::now();

        let allocation = CapacityAllocator::allocate(
            &request.product_id,
            request.requested_extra_cases,
            request.due_date,
            snapshot,
            &self.config,
        );

        // 沒有可生產產線時不檢查物料
        let material_shortages = if allocation.has_capable_line() {
            MaterialChecker::check(&request.product_id, allocation.allocated_total(), snapshot)
        } else {
            Vec::new()
        };

        let mut result = ResultComposer::compose(request, allocation, material_shortages);
        result.calculation_time_ms =
            Some(u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX));

        tracing::info!(
            "模擬完成，可行: {}，已分配 {}，未滿足 {}，耗時 {:?}",
            result.feasible,
            result.allocated_total,
            result.remaining,
            start_time.elapsed()
        );

        Ok(result)
    }

    /// 平行模擬多個獨立請求
    ///
    /// 每個請求都各自以完整快照計算，彼此不互相扣減產能。
    pub fn simulate_batch(
        &self,
        requests: &[SimulationRequest],
        snapshot: &PlanningSnapshot,
    ) -> Vec<sim_core::Result<SimulationResult>> {
        tracing::info!("批次模擬 {} 筆請求", requests.len());

        requests
            .par_iter()
            .map(|request| self.simulate(request, snapshot))
            .collect()
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}

/// 以預設配置模擬「能否在 `due_date` 前追加 `requested_extra_cases` 箱 `product_id`」
pub fn simulate(
    product_id: &str,
    requested_extra_cases: i64,
    due_date: &str,
    snapshot: &PlanningSnapshot,
) -> sim_core::Result<SimulationResult> {
    let request = SimulationRequest::parse(product_id.to_string(), requested_extra_cases, due_date)?;
    Simulator::default().simulate(&request, snapshot)
}
