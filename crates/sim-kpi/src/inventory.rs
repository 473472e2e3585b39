//! 物料交期風險

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sim_core::PlanningSnapshot;
use std::cmp::Ordering;

/// 物料庫存位置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialPosition {
    pub material_id: String,
    pub material_name: String,
    pub uom: Option<String>,
    pub supplier_lead_time_days: Option<u32>,
    pub on_hand_qty: Decimal,
}

/// 有庫存記錄的物料，依供應商交期由長到短（未知交期排最後），再依庫存由多到少
pub fn inventory_risk(snapshot: &PlanningSnapshot) -> Vec<MaterialPosition> {
    let mut positions: Vec<MaterialPosition> = snapshot
        .materials()
        .iter()
        .filter(|m| snapshot.stock().iter().any(|s| s.material_id == m.material_id))
        .map(|m| MaterialPosition {
            material_id: m.material_id.clone(),
            material_name: m.material_name.clone(),
            uom: m.uom.clone(),
            supplier_lead_time_days: m.supplier_lead_time_days,
            on_hand_qty: snapshot.on_hand(&m.material_id),
        })
        .collect();

    positions.sort_by(|a, b| {
        compare_lead_time_desc(a.supplier_lead_time_days, b.supplier_lead_time_days)
            .then_with(|| b.on_hand_qty.cmp(&a.on_hand_qty))
    });

    positions
}

fn compare_lead_time_desc(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
