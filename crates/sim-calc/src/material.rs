//! 物料可行性檢查

use rust_decimal::Decimal;
use sim_core::PlanningSnapshot;

use crate::MaterialShortage;

/// 物料可行性檢查器
pub struct MaterialChecker;

impl MaterialChecker {
    /// 以已分配箱數展開 BOM，回傳所有需求量超過現有庫存的物料
    ///
    /// 使用的是已分配量而非原始需求量；部分可行的請求只檢查能交付的部分。
    /// 沒有庫存記錄的物料視為庫存 0。
    pub fn check(
        product_id: &str,
        allocated_total: i64,
        snapshot: &PlanningSnapshot,
    ) -> Vec<MaterialShortage> {
        let bom = snapshot.bom_for(product_id);
        if bom.is_empty() {
            tracing::debug!("產品 {} 沒有 BOM", product_id);
            return vec![MaterialShortage::NoBillOfMaterials {
                product_id: product_id.to_string(),
            }];
        }

        let mut shortages = Vec::new();

        for line in bom {
            let required = line.required_for(allocated_total).unwrap_or_else(|| {
                tracing::warn!(
                    "物料 {} 需求量超出可表示範圍（每箱 {} × {} 箱），以最大值計",
                    line.material_id,
                    line.qty_per_case,
                    allocated_total
                );
                Decimal::MAX
            });
            let on_hand = snapshot.on_hand(&line.material_id);

            tracing::debug!(
                "物料 {}: 需求 {}，庫存 {}",
                line.material_id,
                required,
                on_hand
            );

            if let Some(shortage) = snapshot.shortage_for(&line.material_id, required) {
                let material = snapshot.material(&line.material_id);
                shortages.push(MaterialShortage::Insufficient {
                    material_id: line.material_id.clone(),
                    material_name: material
                        .map(|m| m.material_name.clone())
                        .unwrap_or_else(|| line.material_id.clone()),
                    required,
                    on_hand,
                    shortage,
                    supplier_lead_time_days: material.and_then(|m| m.supplier_lead_time_days),
                });
            }
        }

        shortages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::{BillOfMaterialLine, Material, MaterialStock, SnapshotData};

    fn snapshot() -> PlanningSnapshot {
        PlanningSnapshot::new(SnapshotData {
            bill_of_materials: vec![
                BillOfMaterialLine::new("SKU-1".to_string(), "MAT-PET".to_string(), Decimal::new(1, 1)),
                BillOfMaterialLine::new("SKU-1".to_string(), "MAT-CAP".to_string(), Decimal::from(24)),
                BillOfMaterialLine::new("SKU-1".to_string(), "MAT-LABEL".to_string(), Decimal::from(24)),
            ],
            materials: vec![
                Material::new("MAT-PET".to_string(), "PET resin".to_string()).with_lead_time(21),
                Material::new("MAT-CAP".to_string(), "Bottle cap".to_string()).with_lead_time(7),
            ],
            stock: vec![
                MaterialStock::new("MAT-PET".to_string(), Decimal::from(500)),
                MaterialStock::new("MAT-CAP".to_string(), Decimal::from(100_000)),
            ],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_required_is_qty_per_case_times_allocated() {
        let shortages = MaterialChecker::check("SKU-1", 8_000, &snapshot());

        // PET: 0.1 × 8000 = 800 > 500
        let pet = shortages
            .iter()
            .find(|s| matches!(s, MaterialShortage::Insufficient { material_id, .. } if material_id == "MAT-PET"))
            .unwrap();
        assert_eq!(pet.shortage(), Some(Decimal::from(300)));
        assert_eq!(pet.describe(), "PET resin short by 300 (lead 21d)");
    }

    #[test]
    fn test_sufficient_material_is_absent() {
        let shortages = MaterialChecker::check("SKU-1", 4_000, &snapshot());

        // CAP: 24 × 4000 = 96000 <= 100000
        assert!(!shortages
            .iter()
            .any(|s| matches!(s, MaterialShortage::Insufficient { material_id, .. } if material_id == "MAT-CAP")));
    }

    #[test]
    fn test_missing_stock_counts_as_zero() {
        let shortages = MaterialChecker::check("SKU-1", 10, &snapshot());

        assert_eq!(shortages.len(), 1);
        match &shortages[0] {
            MaterialShortage::Insufficient {
                material_name,
                on_hand,
                shortage,
                supplier_lead_time_days,
                ..
            } => {
                // 無物料主檔時以 ID 作為名稱
                assert_eq!(material_name, "MAT-LABEL");
                assert_eq!(*on_hand, Decimal::ZERO);
                assert_eq!(*shortage, Decimal::from(240));
                assert_eq!(*supplier_lead_time_days, None);
            }
            other => panic!("unexpected shortage: {:?}", other),
        }
    }

    #[test]
    fn test_no_bom() {
        let shortages = MaterialChecker::check("SKU-9", 1_000, &snapshot());
        assert_eq!(
            shortages,
            vec![MaterialShortage::NoBillOfMaterials {
                product_id: "SKU-9".to_string()
            }]
        );
        assert_eq!(shortages[0].describe(), "no BOM defined for this product");
    }

    #[test]
    fn test_unrepresentable_requirement_is_a_shortage() {
        let snapshot = PlanningSnapshot::new(SnapshotData {
            bill_of_materials: vec![BillOfMaterialLine::new(
                "SKU-1".to_string(),
                "MAT-SYRUP".to_string(),
                Decimal::from(100_000_000_000_000_000_i64),
            )],
            stock: vec![MaterialStock::new("MAT-SYRUP".to_string(), Decimal::from(1_000))],
            ..Default::default()
        })
        .unwrap();

        let shortages = MaterialChecker::check("SKU-1", 1_000_000_000_000, &snapshot);

        assert_eq!(shortages.len(), 1);
        match &shortages[0] {
            MaterialShortage::Insufficient {
                required, shortage, ..
            } => {
                assert_eq!(*required, Decimal::MAX);
                assert_eq!(*shortage, Decimal::MAX - Decimal::from(1_000));
            }
            other => panic!("unexpected shortage: {:?}", other),
        }
    }

    #[test]
    fn test_zero_allocation_has_no_shortage() {
        let shortages = MaterialChecker::check("SKU-1", 0, &snapshot());
        assert!(shortages.is_empty());
    }
}
