//! 物料、BOM 與庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID
    pub material_id: String,

    /// 物料名稱
    pub material_name: String,

    /// 計量單位
    pub uom: Option<String>,

    /// 供應商交期（天）
    pub supplier_lead_time_days: Option<u32>,
}

impl Material {
    /// 創建新的物料
    pub fn new(material_id: String, material_name: String) -> Self {
        Self {
            material_id,
            material_name,
            uom: None,
            supplier_lead_time_days: None,
        }
    }

    /// 建構器模式：設置計量單位
    pub fn with_uom(mut self, uom: String) -> Self {
        self.uom = Some(uom);
        self
    }

    /// 建構器模式：設置供應商交期
    pub fn with_lead_time(mut self, days: u32) -> Self {
        self.supplier_lead_time_days = Some(days);
        self
    }
}

/// BOM 行：每箱成品消耗的原物料數量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOfMaterialLine {
    /// 成品ID
    pub product_id: String,

    /// 物料ID
    pub material_id: String,

    /// 每箱用量
    pub qty_per_case: Decimal,
}

impl BillOfMaterialLine {
    pub fn new(product_id: String, material_id: String, qty_per_case: Decimal) -> Self {
        Self {
            product_id,
            material_id,
            qty_per_case,
        }
    }

    /// 計算指定箱數的物料需求量，超出 Decimal 可表示範圍時回傳 None
    pub fn required_for(&self, cases: i64) -> Option<Decimal> {
        self.qty_per_case.checked_mul(Decimal::from(cases))
    }
}

/// 原物料現有庫存
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialStock {
    /// 物料ID
    pub material_id: String,

    /// 現有庫存
    pub on_hand_qty: Decimal,
}

impl MaterialStock {
    pub fn new(material_id: String, on_hand_qty: Decimal) -> Self {
        Self {
            material_id,
            on_hand_qty,
        }
    }
}
