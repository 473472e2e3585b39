//! 規劃快照：一次模擬所使用的唯讀資料

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::{
    BillOfMaterialLine, Line, LineCapability, Material, MaterialStock, Product, ScheduleEntry,
    SimError,
};

/// 快照原始資料（資料來源提供的表格）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotData {
    pub lines: Vec<Line>,
    pub products: Vec<Product>,
    pub capabilities: Vec<LineCapability>,
    pub schedule: Vec<ScheduleEntry>,
    pub bill_of_materials: Vec<BillOfMaterialLine>,
    pub materials: Vec<Material>,
    pub stock: Vec<MaterialStock>,
}

/// 規劃快照
///
/// 建立時一次性驗證所有記錄，之後的查詢不再重複驗證。
/// 快照建立後不可修改；多個模擬可同時共用同一份快照。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SnapshotData", into = "SnapshotData")]
pub struct PlanningSnapshot {
    data: SnapshotData,
    line_index: HashMap<String, usize>,
    product_index: HashMap<String, usize>,
    material_index: HashMap<String, usize>,
    stock_index: HashMap<String, usize>,
}

impl PlanningSnapshot {
    /// 從原始資料建立快照並驗證
    pub fn new(data: SnapshotData) -> crate::Result<Self> {
        Self::validate(&data)?;

        let line_index = index_by(&data.lines, |l| l.line_id.as_str(), "產線")?;
        let product_index = index_by(&data.products, |p| p.product_id.as_str(), "產品")?;
        let material_index = index_by(&data.materials, |m| m.material_id.as_str(), "物料")?;
        let stock_index = index_by(&data.stock, |s| s.material_id.as_str(), "庫存")?;

        let mut seen = HashSet::new();
        for cap in &data.capabilities {
            if !seen.insert((cap.line_id.as_str(), cap.product_id.as_str())) {
                tracing::warn!(
                    "產線能力 ({}, {}) 重複，以第一筆為準",
                    cap.line_id,
                    cap.product_id
                );
            }
        }

        Ok(Self {
            data,
            line_index,
            product_index,
            material_index,
            stock_index,
        })
    }

    /// 從 JSON 文件載入快照
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let data: SnapshotData =
            serde_json::from_str(json).map_err(|e| SimError::Parse(e.to_string()))?;
        Self::new(data)
    }

    fn validate(data: &SnapshotData) -> crate::Result<()> {
        for line in &data.lines {
            if line.daily_capacity_cases < 0 {
                return Err(SimError::InvalidSnapshot(format!(
                    "產線 {} 每日產能為負: {}",
                    line.line_id, line.daily_capacity_cases
                )));
            }
        }

        for entry in &data.schedule {
            if entry.planned_qty_cases < 0 {
                return Err(SimError::InvalidSnapshot(format!(
                    "排程 {} @ {} 計劃數量為負: {}",
                    entry.line_id, entry.production_date, entry.planned_qty_cases
                )));
            }
        }

        for cap in &data.capabilities {
            if cap.rate_cases_per_hour <= Decimal::ZERO {
                return Err(SimError::InvalidSnapshot(format!(
                    "產線能力 ({}, {}) 產速必須大於 0: {}",
                    cap.line_id, cap.product_id, cap.rate_cases_per_hour
                )));
            }
        }

        for bom in &data.bill_of_materials {
            if bom.qty_per_case < Decimal::ZERO {
                return Err(SimError::InvalidSnapshot(format!(
                    "BOM ({}, {}) 每箱用量為負: {}",
                    bom.product_id, bom.material_id, bom.qty_per_case
                )));
            }
        }

        for stock in &data.stock {
            if stock.on_hand_qty < Decimal::ZERO {
                return Err(SimError::InvalidSnapshot(format!(
                    "物料 {} 庫存為負: {}",
                    stock.material_id, stock.on_hand_qty
                )));
            }
        }

        Ok(())
    }

    pub fn lines(&self) -> &[Line] {
        &self.data.lines
    }

    pub fn products(&self) -> &[Product] {
        &self.data.products
    }

    pub fn capabilities(&self) -> &[LineCapability] {
        &self.data.capabilities
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.data.schedule
    }

    pub fn bill_of_materials(&self) -> &[BillOfMaterialLine] {
        &self.data.bill_of_materials
    }

    pub fn materials(&self) -> &[Material] {
        &self.data.materials
    }

    pub fn stock(&self) -> &[MaterialStock] {
        &self.data.stock
    }

    pub fn line(&self, line_id: &str) -> Option<&Line> {
        self.line_index.get(line_id).map(|&i| &self.data.lines[i])
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.product_index.get(product_id).map(|&i| &self.data.products[i])
    }

    pub fn material(&self, material_id: &str) -> Option<&Material> {
        self.material_index
            .get(material_id)
            .map(|&i| &self.data.materials[i])
    }

    /// 產線能力記錄
    pub fn capability(&self, line_id: &str, product_id: &str) -> Option<&LineCapability> {
        self.data
            .capabilities
            .iter()
            .find(|c| c.line_id == line_id && c.product_id == product_id)
    }

    /// 可生產該產品的產線（依產線能力表順序，重複記錄只取第一次出現）
    pub fn capable_lines(&self, product_id: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.data
            .capabilities
            .iter()
            .filter(|c| c.product_id == product_id)
            .map(|c| c.line_id.as_str())
            .filter(|line_id| seen.insert(*line_id))
            .collect()
    }

    /// 某產線某日的所有排程（不分產品）
    pub fn entries_for<'a>(
        &'a self,
        line_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.data
            .schedule
            .iter()
            .filter(move |e| e.line_id == line_id && e.production_date == date)
    }

    /// 產品的 BOM
    pub fn bom_for(&self, product_id: &str) -> Vec<&BillOfMaterialLine> {
        self.data
            .bill_of_materials
            .iter()
            .filter(|b| b.product_id == product_id)
            .collect()
    }

    /// 物料現有庫存，沒有庫存記錄視為 0
    pub fn on_hand(&self, material_id: &str) -> Decimal {
        self.stock_index
            .get(material_id)
            .map(|&i| self.data.stock[i].on_hand_qty)
            .unwrap_or(Decimal::ZERO)
    }

    /// 物料短缺量，需求量不超過現有庫存時回傳 None
    pub fn shortage_for(&self, material_id: &str, required: Decimal) -> Option<Decimal> {
        let on_hand = self.on_hand(material_id);
        (required > on_hand).then(|| required - on_hand)
    }
}

impl TryFrom<SnapshotData> for PlanningSnapshot {
    type Error = SimError;

    fn try_from(data: SnapshotData) -> crate::Result<Self> {
        Self::new(data)
    }
}

impl From<PlanningSnapshot> for SnapshotData {
    fn from(snapshot: PlanningSnapshot) -> Self {
        snapshot.data
    }
}

/// 建立 ID 索引，重複 ID 回傳錯誤
fn index_by<T>(
    items: &[T],
    key: impl Fn(&T) -> &str,
    kind: &str,
) -> crate::Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let id = key(item);
        if index.insert(id.to_string(), i).is_some() {
            return Err(SimError::DuplicateRecord(format!("{} {}", kind, id)));
        }
    }
    Ok(index)
}
