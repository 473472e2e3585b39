//! 排程模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 已排定的生產批次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 產線ID
    pub line_id: String,

    /// 生產日期
    pub production_date: NaiveDate,

    /// 產品ID
    pub product_id: String,

    /// 計劃數量（箱）
    pub planned_qty_cases: i64,

    /// 是否為確定排程
    /// - true: 不可移動，模擬時絕不會被擠掉
    /// - false: 彈性排程，可被部分擠掉以容納新需求
    pub is_firm: bool,
}

impl ScheduleEntry {
    /// 創建新的排程記錄（預設為彈性排程）
    pub fn new(
        line_id: String,
        production_date: NaiveDate,
        product_id: String,
        planned_qty_cases: i64,
    ) -> Self {
        Self {
            line_id,
            production_date,
            product_id,
            planned_qty_cases,
            is_firm: false,
        }
    }

    /// 建構器模式：設置是否為確定排程
    pub fn with_firm(mut self, is_firm: bool) -> Self {
        self.is_firm = is_firm;
        self
    }

    /// 檢查是否為彈性排程
    pub fn is_flexible(&self) -> bool {
        !self.is_firm
    }
}
