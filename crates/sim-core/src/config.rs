//! 模擬器配置

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 模擬器參數配置
///
/// 由呼叫端明確傳入，核心不讀取任何全域狀態。預設值即標準行為。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// 是否允許擠掉彈性排程
    /// - true: 剩餘產能不足時可擠掉彈性排程（預設）
    /// - false: 只使用剩餘產能
    pub allow_flexible_displacement: bool,

    /// 最早可生產日期，早於此日期的排程不納入模擬（通常為「今天」）
    pub earliest_production_date: Option<NaiveDate>,
}

impl SimulatorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            allow_flexible_displacement: true,
            earliest_production_date: None,
        }
    }

    /// 建構器模式：設置是否允許擠掉彈性排程
    pub fn with_flexible_displacement(mut self, allow: bool) -> Self {
        self.allow_flexible_displacement = allow;
        self
    }

    /// 建構器模式：設置最早可生產日期
    pub fn with_earliest_production_date(mut self, date: NaiveDate) -> Self {
        self.earliest_production_date = Some(date);
        self
    }

    /// 檢查日期是否落在模擬時間窗內
    pub fn in_window(&self, date: NaiveDate, due_date: NaiveDate) -> bool {
        if date > due_date {
            return false;
        }
        match self.earliest_production_date {
            Some(earliest) => date >= earliest,
            None => true,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
