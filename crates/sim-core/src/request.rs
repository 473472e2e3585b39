//! 模擬請求與物流中心（DC）請求模型

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, SimError};

/// 解析交期字串
///
/// 接受 `YYYY-MM-DD`，以及 ISO 日期時間（只保留日期部分）。
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    Err(SimError::InvalidDate(input.to_string()))
}

/// 模擬請求：「能否在 D 日前多交 N 箱產品 P？」
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// 請求ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 追加需求箱數
    pub requested_extra_cases: i64,

    /// 交期（日曆日，不含時間）
    pub due_date: NaiveDate,

    /// 來源單據（如 DC 請求編號）
    pub source_ref: Option<String>,
}

impl SimulationRequest {
    /// 創建新的模擬請求（不做驗證，見 [`SimulationRequest::validate`]）
    pub fn new(product_id: String, requested_extra_cases: i64, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            requested_extra_cases,
            due_date,
            source_ref: None,
        }
    }

    /// 從字串交期創建並驗證請求
    pub fn parse(product_id: String, requested_extra_cases: i64, due_date: &str) -> Result<Self> {
        let due_date = parse_due_date(due_date)?;
        let request = Self::new(product_id, requested_extra_cases, due_date);
        request.validate()?;
        Ok(request)
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 驗證請求，箱數必須大於 0
    pub fn validate(&self) -> Result<()> {
        if self.requested_extra_cases <= 0 {
            return Err(SimError::InvalidQuantity(self.requested_extra_cases));
        }
        Ok(())
    }
}

/// DC 請求狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DcRequestStatus {
    /// 待審
    Pending,
    /// 已核准
    Approved,
    /// 已拒絕
    Rejected,
}

/// 物流中心提出的促銷追加需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcRequest {
    pub request_id: String,
    pub dc_id: String,
    pub requested_at: NaiveDateTime,
    pub product_id: String,
    pub requested_qty_cases: i64,
    pub requested_due_date: NaiveDate,
    pub promo_reason: Option<String>,
    pub status: DcRequestStatus,
}

impl DcRequest {
    /// 檢查是否待審
    pub fn is_pending(&self) -> bool {
        self.status == DcRequestStatus::Pending
    }

    /// 轉換為模擬請求
    pub fn to_simulation_request(&self) -> SimulationRequest {
        SimulationRequest::new(
            self.product_id.clone(),
            self.requested_qty_cases,
            self.requested_due_date,
        )
        .with_source_ref(self.request_id.clone())
    }
}
