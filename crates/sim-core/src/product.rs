//! 產品模型

use serde::{Deserialize, Serialize};

/// 成品 SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
}

impl Product {
    pub fn new(product_id: String, product_name: String) -> Self {
        Self {
            product_id,
            product_name,
        }
    }
}
