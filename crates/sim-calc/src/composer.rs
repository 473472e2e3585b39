//! 結果組合：合併產能與物料檢查結果，產生可行性判定與說明文字

use rust_decimal::Decimal;
use sim_core::SimulationRequest;

use crate::allocator::Allocation;
use crate::{MaterialShortage, SimulationResult};

/// 說明文字各子句之間的分隔
pub const CLAUSE_SEPARATOR: &str = " ";

/// 物料短缺描述之間的分隔
pub const MATERIAL_SEPARATOR: &str = "; ";

/// 物料短缺子句的前綴
pub const MATERIAL_PREFIX: &str = "Material constraints: ";

/// 結果組合器
pub struct ResultComposer;

impl ResultComposer {
    /// 組合最終模擬結果
    ///
    /// 可行 = 無未滿足箱數且無物料短缺。部分可行仍回傳已分配的計劃。
    pub fn compose(
        request: &SimulationRequest,
        allocation: Allocation,
        material_shortages: Vec<MaterialShortage>,
    ) -> SimulationResult {
        let allocated_total = allocation.allocated_total();
        let remaining = allocation.remaining;
        let feasible = remaining == 0 && material_shortages.is_empty();

        let message = if feasible {
            Self::approved_message(request)
        } else {
            Self::infeasible_message(request, &allocation, &material_shortages)
        };

        SimulationResult {
            request_id: request.id,
            product_id: request.product_id.clone(),
            requested_extra_cases: request.requested_extra_cases,
            due_date: request.due_date,
            feasible,
            allocated_total,
            remaining,
            plan: allocation.steps,
            material_shortages,
            capacity_shortages: allocation.capacity_shortages,
            message,
            calculation_time_ms: None,
        }
    }

    fn approved_message(request: &SimulationRequest) -> String {
        format!(
            "We can produce all {} cases by {} without impacting firm orders. Approved.",
            format_cases(request.requested_extra_cases),
            request.due_date
        )
    }

    fn infeasible_message(
        request: &SimulationRequest,
        allocation: &Allocation,
        material_shortages: &[MaterialShortage],
    ) -> String {
        let allocated_total = allocation.allocated_total();
        let mut clauses = Vec::new();

        if allocated_total > 0 {
            clauses.push(format!(
                "We can cover {} cases by {}.",
                format_cases(allocated_total),
                request.due_date
            ));
        }

        if allocation.remaining > 0 {
            if allocation.has_capable_line() {
                clauses.push(format!(
                    "Remaining {} cases need later dates or bumping firm slots.",
                    format_cases(allocation.remaining)
                ));
            } else {
                clauses.push(format!(
                    "Infeasible: no capable line for this product, {} cases remain unfulfilled.",
                    format_cases(allocation.remaining)
                ));
            }
        }

        if !material_shortages.is_empty() {
            let descriptions: Vec<String> =
                material_shortages.iter().map(|s| s.describe()).collect();
            clauses.push(format!(
                "{}{}",
                MATERIAL_PREFIX,
                descriptions.join(MATERIAL_SEPARATOR)
            ));
        }

        clauses.join(CLAUSE_SEPARATOR)
    }
}

/// 箱數加上千分位
pub fn format_cases(cases: i64) -> String {
    group_thousands(&cases.to_string())
}

/// 物料數量四捨五入到整數並加上千分位
pub fn format_quantity(quantity: Decimal) -> String {
    group_thousands(&quantity.round_dp(0).normalize().to_string())
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CapacityShortage;
    use chrono::NaiveDate;
    use rstest::rstest;
    use sim_core::AllocationStep;

    fn request(cases: i64) -> SimulationRequest {
        SimulationRequest::new(
            "SKU-1".to_string(),
            cases,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        )
    }

    fn allocation(allocated: i64, requested: i64) -> Allocation {
        let due = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        let remaining = requested - allocated;
        let steps = if allocated > 0 {
            vec![AllocationStep::split("L1".to_string(), due, allocated, allocated)]
        } else {
            Vec::new()
        };
        let capacity_shortages = if remaining > 0 {
            vec![CapacityShortage::Unfulfilled {
                remaining,
                due_date: due,
            }]
        } else {
            Vec::new()
        };
        Allocation {
            steps,
            remaining,
            capacity_shortages,
        }
    }

    fn pet_shortage() -> MaterialShortage {
        MaterialShortage::Insufficient {
            material_id: "MAT-PET".to_string(),
            material_name: "PET resin".to_string(),
            required: Decimal::from(1_800),
            on_hand: Decimal::from(500),
            shortage: Decimal::from(1_300),
            supplier_lead_time_days: Some(21),
        }
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(18_000, "18,000")]
    #[case(1_234_567, "1,234,567")]
    #[case(-4_000, "-4,000")]
    fn test_format_cases(#[case] cases: i64, #[case] expected: &str) {
        assert_eq!(format_cases(cases), expected);
    }

    #[test]
    fn test_format_quantity_rounds() {
        assert_eq!(format_quantity(Decimal::new(12_345_6, 1)), "12,346");
        assert_eq!(format_quantity(Decimal::new(3000, 1)), "300");
    }

    #[test]
    fn test_feasible() {
        let result = ResultComposer::compose(&request(3_000), allocation(3_000, 3_000), Vec::new());

        assert!(result.feasible);
        assert_eq!(result.allocated_total, 3_000);
        assert_eq!(result.remaining, 0);
        assert_eq!(
            result.message,
            "We can produce all 3,000 cases by 2025-11-03 without impacting firm orders. Approved."
        );
    }

    #[test]
    fn test_partial_with_material_shortage() {
        let result = ResultComposer::compose(
            &request(10_000),
            allocation(6_000, 10_000),
            vec![pet_shortage()],
        );

        assert!(!result.feasible);
        assert_eq!(result.plan.len(), 1);
        assert_eq!(
            result.message,
            "We can cover 6,000 cases by 2025-11-03. \
             Remaining 4,000 cases need later dates or bumping firm slots. \
             Material constraints: PET resin short by 1,300 (lead 21d)"
        );
    }

    #[test]
    fn test_material_shortage_alone_is_infeasible() {
        let result = ResultComposer::compose(
            &request(3_000),
            allocation(3_000, 3_000),
            vec![pet_shortage(), MaterialShortage::NoBillOfMaterials { product_id: "SKU-1".to_string() }],
        );

        assert!(!result.feasible);
        assert_eq!(result.remaining, 0);

        let clauses: Vec<&str> = result.message.splitn(2, MATERIAL_PREFIX).collect();
        assert_eq!(clauses[0], "We can cover 3,000 cases by 2025-11-03. ");
        assert_eq!(
            clauses[1].split(MATERIAL_SEPARATOR).collect::<Vec<_>>(),
            vec!["PET resin short by 1,300 (lead 21d)", "no BOM defined for this product"]
        );
    }

    #[test]
    fn test_nothing_allocated() {
        let result = ResultComposer::compose(&request(5_000), allocation(0, 5_000), Vec::new());

        assert!(!result.feasible);
        assert!(!result.message.contains("We can cover"));
        assert_eq!(
            result.message,
            "Remaining 5,000 cases need later dates or bumping firm slots."
        );
    }
}
