//! 排程看板指標範例

use chrono::NaiveDate;
use promo_sim::kpi::{inventory_risk, scheduled_runs, KpiCalculator};
use promo_sim::model::{DcRequest, DcRequestStatus, PlanningSnapshot};
use promo_sim::Simulator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let snapshot = PlanningSnapshot::from_json_str(include_str!("data/plant_snapshot.json"))?;
    let dc_requests = load_dc_requests()?;

    println!("===== Factory Control Tower =====\n");

    let summary = KpiCalculator::summarize(&snapshot, &dc_requests);
    println!("Flexible slots: {}", summary.flexible_slots_count);
    println!("Pending DC requests: {}\n", summary.pending_dc_requests);

    println!("Line utilization:");
    for row in &summary.line_utilization {
        let pct = row
            .utilization_pct
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {} {} {:>6} / {:>6} cases ({}) headroom {}",
            row.date, row.line_name, row.total_cases, row.daily_capacity_cases, pct, row.headroom_cases
        );
    }

    println!("\nScheduled runs:");
    for run in scheduled_runs(&snapshot) {
        println!(
            "  {} {} {} {} cases, {} h [{}]",
            run.production_date,
            run.line_id,
            run.product_name,
            run.planned_qty_cases,
            run.hours_needed.round_dp(1),
            if run.is_firm { "Firm" } else { "Flexible" }
        );
    }

    println!("\nInventory (long lead time first):");
    for position in inventory_risk(&snapshot) {
        let lead = position
            .supplier_lead_time_days
            .map(|d| format!("{}d", d))
            .unwrap_or_else(|| "?".to_string());
        println!("  {} {} on hand, lead {}", position.material_name, position.on_hand_qty, lead);
    }

    // 待審請求逐筆獨立模擬
    println!("\nPending request check:");
    let pending: Vec<_> = dc_requests
        .iter()
        .filter(|r| r.is_pending())
        .map(DcRequest::to_simulation_request)
        .collect();
    let results = Simulator::default().simulate_batch(&pending, &snapshot);
    for (request, result) in pending.iter().zip(results) {
        let result = result?;
        println!(
            "  {} -> {}",
            request.source_ref.as_deref().unwrap_or("-"),
            result.message
        );
    }

    Ok(())
}

fn load_dc_requests() -> anyhow::Result<Vec<DcRequest>> {
    let at = |d: u32, h: u32| {
        NaiveDate::from_ymd_opt(2025, 10, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .ok_or_else(|| anyhow::anyhow!("invalid timestamp"))
    };
    let due = |d: u32| {
        NaiveDate::from_ymd_opt(2025, 11, d).ok_or_else(|| anyhow::anyhow!("invalid due date"))
    };

    Ok(vec![
        DcRequest {
            request_id: "REQ-101".to_string(),
            dc_id: "DC-NORTH".to_string(),
            requested_at: at(30, 9)?,
            product_id: "SKU-COLA-12".to_string(),
            requested_qty_cases: 6_000,
            requested_due_date: due(3)?,
            promo_reason: Some("Weekend endcap".to_string()),
            status: DcRequestStatus::Pending,
        },
        DcRequest {
            request_id: "REQ-102".to_string(),
            dc_id: "DC-SOUTH".to_string(),
            requested_at: at(30, 14)?,
            product_id: "SKU-WATER-1L".to_string(),
            requested_qty_cases: 2_000,
            requested_due_date: due(4)?,
            promo_reason: Some("Heat wave".to_string()),
            status: DcRequestStatus::Pending,
        },
        DcRequest {
            request_id: "REQ-099".to_string(),
            dc_id: "DC-NORTH".to_string(),
            requested_at: at(28, 11)?,
            product_id: "SKU-LEMON-20".to_string(),
            requested_qty_cases: 1_500,
            requested_due_date: due(4)?,
            promo_reason: None,
            status: DcRequestStatus::Approved,
        },
    ])
}
