//! 促銷追加需求模擬範例
//!
//! 展示從載入快照到產生 DC 回覆的完整流程

use promo_sim::{PlanningSnapshot, SimulationRequest, Simulator, SimulatorConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("===== Promo Request Simulation Example =====\n");

    // 步驟 1: 載入規劃快照
    println!("[1] Load Planning Snapshot");
    let snapshot = PlanningSnapshot::from_json_str(include_str!("data/plant_snapshot.json"))?;
    println!(
        "    Lines: {}, Schedule entries: {}, BOM lines: {}\n",
        snapshot.lines().len(),
        snapshot.schedule().len(),
        snapshot.bill_of_materials().len()
    );

    // 步驟 2: DC 追加需求
    println!("[2] DC Request");
    let request = SimulationRequest::parse("SKU-COLA-12".to_string(), 18_000, "2025-11-04")?
        .with_source_ref("DC-NORTH-PROMO-07".to_string());
    println!(
        "    {} x {} cases by {}\n",
        request.product_id, request.requested_extra_cases, request.due_date
    );

    // 步驟 3: 執行模擬
    println!("[3] Simulate");
    let simulator = Simulator::new(SimulatorConfig::default());
    let result = simulator.simulate(&request, &snapshot)?;
    println!("    Done in {} ms\n", result.calculation_time_ms.unwrap_or(0));

    // 步驟 4: 顯示結果
    println!("[4] Result");
    println!("    Feasible: {}", result.feasible);
    println!("    {}\n", result.message);

    if !result.plan.is_empty() {
        println!("    Line | Date       | Planned | Free Cap Used | Flex Bumped");
        for step in &result.plan {
            println!(
                "    {:<4} | {} | {:>7} | {:>13} | {:>11}",
                step.line_id,
                step.production_date,
                step.allocated_cases,
                step.used_headroom,
                step.bumped_flexible
            );
        }
        println!();
    }

    if !result.material_shortages.is_empty() {
        println!("    Material constraints:");
        for description in result.material_descriptions() {
            println!("      - {}", description);
        }
    }

    if !result.capacity_shortages.is_empty() {
        println!("    Capacity notes:");
        for description in result.capacity_descriptions() {
            println!("      - {}", description);
        }
    }

    // 步驟 5: 不擠彈性排程的保守方案
    println!("\n[5] Headroom-only Variant");
    let conservative = Simulator::new(SimulatorConfig::new().with_flexible_displacement(false));
    let result = conservative.simulate(&request, &snapshot)?;
    println!("    {}", result.message);

    Ok(())
}
