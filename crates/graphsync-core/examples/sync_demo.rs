//! Sync Demo
//!
//! Walks one synchronization pass for an ad-group collection:
//! 1. Classify local and remote nodes into reconciliation actions
//! 2. Compute attribute updates for every matched pair
//! 3. Load the same rules from JSON

use graphsync_core::logging_facility::{init, Profile};
use graphsync_core::{compute_updates, Node, Record, Rule, RuleSet, SetReconciler, Side};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== GraphSync Demo ===\n");

    // ===== Part 1: Set reconciliation =====
    println!("## Part 1: Set reconciliation\n");

    let local = vec![
        Record::new()
            .with("id", 1)
            .with("remote_id", "ag-1")
            .with("status", "enabled")
            .with("name", "Brand terms")
            .with("daily_budget", 500),
        Record::new()
            .with("id", 2)
            .with("remote_id", "ag-2")
            .with("status", "paused")
            .with("name", "Competitors")
            .with("daily_budget", 200),
        Record::new()
            .with("id", 3)
            .with("remote_id", json!(null))
            .with("status", "enabled")
            .with("name", "Long tail")
            .with("daily_budget", 100),
    ];
    let remote = vec![
        json!({"id": "ag-1", "remote_id": "ag-1", "status": "PAUSED", "title": "Brand", "budget": 500}),
        json!({"id": "ag-2", "remote_id": "ag-2", "status": "ENABLED", "title": "Competitors", "budget": 250}),
        json!({"id": "ag-9", "remote_id": "ag-9", "status": "ENABLED", "title": "Stale", "budget": 50}),
    ];

    let reconciler = SetReconciler::new(&local, &remote, "remote_id");
    let plan = reconciler.plan();

    for node in &plan.to_create {
        println!("create  {}", node.attr("name").unwrap_or_default());
    }
    for node in &plan.to_delete {
        println!("delete  {}", node.attr("remote_id").unwrap_or_default());
    }
    for node in &plan.to_pause {
        println!("pause   {}", node.attr("name").unwrap_or_default());
    }
    for node in &plan.to_enable {
        println!("enable  {}", node.attr("name").unwrap_or_default());
    }
    println!("\nsummary: {}\n", serde_json::to_string(&plan.summary())?);

    // ===== Part 2: Attribute diff =====
    println!("## Part 2: Attribute diff\n");

    let rules = RuleSet::new()
        .with(Rule::field("name", "title", Side::Local))
        .with(Rule::field("daily_budget", "budget", Side::Local));

    for local_node in &local {
        let Some(remote_id) = local_node.remote_id("remote_id") else {
            continue;
        };
        let Some(remote_node) = remote
            .iter()
            .find(|r| r.remote_id("remote_id").as_ref() == Some(&remote_id))
        else {
            continue;
        };

        let updates = compute_updates(local_node, remote_node, rules.as_slice())?;
        println!(
            "{} -> remote {}",
            remote_id,
            serde_json::to_string(&updates.remote)?
        );
    }
    println!();

    // ===== Part 3: Declarative rules =====
    println!("## Part 3: Declarative rules\n");

    let loaded = RuleSet::from_json(
        r#"[
            {"local_field": "name", "remote_field": "title", "canonical_side": "local"},
            {"local_field": "status", "remote_field": "status", "canonical_side": "local",
             "equivalents": {"active": "enabled"}}
        ]"#,
    )?;
    println!("loaded {} rules", loaded.len());

    match RuleSet::from_json(
        r#"[{"local_field": "name", "remote_field": "title", "canonical_side": "node_a"}]"#,
    ) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
