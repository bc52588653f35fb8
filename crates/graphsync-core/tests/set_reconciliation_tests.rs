//! Set reconciliation scenarios over local/remote collections.

mod common;

use common::{ids, node, positions, statusless, ID_ATTR};
use graphsync_core::{Node, Record, SetReconciler};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Mixed scenario: every action represented
// ---------------------------------------------------------------------------

fn remote_fixture() -> Vec<Record> {
    vec![
        node(1, "enabled"),   // no local counterpart -> delete
        node(2, "removed"),   // local enabled -> enable
        node(3, "PAUSED"),    // local paused -> untouched
        node(4, "enabled"),   // local paused -> pause
        node(6, "enabled"),   // local enabled -> untouched
        node(7, "removed"),   // already inactive
        node(8, "disabled"),  // local enabled -> enable
        node(11, "DISABLED"), // already inactive
        node(9, "enabled"),   // no local counterpart -> delete
    ]
}

fn local_fixture() -> Vec<Record> {
    vec![
        node(2, "enabled"),
        node(8, "enabled"),
        node(3, "paused"),
        node(6, "enabled"),
        node(4, "paused"),
        node(Value::Null, "enabled"),
        node(10, "enabled"),
        node(Value::Null, "paused"),
        node(100, "enabled"),
    ]
}

#[test]
fn test_to_create_returns_unidentified_and_unknown_enabled_nodes() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(positions(&r.to_create(), &local), vec![5, 6, 8]);
}

#[test]
fn test_to_pause_returns_only_nodes_needing_pause() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(ids(&r.to_pause()), vec![json!(4)]);
}

#[test]
fn test_to_enable_returns_only_nodes_needing_enable() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(ids(&r.to_enable()), vec![json!(2), json!(8)]);
}

#[test]
fn test_to_delete_returns_active_remote_nodes_without_counterpart() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(ids(&r.to_delete()), vec![json!(1), json!(9)]);
    assert_eq!(positions(&r.to_delete(), &remote), vec![0, 8]);
}

#[test]
fn test_to_disable_is_identical_to_to_delete() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(
        positions(&r.to_disable(), &remote),
        positions(&r.to_delete(), &remote)
    );
}

#[test]
fn test_remain_enabled_returns_enabled_nodes_in_local_order() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    // 2, 8 (to enable), 6 (untouched), unidentified, 10 (to create), 100
    assert_eq!(positions(&r.remain_enabled(), &local), vec![0, 1, 3, 5, 6, 8]);
}

#[test]
fn test_conflicting_returns_identified_nodes_missing_remotely() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(ids(&r.conflicting()), vec![json!(10), json!(100)]);
}

#[test]
fn test_paused_unidentified_node_is_ignored() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);
    let ignored = &local[7];

    let plan = r.plan();
    for bucket in [
        &plan.to_create,
        &plan.to_pause,
        &plan.to_enable,
        &plan.remain_enabled,
        &plan.conflicting,
    ] {
        assert!(!bucket.iter().any(|n| std::ptr::eq(*n, ignored)));
    }
}

// ---------------------------------------------------------------------------
// Small scenario
// ---------------------------------------------------------------------------

#[test]
fn test_three_by_three_scenario() {
    let local = vec![
        Record::new().with("id", 2).with("status", "enabled"),
        Record::new().with("id", 4).with("status", "paused"),
        Record::new().with("id", Value::Null).with("status", "enabled"),
    ];
    let remote = vec![
        Record::new().with("id", 2).with("status", "paused"),
        Record::new().with("id", 4).with("status", "enabled"),
        Record::new().with("id", 9).with("status", "enabled"),
    ];
    let r = SetReconciler::new(&local, &remote, "id");

    assert_eq!(r.to_enable(), vec![&local[0]]);
    assert_eq!(r.to_pause(), vec![&local[1]]);
    assert_eq!(r.to_delete(), vec![&remote[2]]);
    assert_eq!(r.to_create(), vec![&local[2]]);
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_status_case_variants_are_equivalent() {
    let remote = vec![node(1, "enabled")];
    for token in ["PAUSED", "Paused", "paused"] {
        let local = vec![node(1, token)];
        let r = SetReconciler::new(&local, &remote, ID_ATTR);
        assert_eq!(r.to_pause().len(), 1, "token {token}");
        assert!(r.to_enable().is_empty());
    }
}

#[test]
fn test_unidentified_nodes_never_merge() {
    let local = vec![node(Value::Null, "enabled"), node("", "enabled")];
    let remote = vec![node(Value::Null, "paused")];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(r.to_create().len(), 2);
    assert!(r.to_enable().is_empty());
    assert!(r.conflicting().is_empty());
    // the remote node cannot be paired either
    assert_eq!(r.to_delete(), vec![&remote[0]]);
}

#[test]
fn test_falsy_identifier_is_normalized() {
    let local = vec![node(false, "enabled")];
    let remote: Vec<Record> = vec![];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(r.to_create().len(), 1);
    assert!(r.conflicting().is_empty());
}

#[test]
fn test_statusless_nodes_degrade_gracefully() {
    let local = vec![statusless(1), statusless(2)];
    let remote = vec![node(1, "paused"), statusless(3)];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert!(r.to_create().is_empty());
    assert!(r.to_pause().is_empty());
    assert!(r.to_enable().is_empty());
    assert!(r.remain_enabled().is_empty());
    assert_eq!(ids(&r.to_delete()), vec![json!(3)]);
    assert_eq!(ids(&r.conflicting()), vec![json!(2)]);
}

#[test]
fn test_enable_against_statusless_remote() {
    let local = vec![node(5, "enabled")];
    let remote = vec![statusless(5)];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(r.to_enable().len(), 1);
}

#[test]
fn test_numeric_and_text_identifiers_do_not_match() {
    let local = vec![node(7, "enabled")];
    let remote = vec![node("7", "enabled")];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(r.to_create().len(), 1);
    assert_eq!(r.to_delete().len(), 1);
}

#[test]
fn test_integral_float_identifier_matches_integer() {
    let local = vec![Record::new().with("id", 2).with("status", "enabled")];
    let remote = vec![json!({"id": 2.0, "status": "enabled"})];
    let r = SetReconciler::new(&local, &remote, "id");

    assert!(r.to_create().is_empty());
    assert!(r.to_delete().is_empty());
    assert!(r.conflicting().is_empty());
    assert_eq!(positions(&r.remain_enabled(), &local), vec![0]);
}

#[test]
fn test_fractional_float_identifier_does_not_match_integer() {
    let local = vec![node(2, "enabled")];
    let remote = vec![node(2.5, "enabled")];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(r.to_create().len(), 1);
    assert_eq!(r.to_delete().len(), 1);
}

#[test]
fn test_heterogeneous_node_types() {
    struct AdGroup {
        remote_id: Option<&'static str>,
        status: &'static str,
    }

    impl Node for AdGroup {
        fn attr(&self, name: &str) -> Option<Value> {
            match name {
                "remote_id" => Some(self.remote_id.map(Value::from).unwrap_or(Value::Null)),
                "status" => Some(Value::from(self.status)),
                _ => None,
            }
        }
    }

    let local = vec![
        AdGroup {
            remote_id: Some("ag-1"),
            status: "paused",
        },
        AdGroup {
            remote_id: None,
            status: "enabled",
        },
    ];
    let remote = vec![json!({"remote_id": "ag-1", "status": "ENABLED"})];
    let r = SetReconciler::new(&local, &remote, ID_ATTR);

    assert_eq!(positions(&r.to_pause(), &local), vec![0]);
    assert_eq!(positions(&r.to_create(), &local), vec![1]);
    assert!(r.to_delete().is_empty());
}

#[test]
fn test_plan_matches_individual_operations() {
    let (local, remote) = (local_fixture(), remote_fixture());
    let r = SetReconciler::new(&local, &remote, ID_ATTR);
    let plan = r.plan();

    assert_eq!(plan.to_create, r.to_create());
    assert_eq!(plan.to_delete, r.to_delete());
    assert_eq!(plan.to_disable, r.to_disable());
    assert_eq!(plan.to_pause, r.to_pause());
    assert_eq!(plan.to_enable, r.to_enable());
    assert_eq!(plan.remain_enabled, r.remain_enabled());
    assert_eq!(plan.conflicting, r.conflicting());

    let summary = plan.summary();
    assert_eq!(summary.to_create, 3);
    assert_eq!(summary.to_delete, 2);
    assert_eq!(summary.to_pause, 1);
    assert_eq!(summary.to_enable, 2);
    assert_eq!(summary.remain_enabled, 6);
    assert_eq!(summary.conflicting, 2);
    assert!(!plan.is_converged());
}

#[test]
fn test_converged_collections() {
    let local = vec![node(1, "enabled"), node(2, "paused")];
    let remote = vec![node(1, "Enabled"), node(2, "PAUSED")];
    let plan = SetReconciler::new(&local, &remote, ID_ATTR).plan();

    assert!(plan.is_converged());
    assert_eq!(plan.remain_enabled.len(), 1);
}
