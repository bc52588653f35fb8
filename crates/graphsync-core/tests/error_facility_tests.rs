use graphsync_core::errors::{ExError, ExErrorKind, GraphSyncError};
use graphsync_core::schema::OP_LOAD_RULES;
use graphsync_core::{AttributeDiffer, Record, Rule, RuleSet, Side};

#[test]
fn test_empty_field_name_verifiable_by_kind() {
    let err = GraphSyncError::EmptyFieldName {
        rule_index: 3,
        side: Side::Remote,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingFieldName);
    assert_eq!(ex_err.code(), "ERR_MISSING_FIELD_NAME");
    assert_eq!(ex_err.rule_index(), Some(3));
    assert_eq!(ex_err.side(), Some(Side::Remote));
    assert_eq!(ex_err.field(), None);
}

#[test]
fn test_unreadable_field_structured_fields() {
    let err = GraphSyncError::UnreadableField {
        rule_index: 0,
        side: Side::Local,
        field: "daily_budget".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::UnreadableField);
    assert_eq!(ex_err.code(), "ERR_UNREADABLE_FIELD");
    assert_eq!(ex_err.field(), Some("daily_budget"));
    assert!(ex_err.message().contains("does not expose field 'daily_budget'"));
}

#[test]
fn test_unknown_side_distinct_from_unreadable_field() {
    let err = GraphSyncError::UnknownCanonicalSide {
        value: "node_a".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::UnknownCanonicalSide);
    assert_ne!(ex_err.kind(), ExErrorKind::UnreadableField);
    assert!(ex_err.message().contains("node_a"));
    assert_eq!(ex_err.rule_index(), None);
}

#[test]
fn test_invalid_rule_set_carries_load_op() {
    let err = RuleSet::from_json(r#"{"local_field": "a"}"#).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidRuleSet);
    assert_eq!(ex_err.code(), "ERR_INVALID_RULE_SET");
    assert_eq!(ex_err.op(), Some(OP_LOAD_RULES));
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::MissingFieldName,
        ExErrorKind::UnreadableField,
        ExErrorKind::UnknownCanonicalSide,
        ExErrorKind::InvalidRuleSet,
    ];

    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
}

#[test]
fn test_all_domain_errors_are_configuration_errors() {
    let errors = [
        GraphSyncError::EmptyFieldName {
            rule_index: 0,
            side: Side::Local,
        },
        GraphSyncError::UnreadableField {
            rule_index: 0,
            side: Side::Local,
            field: "x".to_string(),
        },
        GraphSyncError::UnknownCanonicalSide {
            value: "both".to_string(),
        },
        GraphSyncError::InvalidRuleSet {
            reason: "empty".to_string(),
        },
    ];

    for err in errors {
        assert!(err.is_configuration_error(), "{err}");
    }
}

#[test]
fn test_every_kind_is_produced_by_a_domain_error() {
    let produced: Vec<ExErrorKind> = [
        GraphSyncError::EmptyFieldName {
            rule_index: 0,
            side: Side::Local,
        },
        GraphSyncError::UnreadableField {
            rule_index: 0,
            side: Side::Remote,
            field: "budget".to_string(),
        },
        GraphSyncError::UnknownCanonicalSide {
            value: "node_a".to_string(),
        },
        GraphSyncError::InvalidRuleSet {
            reason: "expected array".to_string(),
        },
    ]
    .into_iter()
    .map(|err| ExError::from(err).kind())
    .collect();

    // exhaustive match: a new kind fails to compile until it is listed here
    let listed = |kind: ExErrorKind| match kind {
        ExErrorKind::MissingFieldName
        | ExErrorKind::UnreadableField
        | ExErrorKind::UnknownCanonicalSide
        | ExErrorKind::InvalidRuleSet => true,
    };
    assert!(produced.iter().all(|&k| listed(k)));
    assert_eq!(
        produced,
        vec![
            ExErrorKind::MissingFieldName,
            ExErrorKind::UnreadableField,
            ExErrorKind::UnknownCanonicalSide,
            ExErrorKind::InvalidRuleSet,
        ]
    );
}

#[test]
fn test_first_violation_is_reported() {
    let local = Record::new().with("a", 1);
    let remote = Record::new().with("b", 1);
    let rules = [
        Rule::field("a", "b", Side::Local),
        Rule::field("a", "missing", Side::Local),
        Rule::field("", "b", Side::Local),
    ];

    let err = AttributeDiffer::new(&local, &remote, &rules)
        .validate()
        .unwrap_err();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::UnreadableField);
    assert_eq!(ex_err.rule_index(), Some(1));
    assert_eq!(ex_err.side(), Some(Side::Remote));
    assert_eq!(
        ex_err.to_string(),
        "[ERR_UNREADABLE_FIELD]: Rule 1: remote node does not expose field 'missing' (rule: 1) (side: remote) (field: missing)"
    );
}
