//! Integration tests for bulk insert result normalization.
//!
//! These tests drive both protocol eras through the public API with replies
//! shaped like the ones servers send, and check that every reported failure
//! lands on the caller's original document.

use bulk_insert_result::{
    BulkInsertSummary, InsertResult, InsertResultConfig, InsertResultError, LegacyInsertResult,
    ModernInsertResult, ProtocolEra, insert_result_for,
};
use bulk_insert_shared::{BaseResult, IndexMap, Reply, WriteErrorRecord};
use serde_json::json;

fn ok_reply(n: u64) -> Reply {
    Reply::from_value(json!({ "ok": 1, "n": n }))
}

fn dup_reply(n: u64, indexes: &[usize]) -> Reply {
    let write_errors: Vec<_> = indexes
        .iter()
        .map(|index| json!({ "index": index, "code": 11000, "errmsg": "dup" }))
        .collect();
    Reply::from_value(json!({ "ok": 1, "n": n, "writeErrors": write_errors }))
}

#[test]
fn test_all_successful_replies_report_no_errors() {
    let base = BaseResult::new(vec![
        Reply::from_value(json!({ "ok": 1 })),
        Reply::from_value(json!({ "ok": 1 })),
        Reply::from_value(json!({ "ok": 1 })),
    ]);
    let index_map = IndexMap::new(vec![0, 1, 2]);
    let result = LegacyInsertResult::new(&base, &index_map);

    assert_eq!(result.aggregate_write_errors(), Ok(None));
    assert_eq!(result.inserted_count(), 3);
    assert_eq!(result.validate(), Ok(3));
}

#[test]
fn test_modern_single_batch_remaps_index() {
    let base = BaseResult::new(vec![Reply::from_value(json!({
        "writeErrors": [{ "index": 1, "code": 11000, "errmsg": "dup" }],
    }))]);
    let index_map = IndexMap::new(vec![10, 11, 12]);
    let result = ModernInsertResult::new(&base, &index_map);

    assert_eq!(
        result.aggregate_write_errors(),
        Ok(Some(vec![WriteErrorRecord::new(11, 11000, "dup")]))
    );
}

#[test]
fn test_modern_second_batch_uses_batch_offset() {
    let base = BaseResult::new(vec![ok_reply(3), dup_reply(2, &[0])]);
    let index_map = IndexMap::from_batches(vec![vec![0, 1, 2], vec![3, 4, 5]]);
    let result = ModernInsertResult::new(&base, &index_map);

    let errors = result.aggregate_write_errors().unwrap().unwrap();
    assert_eq!(errors, vec![WriteErrorRecord::new(3, 11000, "dup")]);
    assert_eq!(result.inserted_count(), 5);
}

#[test]
fn test_modern_index_is_never_batch_relative() {
    // Reordered split: the emitted index must come from the map, not the reply.
    let base = BaseResult::new(vec![dup_reply(1, &[1]), dup_reply(2, &[0, 2])]);
    let index_map = IndexMap::from_batches(vec![vec![9, 4], vec![7, 0, 2]]);
    let result = ModernInsertResult::new(&base, &index_map);

    let indexes: Vec<usize> = result
        .aggregate_write_errors()
        .unwrap()
        .unwrap()
        .iter()
        .map(|record| record.index)
        .collect();
    assert_eq!(indexes, vec![4, 7, 2]);
}

#[test]
fn test_modern_first_per_batch_policy() {
    let base = BaseResult::new(vec![dup_reply(1, &[1]), dup_reply(0, &[0, 1, 2])]);
    let index_map = IndexMap::from_batches(vec![vec![0, 1], vec![2, 3, 4]]);
    let result = ModernInsertResult::with_config(
        &base,
        &index_map,
        InsertResultConfig::first_error_per_batch(),
    );

    let errors = result.aggregate_write_errors().unwrap().unwrap();
    assert_eq!(
        errors,
        vec![
            WriteErrorRecord::new(1, 11000, "dup"),
            WriteErrorRecord::new(2, 11000, "dup"),
        ]
    );
}

#[test]
fn test_legacy_failure_in_middle() {
    let base = BaseResult::new(vec![
        Reply::from_value(json!({ "ok": 1, "err": null })),
        // Status checks report `ok: 1` even when the document was rejected.
        Reply::from_value(json!({ "ok": 1, "err": "E11000 duplicate key", "code": 11000 })),
        Reply::from_value(json!({ "ok": 1, "err": null })),
    ]);
    let index_map = IndexMap::new(vec![7, 8, 9]);
    let result = LegacyInsertResult::new(&base, &index_map);

    assert_eq!(
        result.aggregate_write_errors(),
        Ok(Some(vec![WriteErrorRecord::new(8, 11000, "E11000 duplicate key")]))
    );
    assert_eq!(result.inserted_count(), 2);
}

#[test]
fn test_legacy_unacknowledged_ignores_replies() {
    let base = BaseResult::unacknowledged(vec![
        Reply::from_value(json!({ "ok": 1 })),
        Reply::from_value(json!({ "ok": 1 })),
    ]);
    let index_map = IndexMap::identity(2);
    let result = LegacyInsertResult::new(&base, &index_map);

    assert_eq!(result.inserted_count(), 0);
}

#[test]
fn test_aggregation_is_repeatable() {
    let base = BaseResult::new(vec![ok_reply(2), dup_reply(1, &[1])]);
    let index_map = IndexMap::from_batches(vec![vec![0, 1], vec![2, 3]]);
    let result = ModernInsertResult::new(&base, &index_map);

    let first = result.aggregate_write_errors();
    let second = result.aggregate_write_errors();
    assert_eq!(first, second);
    assert!(first.unwrap().is_some());
}

#[test]
fn test_summary_and_validate_share_errors() {
    let base = BaseResult::new(vec![
        Reply::from_value(json!({ "ok": 1 })),
        Reply::from_value(json!({ "ok": 0, "err": "dup", "code": 11000 })),
    ]);
    let index_map = IndexMap::new(vec![4, 5]);
    let result = insert_result_for(
        ProtocolEra::from_max_wire_version(1),
        &base,
        &index_map,
        InsertResultConfig::default(),
    );

    let expected = vec![WriteErrorRecord::new(5, 11000, "dup")];
    assert_eq!(
        result.summary(),
        Ok(BulkInsertSummary {
            acknowledged: true,
            inserted_count: 1,
            write_errors: expected.clone(),
        })
    );
    assert_eq!(
        result.validate(),
        Err(InsertResultError::bulk_write_failure(expected))
    );
}

#[test]
fn test_modern_reply_without_matching_batch_is_an_error() {
    // A multi-batch reply stream with a single-batch map cannot be resolved.
    let base = BaseResult::new(vec![ok_reply(3), dup_reply(2, &[0])]);
    let index_map = IndexMap::identity(6);
    let result = insert_result_for(
        ProtocolEra::WriteCommand,
        &base,
        &index_map,
        InsertResultConfig::default(),
    );

    assert_eq!(
        result.summary(),
        Err(InsertResultError::missing_batch(1, 1))
    );
}
