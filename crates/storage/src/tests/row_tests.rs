use super::{create_test_row, create_test_storage};
use crate::{RowStore, StorageError};
use incident_tracker_core::{PageRequest, RowFilter, RowPatch};

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn create_assigns_increasing_ids() {
    let storage = create_test_storage().await;
    let first = storage.create_row(create_test_row("INC-1", "alice")).await.unwrap();
    let second = storage.create_row(create_test_row("INC-2", "bob")).await.unwrap();
    assert!(second.id > first.id);

    let rows = storage.list_rows().await.unwrap();
    assert_eq!(rows, vec![first, second]);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn get_row_returns_none_for_missing_id() {
    let storage = create_test_storage().await;
    assert!(storage.get_row(42).await.unwrap().is_none());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn update_changes_only_patched_fields() {
    let storage = create_test_storage().await;
    let row = storage.create_row(create_test_row("INC-1", "alice")).await.unwrap();

    let patch = RowPatch {
        assigned_to: Some("carol".to_owned()),
        in_scope: Some("No".to_owned()),
        ..RowPatch::default()
    };
    let updated = storage.update_row(row.id, &patch).await.unwrap();
    assert_eq!(updated.assigned_to, "carol");
    assert_eq!(updated.in_scope, "No");
    assert_eq!(updated.incident, "INC-1");

    let fetched = storage.get_row(row.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
    let storage = create_test_storage().await;
    let err = storage.update_row(999, &RowPatch::default()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "row", ref id } if id == "999"));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn delete_removes_row() {
    let storage = create_test_storage().await;
    let row = storage.create_row(create_test_row("INC-1", "alice")).await.unwrap();
    storage.delete_row(row.id).await.unwrap();
    assert!(storage.list_rows().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_row_is_not_found() {
    let storage = create_test_storage().await;
    let err = storage.delete_row(12345).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn filter_matches_incident_or_assignee_case_insensitively() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("Foo outage", "alice")).await.unwrap();
    storage.create_row(create_test_row("Disk alert", "FOOster")).await.unwrap();
    storage.create_row(create_test_row("Network", "bob")).await.unwrap();

    let filter = RowFilter::new(Some("foo".to_owned()), vec![]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 2);
    let incidents: Vec<_> = page.items.iter().map(|r| r.incident.as_str()).collect();
    assert_eq!(incidents, vec!["Foo outage", "Disk alert"]);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn filter_folds_non_ascii_case() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("École réseau down", "alice")).await.unwrap();
    storage.create_row(create_test_row("Disk alert", "Ødegaard")).await.unwrap();
    storage.create_row(create_test_row("ecole", "bob")).await.unwrap();

    for search in ["école", "ÉCOLE", "éCoLe RÉSEAU"] {
        let filter = RowFilter::new(Some(search.to_owned()), vec![]);
        let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1, "search {search:?}");
        assert_eq!(page.items[0].incident, "École réseau down");
    }

    let filter = RowFilter::new(Some("øDEGAARD".to_owned()), vec![]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].assigned_to, "Ødegaard");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn update_refreshes_folded_search_columns() {
    let storage = create_test_storage().await;
    let row = storage.create_row(create_test_row("INC-1", "alice")).await.unwrap();

    let patch = RowPatch {
        incident: Some("Ärger im Netz".to_owned()),
        assigned_to: Some("Åsa".to_owned()),
        ..RowPatch::default()
    };
    storage.update_row(row.id, &patch).await.unwrap();

    let by_incident = RowFilter::new(Some("ärger".to_owned()), vec![]);
    assert_eq!(storage.list_rows_page(&by_incident, PageRequest::default()).await.unwrap().total, 1);
    let by_assignee = RowFilter::new(Some("ÅSA".to_owned()), vec![]);
    assert_eq!(storage.list_rows_page(&by_assignee, PageRequest::default()).await.unwrap().total, 1);
    let stale = RowFilter::new(Some("inc-1".to_owned()), vec![]);
    assert_eq!(storage.list_rows_page(&stale, PageRequest::default()).await.unwrap().total, 0);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn filter_escapes_like_wildcards() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("100% cpu", "alice")).await.unwrap();
    storage.create_row(create_test_row("1000 errors", "bob")).await.unwrap();

    let filter = RowFilter::new(Some("0%".to_owned()), vec![]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].incident, "100% cpu");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn assignee_set_is_exact_match() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("INC-1", "alice")).await.unwrap();
    storage.create_row(create_test_row("INC-2", "alice smith")).await.unwrap();
    storage.create_row(create_test_row("INC-3", "bob")).await.unwrap();
    storage.create_row(create_test_row("INC-4", "carol")).await.unwrap();

    let filter = RowFilter::new(None, vec!["alice".to_owned(), "bob".to_owned()]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    let incidents: Vec<_> = page.items.iter().map(|r| r.incident.as_str()).collect();
    assert_eq!(incidents, vec!["INC-1", "INC-3"]);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn search_and_assignees_combine() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("db outage", "alice")).await.unwrap();
    storage.create_row(create_test_row("db slow", "bob")).await.unwrap();
    storage.create_row(create_test_row("web outage", "alice")).await.unwrap();

    let filter = RowFilter::new(Some("db".to_owned()), vec!["alice".to_owned()]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].incident, "db outage");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn pagination_counts_are_consistent() {
    let storage = create_test_storage().await;
    for i in 0..23 {
        storage.create_row(create_test_row(&format!("INC-{i}"), "alice")).await.unwrap();
    }

    let first = storage.list_rows_page(&RowFilter::default(), PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(first.total, 23);
    assert_eq!(first.pages(), 3);
    assert_eq!(first.items.len(), 10);
    assert!(first.has_next());
    assert!(!first.has_prev());

    let last = storage.list_rows_page(&RowFilter::default(), PageRequest::new(3, 10)).await.unwrap();
    assert_eq!(last.items.len(), 3);
    assert_eq!(last.items[0].incident, "INC-20");
    assert!(!last.has_next());
    assert!(last.has_prev());

    let beyond = storage.list_rows_page(&RowFilter::default(), PageRequest::new(9, 10)).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 23);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn distinct_assignees_are_sorted_and_skip_blank() {
    let storage = create_test_storage().await;
    storage.create_row(create_test_row("INC-1", "carol")).await.unwrap();
    storage.create_row(create_test_row("INC-2", "alice")).await.unwrap();
    storage.create_row(create_test_row("INC-3", "carol")).await.unwrap();
    storage.create_row(create_test_row("INC-4", "")).await.unwrap();

    assert_eq!(storage.distinct_assignees().await.unwrap(), vec!["alice", "carol"]);
}
