use crate::core::errors::LedgerError;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use serde_json::json;

#[tokio::test]
async fn test_entries_indexed_by_group() {
    let logging = InMemoryLogging::new();
    logging.log_action("A", json!({ "n": 1 }), Some("g1")).await.unwrap();
    logging.log_action("B", json!({ "n": 2 }), None).await.unwrap();
    logging.log_action("C", json!({ "n": 3 }), Some("g2")).await.unwrap();
    logging.log_action("D", json!({ "n": 4 }), Some("g1")).await.unwrap();

    let all = logging.get_logs().await.unwrap();
    assert_eq!(all.len(), 4);

    let g1 = logging.get_group_logs("g1").await.unwrap();
    let actions: Vec<&str> = g1.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["A", "D"]);
    assert_eq!(g1[1].details["n"], 4);

    assert!(logging.get_group_logs("g3").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_object_details_rejected() {
    let logging = InMemoryLogging::new();

    let result = logging.log_action("A", json!([1, 2]), Some("g1")).await;

    assert!(matches!(result, Err(LedgerError::LoggingError(_))));
    assert!(logging.get_logs().await.unwrap().is_empty());
}
