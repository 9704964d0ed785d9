use relateiq_client::error::AppError;
use relateiq_client::model::http::encode_query;
use relateiq_client::model::requests::{AccountsListOptions, ListOptions};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_list_options_default_is_empty() {
    let options = ListOptions::default();
    assert!(encode_query(&options).unwrap().is_empty());
}

#[test]
fn test_list_options_omits_zero_fields() {
    let options = ListOptions::default().with_limit(25);
    assert_eq!(encode_query(&options).unwrap(), pairs(&[("_limit", "25")]));

    let options = ListOptions::default().with_start(50);
    assert_eq!(encode_query(&options).unwrap(), pairs(&[("_start", "50")]));
}

#[test]
fn test_list_options_both_fields() {
    let options = ListOptions::new(1, 1);
    assert_eq!(
        encode_query(&options).unwrap(),
        pairs(&[("_limit", "1"), ("_start", "1")])
    );
}

#[test]
fn test_list_options_next_page() {
    assert_eq!(ListOptions::new(0, 20).next_page(), Some(ListOptions::new(20, 20)));
    assert_eq!(ListOptions::new(40, 20).next_page(), Some(ListOptions::new(60, 20)));
    assert_eq!(ListOptions::new(10, 0).next_page(), None);
}

#[test]
fn test_accounts_list_options_empty() {
    let options = AccountsListOptions::new();
    assert!(encode_query(&options).unwrap().is_empty());
}

#[test]
fn test_accounts_list_options_comma_joins_ids() {
    let options = AccountsListOptions::new()
        .with_ids(["a", "b"])
        .with_start(1)
        .with_limit(1);
    assert_eq!(
        encode_query(&options).unwrap(),
        pairs(&[("_ids", "a,b"), ("_limit", "1"), ("_start", "1")])
    );
}

#[test]
fn test_accounts_list_options_single_id() {
    let options = AccountsListOptions::new().with_ids(vec!["only".to_string()]);
    assert_eq!(encode_query(&options).unwrap(), pairs(&[("_ids", "only")]));
}

#[test]
fn test_accounts_list_options_with_page() {
    let options = AccountsListOptions::new().with_page(ListOptions::new(0, 10));
    assert_eq!(options.page.limit, 10);
    assert_eq!(encode_query(&options).unwrap(), pairs(&[("_limit", "10")]));
}

#[test]
fn test_accounts_list_options_json_round_trip() {
    let options = AccountsListOptions::new().with_ids(["x", "y"]).with_limit(5);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"_ids":"x,y","_limit":5}"#);
    let decoded: AccountsListOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_encode_query_error_kind() {
    #[derive(serde::Serialize)]
    struct Nested {
        inner: ListOptions,
    }
    let err = encode_query(&Nested {
        inner: ListOptions::new(1, 2),
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Encoding(_)));
    assert!(err.to_string().starts_with("encoding error: "));
}
