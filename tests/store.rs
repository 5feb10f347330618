mod common;

use std::io::Write;

use common::{employees, names};
use sheetbase::ingest::JsonRecordsSource;
use sheetbase::{Config, Error, Filters, QueryRequest, Store};

#[test]
fn query_of_unknown_table_is_not_found() {
    let store = Store::default();
    let err = store.query_table("missing", &Filters::new(), None, 10).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Table not found: missing");
    assert_eq!(store.stats().not_found, 1);
}

#[test]
fn scenarios_against_employees() {
    let store = Store::default();
    store.register_table("employees", employees());

    let rows = store.query_table("employees", &Filters::new().with("dept", "eng"), None, 10).unwrap();
    assert_eq!(names(&rows, "name"), vec!["Ann", "Cara"]);

    let rows = store.query_table("employees", &Filters::new(), Some("an"), 10).unwrap();
    assert_eq!(names(&rows, "name"), vec!["Ann"]);

    let rows = store.query_table("employees", &Filters::new(), None, 2).unwrap();
    assert_eq!(names(&rows, "name"), vec!["Ann", "Ben"]);
}

#[test]
fn query_pairs_become_a_request() {
    let pairs = vec![
        ("limit", "5"),
        ("dept", "eng"),
        ("search", ""),
        ("name", "a"),
        ("dept", "Eng"),
    ];
    let request = QueryRequest::from_query_pairs("employees", pairs, 10).unwrap();

    assert_eq!(request.limit, 5);
    assert_eq!(request.search, None);
    let filters: Vec<(&str, &str)> = request.filters.iter().collect();
    assert_eq!(filters, vec![("dept", "Eng"), ("name", "a")]);
}

#[test]
fn query_pairs_use_the_default_limit() {
    let request = QueryRequest::from_query_pairs("t", Vec::<(String, String)>::new(), 10).unwrap();
    assert_eq!(request.limit, 10);
    assert!(request.filters.is_empty());

    let request = QueryRequest::from_query_pairs("t", [("limit", "-3")], 10).unwrap();
    assert_eq!(request.limit, -3);
}

#[test]
fn bad_limit_is_rejected() {
    let err = QueryRequest::from_query_pairs("t", [("limit", "ten")], 10).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn query_json_encodes_rows() {
    let store = Store::default();
    store.register_table("employees", employees());

    let request = QueryRequest::new("employees").with_filter("name", "ben");
    assert_eq!(store.query_json(&request).unwrap(), r#"[{"name":"Ben","dept":"Sales"}]"#);

    let request = QueryRequest::new("employees").with_limit(-1);
    assert_eq!(store.query_json(&request).unwrap(), "[]");
}

#[test]
fn ingest_registers_under_derived_key() {
    let store = Store::default();
    let key = store
        .ingest("Team Roster.xlsx", br#"[{"name": "Ann"}, {"name": "Dan"}]"#, &JsonRecordsSource)
        .unwrap();
    assert_eq!(key, "team-roster");

    let rows = store.query(&QueryRequest::new("team-roster").with_search("AN")).unwrap();
    assert_eq!(names(&rows, "name"), vec!["Ann", "Dan"]);
}

#[test]
fn reingest_is_last_write_wins() {
    let store = Store::default();
    store.ingest("data.json", br#"[{"v": 1}]"#, &JsonRecordsSource).unwrap();
    store.ingest("data.json", br#"[{"v": 2}, {"v": 3}]"#, &JsonRecordsSource).unwrap();

    let rows = store.query(&QueryRequest::new("data")).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["v"], 2);
    assert_eq!(store.tables().collect::<Vec<_>>(), vec!["data"]);
    assert_eq!(store.stats().tables_registered, 2);
}

#[test]
fn ingest_path_picks_loader_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Price List.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"item,price\nTea,2.5\nCoffee,3\n").unwrap();
    drop(file);

    let store = Store::new(Config::default());
    let key = store.ingest_path(&path).unwrap();
    assert_eq!(key, "price-list");

    let rows = store.query_table(&key, &Filters::new().with("price", "2.5"), None, 10).unwrap();
    assert_eq!(names(&rows, "item"), vec!["Tea"]);

    let unsupported = dir.path().join("book.xlsx");
    std::fs::write(&unsupported, b"PK").unwrap();
    assert!(matches!(store.ingest_path(&unsupported), Err(Error::InvalidArgument(_))));
}

#[test]
fn stats_count_queries_and_rows() {
    let store = Store::default();
    store.register_table("employees", employees());
    store.query_table("employees", &Filters::new(), None, 1).unwrap();
    store.query_table("employees", &Filters::new().with("dept", "eng"), None, 10).unwrap();

    let stats = store.stats();
    assert_eq!(stats.queries, 2);
    assert_eq!(stats.rows_scanned, 6);
    assert_eq!(stats.rows_returned, 3);
    assert_eq!(stats.not_found, 0);
}

#[test]
fn store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Store>();
}

#[test]
fn store_lookup_reports_the_registered_name() {
    let store = Store::default();
    store.register_table("staff", employees());
    assert_eq!(store.table("staff").unwrap().name(), "staff");

    let rows = store.query_table("staff", &Filters::new().with("name", "ara"), None, 10).unwrap();
    assert_eq!(names(&rows, "name"), vec!["Cara"]);
}
