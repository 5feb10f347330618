//! Load a small employee sheet and run a few queries against it.
use sheetbase::ingest::DelimitedSource;
use sheetbase::logging::init_logging;
use sheetbase::{Config, QueryRequest, Store};

const EMPLOYEES_CSV: &str = "\
name,dept,office,start_year,remote
Ann,Eng,Oslo,2019,true
Ben,Sales,Bergen,2021,false
Cara,eng,Oslo,2016,
Dmitri,Support,Remote,2022,true
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    init_logging(&config.log_level);

    println!("sheetbase {} demo", sheetbase::VERSION);
    println!("==================");

    let store = Store::new(config);
    let key = store.ingest("Employees.csv", EMPLOYEES_CSV.as_bytes(), &DelimitedSource::default())?;
    println!("Registered table: {}", key);

    let queries = [
        vec![("dept", "eng")],
        vec![("search", "an")],
        vec![("office", "oslo"), ("start_year", "201")],
        vec![("limit", "2")],
        vec![("unknown_column", "x"), ("limit", "1")],
    ];

    for pairs in queries {
        let request = QueryRequest::from_query_pairs(&key, pairs.clone(), store.config().default_limit)?;
        println!("\n/api/{}?{:?}", key, pairs);
        println!("{}", serde_json::to_string_pretty(&store.query(&request)?)?);
    }

    match store.query(&QueryRequest::new("missing")) {
        Err(err) if err.is_not_found() => println!("\n/api/missing -> {}", err),
        other => println!("\n/api/missing -> unexpected {:?}", other),
    }

    let stats = store.stats();
    println!("\nQueries: {}, rows returned: {}", stats.queries, stats.rows_returned);
    Ok(())
}
