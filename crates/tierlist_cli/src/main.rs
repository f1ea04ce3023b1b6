//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the core end to end without any UI layer: load a catalog,
//!   reconcile against an in-memory store, apply drops, print the board.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `tierlist_cli [CATALOG_JSON] [ITEM_ID:BUCKET]...`

use tierlist_core::db::open_db_in_memory;
use tierlist_core::{
    default_log_level, init_logging, Catalog, ItemId, SqliteSnapshotStore, TierConfig,
    TierListService,
};

fn main() {
    if let Ok(log_dir) = std::env::var("TIERLIST_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let catalog_path = args.next().unwrap_or_else(|| "images.json".to_string());

    let catalog = match Catalog::load_json(&catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load catalog `{catalog_path}`: {err}");
            std::process::exit(1);
        }
    };

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            std::process::exit(1);
        }
    };

    let store = SqliteSnapshotStore::new(&conn);
    let mut service = TierListService::open(catalog, TierConfig::default(), store);

    for raw in args {
        match parse_drop(&raw) {
            Some((item, bucket)) => {
                if !service.drop_item(item, &bucket) {
                    eprintln!("drop `{raw}` changed nothing");
                }
            }
            None => eprintln!("ignoring malformed drop `{raw}` (expected ITEM_ID:BUCKET)"),
        }
    }

    for row in service.rows() {
        let names: Vec<&str> = row.items.iter().map(|item| item.name.as_str()).collect();
        println!("{}: {}", row.label, names.join(", "));
    }
    println!("tierlist_core version={}", tierlist_core::core_version());
}

fn parse_drop(raw: &str) -> Option<(ItemId, String)> {
    let (item, bucket) = raw.split_once(':')?;
    Some((item.trim().parse().ok()?, bucket.trim().to_string()))
}
