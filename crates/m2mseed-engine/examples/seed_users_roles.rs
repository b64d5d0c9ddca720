//! Seed a demo user/role dataset in memory and print the attached links.
//!
//! Run with `RUST_LOG=info cargo run --example seed_users_roles`.

use m2mseed_core::{MemoryStore, PivotMap};
use m2mseed_engine::M2mSeeding;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut store = MemoryStore::new()
        .with_collection("users")
        .with_collection("roles");

    let mut granted = 0_i64;
    M2mSeeding::new(&store, "users", "roles", "role_links")?
        .with_factory(5, 4)?
        .relation_range(1, 3)?
        .with_pivot(move || {
            granted += 1;
            let mut pivot = PivotMap::new();
            pivot.insert("grant_order".to_string(), json!(granted));
            pivot
        })
        .run_seeded(&mut store, 42)?;

    for link in store.links() {
        println!(
            "user {} -[{}]-> role {} pivot={}",
            link.source,
            link.relation,
            link.target,
            serde_json::Value::Object(link.pivot.clone())
        );
    }

    Ok(())
}
