//! Builds a small map through a mix of inserts, an overwrite and a delete,
//! then prints it and its items.
//!
//! Run with `RUST_LOG=trace cargo run --example scenario` to see resizes
//! and index rebuilds.

use chain_hashmap::{HashMap, LookupError};

fn main() -> Result<(), LookupError> {
    env_logger::init();

    let mut m = HashMap::new();
    m.set("1".to_string(), 1);
    m.set("2".to_string(), 2);
    m.set("3".to_string(), 3);
    m.set("6".to_string(), 6);
    m.set("6".to_string(), 16);
    m.set("7".to_string(), 7);
    m.delete("7")?;

    println!("{}", m);
    for item in m.items() {
        println!("{:?}", item);
    }
    println!(
        "len={} capacity={} load_factor={:.3}",
        m.len(),
        m.capacity(),
        m.load_factor()
    );
    Ok(())
}
