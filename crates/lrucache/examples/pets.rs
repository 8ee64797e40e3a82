//! Capacity-2 cache of pets: the third insert evicts the first.

use lrucache::{Lru, Result};

#[derive(Debug, Clone)]
struct Pet {
    name: String,
}

impl Pet {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let mut cache = Lru::new(2)?;

    println!("{}", cache.add("dog", Pet::new("Pingo"))); // false
    println!("{}", cache.add("bird", Pet::new("John"))); // false
    println!("{}", cache.add("salamander", Pet::new("Bob"))); // true

    if cache.get("dog").is_none() {
        println!("dog not found");
    }

    match cache.get("bird") {
        Some(bird) => println!("{}", bird.name),
        None => println!("bird not found"),
    }

    Ok(())
}
