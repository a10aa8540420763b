//! Singleton pattern: a process-wide database handle with an explicit
//! init-once lifecycle. `OnceLock` makes the lazy initialization race-free
//! and keeps the accessor the only way in.
//!
//! Run with: cargo run --bin singleton

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use colored::Colorize;

struct Database {
    connection_string: String,
    queries_run: AtomicU32,
}

impl Database {
    /// The only access path. First call initializes, later calls return the
    /// same instance.
    fn global() -> &'static Database {
        static INSTANCE: OnceLock<Database> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            println!("Database initialized");
            Database {
                connection_string: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "local://in-memory".to_string()),
                queries_run: AtomicU32::new(0),
            }
        })
    }

    fn query(&self, sql: &str) -> String {
        self.queries_run.fetch_add(1, Ordering::Relaxed);
        format!("Query '{sql}' executed")
    }

    fn queries_run(&self) -> u32 {
        self.queries_run.load(Ordering::Relaxed)
    }
}

fn main() {
    println!("{}", "=== Singleton Pattern ===".bold());

    let foo = Database::global();
    println!("{} {}", "✓".green(), foo.query("SELECT * FROM table_1"));

    let bar = Database::global();
    println!("{} {}", "✓".green(), bar.query("SELECT * FROM table_2"));

    println!("Connection: {}", foo.connection_string.cyan());
    println!("Queries run so far: {}", foo.queries_run());

    if std::ptr::eq(foo, bar) {
        println!(
            "{} Singleton is working: 'bar' and 'foo' refer to the same instance",
            "✓".green()
        );
    } else {
        println!("{} Two distinct instances exist", "✗".red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_returns_the_same_instance() {
        let first = Database::global();
        let second = Database::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_queries_share_one_counter() {
        let db = Database::global();
        let before = db.queries_run();
        Database::global().query("SELECT 1");
        assert_eq!(db.queries_run(), before + 1);
    }
}
