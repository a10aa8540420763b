//! Dependency inversion principle: a report hard-wired to one database
//! cannot be retargeted or tested in isolation; depending on a small trait
//! inverts the arrow.
//!
//! Run with: cargo run --bin solid_dip

use colored::Colorize;

/* ============================================================
 * Example 1: before refactoring — high-level report depends on
 * a concrete low-level database
 * ============================================================
 */

mod before {
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn insert(&self) -> String {
            "File inserted".to_string()
        }
    }

    pub struct BudgetReport {
        database: MySqlDatabase,
    }

    impl BudgetReport {
        pub fn new(database: MySqlDatabase) -> Self {
            Self { database }
        }

        pub fn open(&self, date: &str) -> String {
            format!("Open report from {date}")
        }

        pub fn save(&self) -> String {
            self.database.insert()
        }
    }
}

/* ============================================================
 * Example 2: after refactoring — both layers depend on an
 * abstraction
 * ============================================================
 */

mod after {
    pub trait Database {
        fn name(&self) -> &'static str;

        fn insert(&self) -> String {
            format!("File inserted by {}", self.name())
        }
        fn update(&self) -> String {
            format!("File updated by {}", self.name())
        }
        fn delete(&self) -> String {
            format!("File deleted by {}", self.name())
        }
    }

    pub struct MySql;
    impl Database for MySql {
        fn name(&self) -> &'static str {
            "MySql"
        }
    }

    pub struct MongoDb;
    impl Database for MongoDb {
        fn name(&self) -> &'static str {
            "MongoDB"
        }
    }

    pub struct BudgetReport {
        database: Box<dyn Database>,
    }

    impl BudgetReport {
        pub fn new(database: Box<dyn Database>) -> Self {
            Self { database }
        }

        pub fn open(&self, date: &str) -> String {
            format!("Open report from {date}")
        }

        pub fn save(&self) -> String {
            self.database.insert()
        }
    }
}

fn main() {
    use after::Database;

    println!("{}", "=== Dependency Inversion Principle ===".bold());

    println!("\n{}", "== Example 1: before ==".bold());
    let report = before::BudgetReport::new(before::MySqlDatabase);
    println!("{}", report.open("2024-01-01"));
    println!("{}", report.save());

    println!("\n{}", "== Example 2: after ==".bold());
    for database in [
        Box::new(after::MySql) as Box<dyn after::Database>,
        Box::new(after::MongoDb),
    ] {
        println!("{}", database.update());
        println!("{}", database.delete());
        let report = after::BudgetReport::new(database);
        println!("{} {}", "✓".green(), report.open("2024-01-01"));
        println!("{} {}", "✓".green(), report.save());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use after::Database;

    #[test]
    fn test_before_report_is_wired_to_mysql() {
        let report = before::BudgetReport::new(before::MySqlDatabase);
        assert_eq!(report.save(), "File inserted");
        assert_eq!(report.open("2024-01-01"), "Open report from 2024-01-01");
    }

    #[test]
    fn test_after_report_accepts_any_database() {
        let mysql_report = after::BudgetReport::new(Box::new(after::MySql));
        let mongo_report = after::BudgetReport::new(Box::new(after::MongoDb));
        assert_eq!(mysql_report.save(), "File inserted by MySql");
        assert_eq!(mongo_report.save(), "File inserted by MongoDB");
    }

    #[test]
    fn test_after_report_accepts_a_test_double() {
        struct FakeDatabase;
        impl Database for FakeDatabase {
            fn name(&self) -> &'static str {
                "Fake"
            }
        }

        let report = after::BudgetReport::new(Box::new(FakeDatabase));
        assert_eq!(report.save(), "File inserted by Fake");
    }

    #[test]
    fn test_database_provided_methods() {
        let mongo = after::MongoDb;
        assert_eq!(mongo.update(), "File updated by MongoDB");
        assert_eq!(mongo.delete(), "File deleted by MongoDB");
    }
}
