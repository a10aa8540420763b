//! Interface segregation principle: a fat cloud-provider trait forces a
//! storage-only vendor to stub out hosting and CDN methods; splitting the
//! trait lets each vendor implement exactly what it offers.
//!
//! Run with: cargo run --bin solid_isp

use colored::Colorize;

/* ============================================================
 * Example 1: before refactoring — one trait for everything
 * ============================================================
 */

mod before {
    pub trait CloudProvider {
        fn store_file(&self, name: &str) -> Result<String, String>;
        fn get_file(&self, name: &str) -> Result<String, String>;
        fn create_server(&self, region: &str) -> Result<String, String>;
        fn list_servers(&self, region: &str) -> Result<String, String>;
        fn cdn_address(&self) -> Result<String, String>;
    }

    pub struct Amazon;

    impl CloudProvider for Amazon {
        fn store_file(&self, name: &str) -> Result<String, String> {
            Ok(format!("File {name} stored"))
        }
        fn get_file(&self, name: &str) -> Result<String, String> {
            Ok(format!("File {name} returned"))
        }
        fn create_server(&self, region: &str) -> Result<String, String> {
            Ok(format!("Server created at region {region}"))
        }
        fn list_servers(&self, region: &str) -> Result<String, String> {
            Ok(format!("Server in region {region}"))
        }
        fn cdn_address(&self) -> Result<String, String> {
            Ok("cdn.amazon.example".to_string())
        }
    }

    pub struct Dropbox;

    impl CloudProvider for Dropbox {
        fn store_file(&self, name: &str) -> Result<String, String> {
            Ok(format!("File {name} stored"))
        }
        fn get_file(&self, name: &str) -> Result<String, String> {
            Ok(format!("File {name} returned"))
        }
        // The fat trait forces stubs for capabilities Dropbox never had.
        fn create_server(&self, _region: &str) -> Result<String, String> {
            Err("Method not implemented".to_string())
        }
        fn list_servers(&self, _region: &str) -> Result<String, String> {
            Err("Method not implemented".to_string())
        }
        fn cdn_address(&self) -> Result<String, String> {
            Err("Method not implemented".to_string())
        }
    }
}

/* ============================================================
 * Example 2: after refactoring — one trait per capability
 * ============================================================
 */

mod after {
    pub trait CloudStorageProvider {
        fn store_file(&self, name: &str) -> String;
        fn get_file(&self, name: &str) -> String;
    }

    pub trait CloudHostingProvider {
        fn create_server(&self, region: &str) -> String;
        fn list_servers(&self, region: &str) -> String;
    }

    pub trait CdnProvider {
        fn cdn_address(&self) -> String;
    }

    pub struct Amazon;

    impl CloudStorageProvider for Amazon {
        fn store_file(&self, name: &str) -> String {
            format!("File {name} stored")
        }
        fn get_file(&self, name: &str) -> String {
            format!("File {name} returned")
        }
    }

    impl CloudHostingProvider for Amazon {
        fn create_server(&self, region: &str) -> String {
            format!("Server created at region {region}")
        }
        fn list_servers(&self, region: &str) -> String {
            format!("Server in region {region}")
        }
    }

    impl CdnProvider for Amazon {
        fn cdn_address(&self) -> String {
            "cdn.amazon.example".to_string()
        }
    }

    // Dropbox implements only the capability it actually offers.
    pub struct Dropbox;

    impl CloudStorageProvider for Dropbox {
        fn store_file(&self, name: &str) -> String {
            format!("File {name} stored")
        }
        fn get_file(&self, name: &str) -> String {
            format!("File {name} returned")
        }
    }

    pub fn backup<P: CloudStorageProvider>(provider: &P, name: &str) -> String {
        provider.store_file(name)
    }
}

fn main() {
    use after::{CdnProvider, CloudHostingProvider, CloudStorageProvider};
    use before::CloudProvider;

    println!("{}", "=== Interface Segregation Principle ===".bold());

    println!("\n{}", "== Example 1: before ==".bold());
    let amazon = before::Amazon;
    for outcome in [
        amazon.store_file("amz1"),
        amazon.get_file("amz1"),
        amazon.create_server("us-east-1"),
        amazon.list_servers("us-east-1"),
        amazon.cdn_address(),
    ] {
        match outcome {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }

    let dropbox = before::Dropbox;
    for outcome in [
        dropbox.store_file("dropbox1"),
        dropbox.get_file("dropbox1"),
        dropbox.create_server("us-east-1"),
        dropbox.list_servers("us-east-1"),
        dropbox.cdn_address(),
    ] {
        match outcome {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }

    println!("\n{}", "== Example 2: after ==".bold());
    let amazon = after::Amazon;
    println!("{} {}", "✓".green(), amazon.store_file("amz2"));
    println!("{} {}", "✓".green(), amazon.create_server("us-east-1"));
    println!("{} {}", "✓".green(), amazon.list_servers("us-east-1"));
    println!("{} {}", "✓".green(), amazon.cdn_address());

    let dropbox = after::Dropbox;
    println!("{} {}", "✓".green(), dropbox.store_file("dropbox2"));
    println!("{} {}", "✓".green(), dropbox.get_file("dropbox2"));

    // The same generic client serves any storage-capable provider.
    println!("{} {}", "✓".green(), after::backup(&amazon, "nightly"));
    println!("{} {}", "✓".green(), after::backup(&dropbox, "nightly"));
}
