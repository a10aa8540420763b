//! Liskov substitution principle: a read-only document that errors on
//! `save` breaks every caller written against the base contract. Moving
//! `save` onto a writable subtype removes the trap.
//!
//! Run with: cargo run --bin solid_lsp

use colored::Colorize;

/* ============================================================
 * Example 1: before refactoring — every document claims to be
 * savable, read-only ones renege at runtime
 * ============================================================
 */

mod before {
    pub trait Document {
        fn filename(&self) -> &str;

        fn open(&self) -> String {
            format!("{} is open", self.filename())
        }

        fn save(&self) -> Result<String, String>;
    }

    pub struct TextDocument {
        pub filename: String,
    }

    impl Document for TextDocument {
        fn filename(&self) -> &str {
            &self.filename
        }
        fn save(&self) -> Result<String, String> {
            Ok(format!("{} saved", self.filename))
        }
    }

    pub struct ReadOnlyDocument {
        pub filename: String,
    }

    impl Document for ReadOnlyDocument {
        fn filename(&self) -> &str {
            &self.filename
        }
        // The subtype weakens the base contract: substituting it breaks
        // callers that were promised a working save.
        fn save(&self) -> Result<String, String> {
            Err("Unable to save read-only file".to_string())
        }
    }

    pub struct Project {
        pub documents: Vec<Box<dyn Document>>,
    }

    impl Project {
        pub fn open_all(&self) -> Vec<String> {
            self.documents.iter().map(|doc| doc.open()).collect()
        }

        pub fn save_all(&self) -> Vec<Result<String, String>> {
            self.documents.iter().map(|doc| doc.save()).collect()
        }
    }
}

/* ============================================================
 * Example 2: after refactoring — only writable documents carry
 * save at all
 * ============================================================
 */

mod after {
    pub struct Document {
        pub filename: String,
    }

    impl Document {
        pub fn open(&self) -> String {
            format!("{} is open", self.filename)
        }
    }

    pub struct WritableDocument {
        pub document: Document,
    }

    impl WritableDocument {
        pub fn open(&self) -> String {
            self.document.open()
        }

        pub fn save(&self) -> String {
            format!("{} saved", self.document.filename)
        }
    }

    pub struct Project {
        pub all_docs: Vec<Document>,
        pub writable_docs: Vec<WritableDocument>,
    }

    impl Project {
        pub fn open_all(&self) -> Vec<String> {
            let readable = self.all_docs.iter().map(Document::open);
            let writable = self.writable_docs.iter().map(WritableDocument::open);
            readable.chain(writable).collect()
        }

        // No instance checks needed: the type system already separated the
        // savable documents.
        pub fn save_all(&self) -> Vec<String> {
            self.writable_docs.iter().map(WritableDocument::save).collect()
        }
    }
}

fn main() {
    println!("{}", "=== Liskov Substitution Principle ===".bold());

    println!("\n{}", "== Example 1: before ==".bold());
    let project = before::Project {
        documents: vec![
            Box::new(before::TextDocument { filename: "report1.txt".into() }),
            Box::new(before::ReadOnlyDocument { filename: "confidential1.txt".into() }),
            Box::new(before::TextDocument { filename: "notes1.txt".into() }),
        ],
    };
    for line in project.open_all() {
        println!("{line}");
    }
    for outcome in project.save_all() {
        match outcome {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }

    println!("\n{}", "== Example 2: after ==".bold());
    let project = after::Project {
        all_docs: vec![after::Document { filename: "confidential2.txt".into() }],
        writable_docs: vec![
            after::WritableDocument {
                document: after::Document { filename: "report2.txt".into() },
            },
            after::WritableDocument {
                document: after::Document { filename: "notes2.txt".into() },
            },
        ],
    };
    for line in project.open_all() {
        println!("{line}");
    }
    for line in project.save_all() {
        println!("{} {line}", "✓".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_read_only_breaks_save_all() {
        let project = before::Project {
            documents: vec![
                Box::new(before::TextDocument { filename: "a.txt".into() }),
                Box::new(before::ReadOnlyDocument { filename: "b.txt".into() }),
            ],
        };
        let outcomes = project.save_all();
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_err());
    }

    #[test]
    fn test_after_save_all_cannot_fail() {
        let project = after::Project {
            all_docs: vec![after::Document { filename: "b.txt".into() }],
            writable_docs: vec![after::WritableDocument {
                document: after::Document { filename: "a.txt".into() },
            }],
        };
        assert_eq!(project.save_all(), vec!["a.txt saved".to_string()]);
    }

    #[test]
    fn test_after_open_all_covers_every_document() {
        let project = after::Project {
            all_docs: vec![after::Document { filename: "b.txt".into() }],
            writable_docs: vec![after::WritableDocument {
                document: after::Document { filename: "a.txt".into() },
            }],
        };
        let opened = project.open_all();
        assert_eq!(opened.len(), 2);
        assert!(opened.contains(&"a.txt is open".to_string()));
        assert!(opened.contains(&"b.txt is open".to_string()));
    }
}
