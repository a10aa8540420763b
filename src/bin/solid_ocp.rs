//! Open/closed principle: a string-typed `match` must be edited for every
//! new instrument family, while a trait lets new families plug in without
//! touching existing code.
//!
//! Run with: cargo run --bin solid_ocp

use colored::Colorize;

/* ============================================================
 * Example 1: before refactoring — one type, a growing match
 * ============================================================
 */

mod before {
    pub struct MusicalInstrument {
        name: String,
        kind: String,
    }

    impl MusicalInstrument {
        pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                kind: kind.into(),
            }
        }

        // Every new instrument family forces an edit here.
        pub fn play(&self) -> Result<String, String> {
            match self.kind.as_str() {
                "chords" => Ok(format!(
                    "{} is played by strumming or plucking its strings",
                    self.name
                )),
                "keyboards" => Ok(format!("{} is played by pressing its keys", self.name)),
                "breaths" => Ok(format!("{} is played by blowing air into it", self.name)),
                "percussion" => Ok(format!(
                    "{} is played by striking it with hands or drumsticks",
                    self.name
                )),
                "bowed strings" => Ok(format!(
                    "{} is played by drawing a bow across its strings",
                    self.name
                )),
                other => Err(format!("Unknown instrument type: {other}")),
            }
        }
    }
}

/* ============================================================
 * Example 2: after refactoring — one trait, one type per
 * family, open to extension
 * ============================================================
 */

mod after {
    pub trait Playable {
        fn name(&self) -> &str;
        fn play(&self) -> String;
    }

    pub struct ChordInstrument(pub String);
    impl Playable for ChordInstrument {
        fn name(&self) -> &str {
            &self.0
        }
        fn play(&self) -> String {
            format!("{} is played by strumming or plucking its strings", self.0)
        }
    }

    pub struct KeyboardInstrument(pub String);
    impl Playable for KeyboardInstrument {
        fn name(&self) -> &str {
            &self.0
        }
        fn play(&self) -> String {
            format!("{} is played by pressing its keys", self.0)
        }
    }

    pub struct WindInstrument(pub String);
    impl Playable for WindInstrument {
        fn name(&self) -> &str {
            &self.0
        }
        fn play(&self) -> String {
            format!("{} is played by blowing air into it", self.0)
        }
    }

    pub struct PercussionInstrument(pub String);
    impl Playable for PercussionInstrument {
        fn name(&self) -> &str {
            &self.0
        }
        fn play(&self) -> String {
            format!("{} is played by striking it with hands or drumsticks", self.0)
        }
    }

    pub struct BowedStringInstrument(pub String);
    impl Playable for BowedStringInstrument {
        fn name(&self) -> &str {
            &self.0
        }
        fn play(&self) -> String {
            format!("{} is played by drawing a bow across its strings", self.0)
        }
    }
}

fn main() {
    use after::Playable;

    println!("{}", "=== Open/Closed Principle ===".bold());

    println!("\n{}", "== Example 1: before ==".bold());
    let instruments = vec![
        before::MusicalInstrument::new("Guitar", "chords"),
        before::MusicalInstrument::new("Piano", "keyboards"),
        before::MusicalInstrument::new("Flute", "breaths"),
        before::MusicalInstrument::new("Drum", "percussion"),
        before::MusicalInstrument::new("Violin", "bowed strings"),
        before::MusicalInstrument::new("Theremin", "electromagnetic"),
    ];
    for instrument in &instruments {
        match instrument.play() {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }

    println!("\n{}", "== Example 2: after ==".bold());
    let instruments: Vec<Box<dyn Playable>> = vec![
        Box::new(after::ChordInstrument("Guitar".into())),
        Box::new(after::KeyboardInstrument("Piano".into())),
        Box::new(after::WindInstrument("Flute".into())),
        Box::new(after::PercussionInstrument("Drum".into())),
        Box::new(after::BowedStringInstrument("Violin".into())),
    ];
    for instrument in &instruments {
        println!("{} [{}] {}", "✓".green(), instrument.name(), instrument.play());
    }
}
