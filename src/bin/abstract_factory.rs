//! Abstract factory: one factory trait produces a whole family of related
//! widgets, so the client renders a consistent UI without naming a platform.
//!
//! Run with: cargo run --bin abstract_factory

use colored::Colorize;

/* ============================================================
 * Product traits and concrete widgets
 * ============================================================
 */

trait Button {
    fn paint(&self) -> String;
}

trait Checkbox {
    fn paint(&self) -> String;
}

struct WinButton;
impl Button for WinButton {
    fn paint(&self) -> String {
        "Windows Button rendered".to_string()
    }
}

struct MacButton;
impl Button for MacButton {
    fn paint(&self) -> String {
        "Mac Button rendered".to_string()
    }
}

struct WinCheckbox;
impl Checkbox for WinCheckbox {
    fn paint(&self) -> String {
        "Windows Checkbox rendered".to_string()
    }
}

struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn paint(&self) -> String {
        "Mac Checkbox rendered".to_string()
    }
}

/* ============================================================
 * Factory trait and concrete factories
 * ============================================================
 */

trait GuiFactory: std::fmt::Debug {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

#[derive(Debug)]
struct WinFactory;
impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

#[derive(Debug)]
struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// Selects the factory from an external configuration source. The variable
/// stands in for whatever config mechanism a real application would use.
fn factory_for(platform: &str) -> Result<Box<dyn GuiFactory>, String> {
    match platform {
        "Windows" => Ok(Box::new(WinFactory)),
        "Mac" => Ok(Box::new(MacFactory)),
        other => Err(format!("Unknown operating system: {other}")),
    }
}

fn configured_platform() -> String {
    std::env::var("GUI_PLATFORM").unwrap_or_else(|_| "Windows".to_string())
}

/* ============================================================
 * Client code working only with the abstract types
 * ============================================================
 */

struct Application {
    factory: Box<dyn GuiFactory>,
}

impl Application {
    fn new(factory: Box<dyn GuiFactory>) -> Self {
        Self { factory }
    }

    fn paint_ui(&self) -> Vec<String> {
        vec![
            self.factory.create_button().paint(),
            self.factory.create_checkbox().paint(),
        ]
    }
}

fn main() {
    println!("{}", "=== Abstract Factory Pattern ===".bold());

    let platform = configured_platform();
    println!("Configured platform: {}", platform.cyan());

    match factory_for(&platform) {
        Ok(factory) => {
            let app = Application::new(factory);
            for line in app.paint_ui() {
                println!("{} {line}", "✓".green());
            }
        }
        Err(err) => println!("{} {err}", "✗".red()),
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_factory_produces_windows_family() {
        let app = Application::new(factory_for("Windows").unwrap());
        let ui = app.paint_ui();
        assert!(ui.iter().all(|line| line.contains("Windows")));
    }

    #[test]
    fn test_mac_factory_produces_mac_family() {
        let app = Application::new(factory_for("Mac").unwrap());
        let ui = app.paint_ui();
        assert!(ui.iter().all(|line| line.contains("Mac")));
    }

    #[test]
    fn test_unknown_platform_is_an_error() {
        let err = factory_for("BeOS").unwrap_err();
        assert!(err.contains("BeOS"));
    }
}
