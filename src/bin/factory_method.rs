//! Factory method: a creator trait ships the rendering logic and defers
//! only the widget construction to implementors.
//!
//! Run with: cargo run --bin factory_method

use colored::Colorize;

/* ============================================================
 * Product trait and concrete buttons
 * ============================================================
 */

trait DialogButton {
    fn render(&self) -> String;
    fn on_click(&self, action: &str) -> String;
}

struct WindowsButton;
impl DialogButton for WindowsButton {
    fn render(&self) -> String {
        "Windows button rendered".to_string()
    }
    fn on_click(&self, action: &str) -> String {
        format!("Windows button clicked: {action}")
    }
}

struct HtmlButton;
impl DialogButton for HtmlButton {
    fn render(&self) -> String {
        "HTML button rendered".to_string()
    }
    fn on_click(&self, action: &str) -> String {
        format!("HTML button clicked: {action}")
    }
}

/* ============================================================
 * Creator trait: render() is shared, create_button() is the
 * factory method each dialog overrides
 * ============================================================
 */

trait Dialog {
    fn create_button(&self) -> Box<dyn DialogButton>;

    fn render(&self) -> Vec<String> {
        let ok_button = self.create_button();
        vec![ok_button.on_click("Close Dialog"), ok_button.render()]
    }
}

struct WindowsDialog;
impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn DialogButton> {
        Box::new(WindowsButton)
    }
}

struct WebDialog;
impl Dialog for WebDialog {
    fn create_button(&self) -> Box<dyn DialogButton> {
        Box::new(HtmlButton)
    }
}

/// External configuration stand-in, same convention as the other factory
/// demos.
fn dialog_for(platform: &str) -> Result<Box<dyn Dialog>, String> {
    match platform {
        "Windows" => Ok(Box::new(WindowsDialog)),
        "Web" => Ok(Box::new(WebDialog)),
        other => Err(format!("Unknown operating system: {other}")),
    }
}

fn configured_platform() -> String {
    std::env::var("DIALOG_PLATFORM").unwrap_or_else(|_| "Web".to_string())
}

fn main() {
    println!("{}", "=== Factory Method Pattern ===".bold());

    let platform = configured_platform();
    println!("Configured platform: {}", platform.cyan());

    match dialog_for(&platform) {
        Ok(dialog) => {
            for line in dialog.render() {
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
