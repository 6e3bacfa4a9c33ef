//! Share command: copy the page link to the clipboard via OSC 52.

use std::io::Write;

use anyhow::Result;
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

use ideadrop_core::share::{Clipboard, ShareButton};

use super::style::style;

/// Clipboard backed by the terminal's OSC 52 escape sequence. Terminals
/// without the capability ignore the sequence; write errors are swallowed.
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> bool {
        let written = execute!(
            std::io::stderr(),
            CopyToClipboard::to_clipboard_from(text.as_bytes())
        )
        .is_ok();
        let _ = std::io::stderr().flush();
        written
    }
}

pub fn handle_share_command() -> Result<()> {
    let link = ideadrop_config::share_url();
    let mut button = ShareButton::new();
    button.trigger(&mut Osc52Clipboard, &link);
    println!("🔗 {link}");
    if button.confirmation_visible() {
        println!("{}", style("Copied!").green());
    }
    Ok(())
}
