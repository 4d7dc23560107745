//! Console output
//!
//! [`ConsoleReporter`] renders pipeline progress with colored status
//! prefixes. Warnings and errors go to stderr, everything else to stdout.

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use indicatif::HumanBytes;

use crate::core::edition::Edition;
use crate::core::report::Reporter;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (cyan bullet)
    pub const INFO: &str = "•";

    /// Step prefix (magenta arrow)
    pub const STEP: &str = "►";
}

/// Reporter printing to the terminal
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
    color: bool,
}

impl ConsoleReporter {
    /// Colors are enabled when stdout is a terminal
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Disable ANSI colors
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn emphasize(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, text: &str, indent: usize) {
        if self.quiet {
            return;
        }
        let pad = " ".repeat(indent);
        println!("{pad}{} {text}", self.paint(status::INFO, Color::Cyan));
    }

    fn success(&self, text: &str) {
        if self.quiet {
            return;
        }
        println!("{} {text}", self.paint(status::SUCCESS, Color::Green));
    }

    fn warn(&self, text: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} {text}", self.paint(status::WARNING, Color::Yellow));
    }

    fn error(&self, text: &str) {
        eprintln!("{} {text}", self.paint(status::ERROR, Color::Red));
    }

    fn header(&self, text: &str) {
        if self.quiet {
            return;
        }
        println!("\n{}", self.emphasize(text, Color::Blue));
    }

    fn step(&self, text: &str) {
        if self.quiet {
            return;
        }
        println!("{} {text}", self.paint(status::STEP, Color::Magenta));
    }

    fn version(&self, edition: Edition, package: &str, version: &str) {
        if self.quiet {
            return;
        }
        let color = match edition {
            Edition::Premium => Color::Magenta,
            Edition::Community => Color::Green,
        };
        println!(
            "  {} → {package} {}",
            self.paint(&edition.label(), color),
            self.paint(version, Color::Yellow)
        );
    }

    fn size(&self, file_name: &str, bytes: u64) {
        if self.quiet {
            return;
        }
        println!(
            "{} {} ({})",
            self.paint(status::SUCCESS, Color::Green),
            self.emphasize(file_name, Color::White),
            HumanBytes(bytes)
        );
    }

    fn final_success(&self, text: &str) {
        if self.quiet {
            return;
        }
        println!("\n{}", self.emphasize(&format!("🎉 {text}"), Color::Green));
    }

    fn final_error(&self, text: &str) {
        eprintln!("\n{}", self.paint(&format!("💥 {text}"), Color::Red));
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}
