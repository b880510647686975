//! Shared CLI output formatting with colors, symbols, and output modes.

use std::io::IsTerminal;

pub const ENV_JSON: &str = "SWOT_LENS_JSON";
pub const ENV_QUIET: &str = "SWOT_LENS_QUIET";
pub const ENV_VERBOSE: &str = "SWOT_LENS_VERBOSE";
pub const ENV_NO_COLOR: &str = "SWOT_LENS_NO_COLOR";

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os(ENV_NO_COLOR).is_some() {
        return false;
    }
    // Human-facing output goes to stderr.
    std::io::stderr().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
#[derive(Debug, Clone, Copy)]
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Styling with color forced off.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    /// Blue circle (info/neutral) symbol.
    pub fn info_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[34m\u{25cb}\x1b[0m"
        } else {
            "--"
        }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

/// Print a section header.
pub fn print_section(s: &Styled, title: &str) {
    eprintln!("  {}", s.bold(title));
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var_os(ENV_QUIET).is_some()
}

/// Check if --verbose mode is active.
pub fn is_verbose() -> bool {
    std::env::var_os(ENV_VERBOSE).is_some()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var_os(ENV_JSON).is_some()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}
