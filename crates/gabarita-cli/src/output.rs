// Output formatting and styling

use colored::Colorize;
use serde_json::Value;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format an input prompt
    pub fn prompt(&self, prompt: &str) -> String {
        if self.use_colors {
            format!("{}: ", prompt.magenta().bold())
        } else {
            format!("{}: ", prompt)
        }
    }

    /// Format section header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().underline().to_string()
        } else {
            format!("{}\n{}", title, "=".repeat(title.chars().count()))
        }
    }

    /// Format a label/value line
    pub fn field(&self, label: &str, value: &str) -> String {
        if self.use_colors {
            format!("{}: {}", label.dimmed(), value)
        } else {
            format!("{}: {}", label, value)
        }
    }
}

pub fn print_success(msg: &str) {
    println!("{}", OutputStyle::default().success(msg));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

pub fn print_warning(msg: &str) {
    eprintln!("{}", OutputStyle::default().warning(msg));
}

pub fn print_info(msg: &str) {
    println!("{}", OutputStyle::default().info(msg));
}

pub fn print_header(title: &str) {
    println!("{}", OutputStyle::default().header(title));
}

pub fn print_field(label: &str, value: &str) {
    println!("{}", OutputStyle::default().field(label, value));
}

/// Pretty-print a passthrough payload
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}
