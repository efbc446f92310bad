//! Console helpers shared by the `run()` demos.

use colored::Colorize;

/// Prints a group title, e.g. "Pattern: Builder".
pub fn title(text: &str) {
    println!("{}", text.bold().underline());
    println!();
}

/// Prints a section heading in the `=== Name ===` style.
pub fn section(text: &str) {
    println!("{}", format!("=== {text} ===").cyan().bold());
}

pub fn lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}

pub fn error(message: impl std::fmt::Display) {
    println!("{} {}", "Error:".red().bold(), message);
}
