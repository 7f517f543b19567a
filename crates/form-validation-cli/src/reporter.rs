use colored::Colorize;
use form_validation_core::{Field, FieldReporter, ValidationResult};

/// Prints one line per reported field
#[derive(Debug, Default)]
pub struct TerminalReporter {
    failures: usize,
}

impl TerminalReporter {
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl FieldReporter for TerminalReporter {
    fn report(&mut self, field: Field, result: &ValidationResult) {
        if result.matched {
            println!("  {} {}", "✓".green(), field.id());
        } else {
            self.failures += 1;
            println!(
                "  {} {}: {}",
                "✗".red(),
                field.id(),
                result.display_message().yellow()
            );
        }
    }
}

/// Print a single standalone result
pub fn print_result(label: &str, result: &ValidationResult) {
    if result.matched {
        println!("{} {}", "✓".green().bold(), label);
    } else {
        println!("{} {}", "✗".red().bold(), label);
        println!("  {}", result.display_message().yellow());
    }
}
