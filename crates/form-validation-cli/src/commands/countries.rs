use colored::Colorize;
use form_validation_core::constraint_table;

pub fn execute() -> bool {
    println!("{}", "Supported countries".green().bold());
    println!();

    for constraint in constraint_table() {
        println!(
            "{}  {}  e.g. {}",
            constraint.country().as_str().cyan().bold(),
            constraint.source(),
            constraint.example().green()
        );
    }

    true
}
