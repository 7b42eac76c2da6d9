//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - LMG Hamiltonian energy estimation",
        style("Lipkin").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  lipkin-model      Hamiltonian construction and diagonalisation");
    println!("  lipkin-prep       Staircase angles and measurement circuits");
    println!("  lipkin-hal        Circuit oracles, bitstrings and corpora");
    println!("  lipkin-estimate   Single-shot energy estimation");
    println!("  lipkin-runner     Runs, reports and parameter sweeps");
    println!("  lipkin-cli        Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
