//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all problem-rotator
//! output, ensuring consistent colors, spacing, and message structure across
//! commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for labels
//! - **Standardized spacing**: Newline before and after all command outputs

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Formats a key/value detail line used under section headers
pub fn print_detail(label: &str, value: &str) {
    println!("   {} {}", format!("{label}:").blue(), value.white());
}
