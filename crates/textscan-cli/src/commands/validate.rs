//! Validate command - check one value against a category's rules.

use clap::Args;
use console::style;

use textscan_core::{validate, Category};

use super::config::load_config;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Category label (see `textscan categories`)
    category: String,

    /// Value to validate
    value: String,

    /// Also require the value to have the category's extraction shape
    #[arg(long)]
    strict: bool,
}

pub fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let category: Category = args.category.parse()?;

    let mut outcome = validate(category, &args.value);
    if args.strict && !has_shape(category, &args.value) {
        outcome.valid = false;
    }

    let marker = config.markers.for_validity(outcome.valid);
    let marker = if outcome.valid {
        style(marker).green()
    } else {
        style(marker).red()
    };
    println!("{} {}", args.value, marker);

    if let Some(date) = outcome.date {
        println!("  date: {}", date);
    }

    Ok(())
}

/// Whether the category's rule matches the whole value.
fn has_shape(category: Category, value: &str) -> bool {
    textscan_core::PatternRegistry::new()
        .find(value, category)
        .first()
        .is_some_and(|m| m.start == 0 && m.end == value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_shape() {
        assert!(has_shape(Category::Plate, "ABC-123"));
        assert!(!has_shape(Category::Plate, "ABC-123 extra"));
        assert!(has_shape(Category::Phone, "+57 300 4567890"));
        assert!(!has_shape(Category::Email, "no-at-sign.com"));
    }
}
