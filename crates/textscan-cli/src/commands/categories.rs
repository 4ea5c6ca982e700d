//! Categories command - list what can be recognized.

use console::style;

use textscan_core::Category;

pub fn run() -> anyhow::Result<()> {
    for category in Category::ALL {
        println!(
            "{:<12} {:<14} {}",
            style(category.label()).bold(),
            category.display_name(),
            style(category.shape()).dim()
        );
    }
    Ok(())
}
