//! Sample command - print the demonstration text.

use textscan_core::SAMPLE_TEXT;

pub fn run() -> anyhow::Result<()> {
    println!("{}", SAMPLE_TEXT.trim());
    Ok(())
}
