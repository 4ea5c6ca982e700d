//! Analyze command - extract and validate structured data in a text.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use textscan_core::models::OutputConfig;
use textscan_core::{AnalysisResult, Analyzer, Category, Markers, ScanSettings, TextAnalyzer, SAMPLE_TEXT};

use super::config::load_config;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Analyze this text instead of a file
    #[arg(short, long, conflicts_with_all = ["input", "sample"])]
    text: Option<String>,

    /// Analyze the built-in sample text
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Restrict to these categories (repeatable, e.g. -k email -k date)
    #[arg(short = 'k', long = "category")]
    categories: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit every match with its position and parsed value (requires --format json)
    #[arg(long)]
    detailed: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Grouped, human-readable listing
    Text,
    /// JSON object keyed by category
    Json,
    /// One CSV row per match
    Csv,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    check_format(&args)?;
    let config = load_config(config_path)?;

    let text = read_input(&args)?;
    if text.trim().is_empty() {
        anyhow::bail!("Please enter or load some text to analyze (file, --text, stdin or --sample).");
    }

    let settings = if args.categories.is_empty() {
        config.scan.clone()
    } else {
        let categories = args
            .categories
            .iter()
            .map(|label| label.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()?;
        ScanSettings::only(categories)
    };

    info!("Analyzing {} bytes of text", text.len());

    let analyzer = TextAnalyzer::new().with_settings(settings);
    let result = analyzer.analyze(&text);

    let output = match args.format {
        OutputFormat::Text => format_text(&result, &config.markers, &config.output),
        OutputFormat::Json if args.detailed => serde_json::to_string_pretty(&result)?,
        OutputFormat::Json => serde_json::to_string_pretty(&result.annotate(&config.markers))?,
        OutputFormat::Csv => format_csv(&result, &config.markers)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn check_format(args: &AnalyzeArgs) -> anyhow::Result<()> {
    if args.detailed && !matches!(args.format, OutputFormat::Json) {
        anyhow::bail!("--detailed is only available with --format json");
    }
    Ok(())
}

fn read_input(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if args.sample {
        return Ok(SAMPLE_TEXT.to_string());
    }
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            debug!("Reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                anyhow::bail!("No input given. Pass a file, --text, --sample, or pipe text on stdin.");
            }
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn format_text(result: &AnalysisResult, markers: &Markers, output: &OutputConfig) -> String {
    if result.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = String::new();
    for (category, matches) in result.iter() {
        if matches.is_empty() && !output.show_empty {
            continue;
        }

        out.push_str(&format!(
            "{} ({} found):\n",
            style(category.display_name()).bold().cyan(),
            matches.len()
        ));
        for m in matches {
            out.push_str(&format!("   - {}", m.annotated(markers)));
            if output.show_positions {
                out.push_str(&format!(" [{}..{}]", m.matched.start, m.matched.end));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn format_csv(result: &AnalysisResult, markers: &Markers) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["category", "text", "start", "end", "valid", "marker", "date"])?;

    for (category, matches) in result.iter() {
        for m in matches {
            let start = m.matched.start.to_string();
            let end = m.matched.end.to_string();
            let valid = m.outcome.valid.to_string();
            let date = m.outcome.date.map(|d| d.to_string()).unwrap_or_default();
            wtr.write_record([
                category.label(),
                m.matched.text.as_str(),
                start.as_str(),
                end.as_str(),
                valid.as_str(),
                markers.for_validity(m.outcome.valid),
                date.as_str(),
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textscan_core::analyze;

    #[test]
    fn test_format_text_sample() {
        let result = analyze(SAMPLE_TEXT);
        let text = format_text(&result, &Markers::default(), &OutputConfig::default());

        assert!(text.contains("Vehicle plate"));
        assert!(text.contains("(2 found):"));
        assert!(text.contains("   - ABC-123 valid\n"));
        assert!(text.contains("   - 29/02/2024 valid\n"));
    }

    #[test]
    fn test_format_text_no_matches() {
        let result = analyze("nothing structured here");
        let text = format_text(&result, &Markers::default(), &OutputConfig::default());
        assert_eq!(text, "No matches found.\n");
    }

    #[test]
    fn test_format_text_lists_only_found_categories_by_default() {
        let result = analyze("plate ABC-123");
        let text = format_text(&result, &Markers::default(), &OutputConfig::default());

        assert!(text.contains("   - ABC-123 valid\n"));
        assert!(!text.contains("Email"));
        assert!(!text.contains("(0 found)"));
    }

    #[test]
    fn test_format_text_shows_empty_when_asked() {
        let result = analyze("plate ABC-123");
        let output = OutputConfig {
            show_empty: true,
            show_positions: false,
        };
        let text = format_text(&result, &Markers::default(), &output);

        assert!(text.contains("(0 found):"));
        assert!(text.contains("   - ABC-123 valid\n"));
    }

    #[test]
    fn test_detailed_requires_json() {
        let args = |format, detailed| AnalyzeArgs {
            input: None,
            text: Some("ABC-123".to_string()),
            sample: false,
            categories: Vec::new(),
            format,
            output: None,
            detailed,
        };

        assert!(check_format(&args(OutputFormat::Json, true)).is_ok());
        assert!(check_format(&args(OutputFormat::Text, false)).is_ok());
        assert!(check_format(&args(OutputFormat::Csv, true)).is_err());
        assert!(check_format(&args(OutputFormat::Text, true)).is_err());
    }

    #[test]
    fn test_format_text_hides_empty() {
        let result = analyze("plate ABC-123");
        let output = OutputConfig {
            show_empty: false,
            show_positions: true,
        };
        let text = format_text(&result, &Markers::default(), &output);

        assert!(text.contains("   - ABC-123 valid [6..13]"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_format_csv() {
        let result = analyze("born 29/02/2024");
        let csv = format_csv(&result, &Markers::default()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("category,text,start,end,valid,marker,date"));
        assert!(csv.contains("date,29/02/2024,5,15,true,valid,2024-02-29"));
    }
}
