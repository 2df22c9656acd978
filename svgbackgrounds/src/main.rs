use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use svgbackgrounds_core::constants::DEFAULT_OUTPUT;
use svgbackgrounds_core::{PatternRecord, build_records, write_records};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Regenerate the SVGbackgrounds pattern catalog JSON.
#[derive(Debug, Parser)]
#[command(name = "svgbackgrounds", version, long_about = None)]
struct Cli {
    /// Destination file; its directory must already exist
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log per-pattern extraction details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let records = build_records();
    debug!(count = records.len(), "catalog built");
    write_records(&cli.output, &records)
        .with_context(|| format!("cannot save pattern catalog to {}", cli.output.display()))?;

    print!("{}", summary(&records, &cli.output));
    Ok(())
}

fn summary(records: &[PatternRecord], output: &Path) -> String {
    let mut s = format!(
        "Created {} SVG patterns in {}\n",
        records.len(),
        output.display()
    );
    for r in records {
        s.push_str(&format!("- {} ({})\n", r.name, r.id));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgbackgrounds_core::build_records_at;
    use svgbackgrounds_core::record::now;

    #[test]
    fn no_arguments_targets_default_path() {
        let cli = Cli::try_parse_from(["svgbackgrounds"]).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!cli.verbose);
    }

    #[test]
    fn output_path_can_be_overridden() {
        let cli = Cli::try_parse_from(["svgbackgrounds", "-v", "out/patterns.json"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out/patterns.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn run_writes_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("svgbackgrounds.json");
        let cli = Cli::try_parse_from([std::ffi::OsStr::new("svgbackgrounds"), output.as_os_str()]).unwrap();
        run(&cli).unwrap();
        assert!(std::fs::read_to_string(&output).unwrap().starts_with("[\n  {"));
    }

    #[test]
    fn unwritable_output_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("svgbackgrounds.json");
        let cli = Cli::try_parse_from([std::ffi::OsStr::new("svgbackgrounds"), output.as_os_str()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("cannot save pattern catalog to ")
        );
        assert!(matches!(
            err.downcast_ref::<svgbackgrounds_core::Error>(),
            Some(svgbackgrounds_core::Error::Write { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn summary_lists_every_pattern() {
        let records = build_records_at(now());
        let text = summary(&records, Path::new("patterns.json"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Created 12 SVG patterns in patterns.json");
        assert_eq!(lines[1], "- Liquid Cheese (liquid-cheese)");
        assert_eq!(lines[12], "- Large Triangles Blue Background (large-triangles)");
    }
}
