//! Fixture export binary for golden-file harnesses.

use anyhow::{bail, Context};
use bindata_fixtures::{validate, Catalogue, Fixture, FixtureBuilder, FixtureConfig};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fixtures")]
#[command(about = "Emit generator option fixtures as JSON")]
struct Args {
    /// The number of random test cases to add
    #[arg(long, default_value_t = bindata_fixtures::DEFAULT_RANDOM_COUNT)]
    randtests: u32,

    /// Maximum length of sampled strings and byte strings
    #[arg(long, default_value_t = bindata_fixtures::generator::DEFAULT_MAX_LEN)]
    max_len: u32,

    /// Emit only this fixture
    #[arg(long)]
    case: Option<String>,

    /// Write one JSON file per fixture (plus fixtures.json) into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Sample random cases in parallel
    #[arg(long)]
    parallel: bool,

    /// Fail if any fixture breaks an option invariant
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FixtureConfig::default()
        .with_random_count(args.randtests)
        .with_max_len(args.max_len)
        .with_parallel(args.parallel);
    let fixtures = FixtureBuilder::new(config)
        .build()
        .context("failed to build fixtures")?;

    let selected: Vec<&Fixture> = match &args.case {
        Some(name) => match fixtures.iter().find(|f| &f.name == name) {
            Some(fixture) => vec![fixture],
            None => bail!(
                "unknown case `{}`; fixed cases: {}, random cases: random-#1..random-#{}",
                name,
                Catalogue::names().join(", "),
                args.randtests
            ),
        },
        None => fixtures.iter().collect(),
    };

    if args.check {
        check(&selected)?;
    }

    match &args.output_dir {
        Some(dir) => write_to_dir(dir, &selected)?,
        None => println!("{}", serde_json::to_string_pretty(&selected)?),
    }
    Ok(())
}

fn check(fixtures: &[&Fixture]) -> anyhow::Result<()> {
    let mut violations = 0;
    for fixture in fixtures {
        for violation in validate(&fixture.options) {
            tracing::error!(fixture = %fixture.name, "{}", violation);
            violations += 1;
        }
    }
    if violations > 0 {
        bail!("{} invariant violation(s)", violations);
    }
    tracing::info!(fixtures = fixtures.len(), "all fixtures valid");
    Ok(())
}

fn write_to_dir(dir: &Path, fixtures: &[&Fixture]) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    for fixture in fixtures {
        let path = dir.join(format!("{}.json", fixture.name));
        let json = serde_json::to_string_pretty(&fixture.options)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let index = dir.join("fixtures.json");
    std::fs::write(&index, serde_json::to_string_pretty(fixtures)?)
        .with_context(|| format!("failed to write {}", index.display()))?;

    tracing::info!(
        fixtures = fixtures.len(),
        dir = %dir.display(),
        "wrote fixtures"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_library_constants() {
        let args = Args::parse_from(["fixtures"]);
        assert_eq!(args.max_len, bindata_fixtures::generator::DEFAULT_MAX_LEN);
        assert_eq!(args.randtests, bindata_fixtures::DEFAULT_RANDOM_COUNT);
    }
}
