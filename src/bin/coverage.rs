//! Coverage report binary - lists translation keys each locale is missing
//!
//! Usage:
//!   cargo run --bin i18n-coverage            # Human-readable report
//!   cargo run --bin i18n-coverage -- --json  # JSON report
//!   cargo run --bin i18n-coverage -- --strict  # Exit non-zero on gaps
//!
//! Optional environment variables:
//! - LOCALES_DIR (defaults to the embedded dictionaries)
//! - DEFAULT_LOCALE (defaults to zh-CN)

use anyhow::{bail, Result};
use ordo_site::config::Config;
use ordo_site::i18n::CoverageReport;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_coverage=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let strict = args.iter().any(|a| a == "--strict");

    let config = Config::from_env()?;
    let registry = config.load_registry()?;
    let report = CoverageReport::for_registry(&registry);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Reference: {} ({} keys)\n",
            report.default_locale, report.total_keys
        );
        for coverage in &report.locales {
            println!(
                "{:<8} {:>3}/{:<3} {:>6.1}%",
                coverage.locale, coverage.present, report.total_keys, coverage.coverage_percent
            );
            for key in &coverage.missing {
                println!("    - {}", key);
            }
            for key in &coverage.extra {
                println!("    + {} (not in {})", key, report.default_locale);
            }
        }
    }

    for coverage in report.locales.iter().filter(|c| !c.is_complete()) {
        warn!(
            "{} is missing {} keys (served by {})",
            coverage.locale,
            coverage.missing.len(),
            report.default_locale
        );
    }

    if strict && !report.is_complete() {
        bail!("Translation coverage is incomplete");
    }

    info!("✓ Coverage report complete");
    Ok(())
}
