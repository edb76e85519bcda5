//! Run report for the benchmark
//!
//! Dumps details of the finished run, controlled by `LEIBNIZ_REPORT`:
//! - Unset, empty or `0` → no report
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file
//!
//! Stdout is left alone; it carries only the two result lines.

use leibniz_core::Estimate;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// Environment variable selecting the report mode
pub const REPORT_ENV: &str = "LEIBNIZ_REPORT";

// =============================================================================
// Report Configuration (parsed from LEIBNIZ_REPORT)
// =============================================================================

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(PathBuf),
}

/// Parsed report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse a `LEIBNIZ_REPORT` value. Unrecognized values warn and yield `None`.
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") && s.len() > 5 => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(PathBuf::from(&s[5..])),
            }),
            _ => {
                warn!("{}='{}' not recognized, ignoring", REPORT_ENV, val);
                None
            }
        }
    }

    /// Read from the environment
    pub fn from_env() -> Option<Self> {
        let val = std::env::var(REPORT_ENV).ok()?;
        Self::parse(&val)
    }
}

// =============================================================================
// Report Data
// =============================================================================

/// Fields written to the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub terms: i64,
    pub first_term: i64,
    pub last_term: i64,
    pub estimate: f64,
    pub abs_error: f64,
    pub elapsed_secs: f64,
    pub terms_per_sec: f64,
}

impl From<&Estimate> for ReportData {
    fn from(estimate: &Estimate) -> Self {
        ReportData {
            terms: estimate.terms,
            first_term: estimate.first_term,
            last_term: estimate.last_term,
            estimate: estimate.value,
            abs_error: estimate.abs_error(),
            elapsed_secs: estimate.elapsed.as_secs_f64(),
            terms_per_sec: estimate.terms_per_sec(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

fn format_human(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("=== LEIBNIZ REPORT ===\n");
    out.push_str(&format!("Terms:         {}\n", data.terms));
    out.push_str(&format!(
        "Term range:    {} ..= {}\n",
        data.first_term, data.last_term
    ));
    out.push_str(&format!("Estimate:      {:.16}\n", data.estimate));
    out.push_str(&format!("Abs error:     {:e}\n", data.abs_error));
    out.push_str(&format!("Elapsed:       {} s\n", data.elapsed_secs));
    out.push_str(&format!("Terms/sec:     {:.0}\n", data.terms_per_sec));
    out.push_str("======================\n");
    out
}

fn format_json(data: &ReportData) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string(data)?;
    out.push('\n');
    Ok(out)
}

// =============================================================================
// Output
// =============================================================================

/// Render `data` per `config` and write it out
pub fn write_report(config: &ReportConfig, data: &ReportData) -> io::Result<()> {
    let body = match config.format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data).map_err(io::Error::other)?,
    };

    match &config.destination {
        ReportDestination::Stderr => {
            let mut stderr = io::stderr().lock();
            stderr.write_all(body.as_bytes())?;
            stderr.flush()
        }
        ReportDestination::File(path) => std::fs::write(path, body),
    }
}

/// Emit the report for a finished run if `LEIBNIZ_REPORT` asks for one.
///
/// Write failures are logged; the run itself already succeeded.
pub fn emit(estimate: &Estimate) {
    let Some(config) = ReportConfig::from_env() else {
        return;
    };
    let data = ReportData::from(estimate);
    if let Err(e) = write_report(&config, &data) {
        warn!("failed to write report: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;

    fn sample() -> ReportData {
        ReportData::from(&Estimate {
            terms: 1000,
            first_term: -1999,
            last_term: 1997,
            value: 3.1405926538397972,
            elapsed: Duration::from_millis(2),
        })
    }

    #[test]
    fn test_config_parse_variants() {
        assert_eq!(ReportConfig::parse(""), None);
        assert_eq!(ReportConfig::parse("0"), None);
        assert_eq!(
            ReportConfig::parse("1"),
            Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            })
        );
        assert_eq!(
            ReportConfig::parse("json"),
            Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            })
        );
        assert_eq!(
            ReportConfig::parse("json:/tmp/report.json"),
            Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(PathBuf::from("/tmp/report.json")),
            })
        );
    }

    #[test]
    fn test_config_parse_unrecognized() {
        assert_eq!(ReportConfig::parse("yaml"), None);
        assert_eq!(ReportConfig::parse("json:"), None);
    }

    #[test]
    fn test_report_data_from_estimate() {
        let data = sample();
        assert_eq!(data.terms, 1000);
        assert_eq!(data.elapsed_secs, 0.002);
        assert_eq!(data.terms_per_sec, 500_000.0);
        assert!((data.abs_error - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_format_human() {
        let out = format_human(&sample());
        assert!(out.starts_with("=== LEIBNIZ REPORT ==="));
        assert!(out.contains("Terms:         1000\n"));
        assert!(out.contains("Term range:    -1999 ..= 1997\n"));
        assert!(out.contains("Estimate:      3.1405926538397972\n"));
        assert!(out.contains("Terms/sec:     500000\n"));
    }

    #[test]
    fn test_format_json_fields() {
        let out = format_json(&sample()).unwrap();
        assert!(out.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["terms"], 1000);
        assert_eq!(value["first_term"], -1999);
        assert_eq!(value["last_term"], 1997);
        assert_eq!(value["estimate"], 3.1405926538397972);
        for key in ["abs_error", "elapsed_secs", "terms_per_sec"] {
            assert!(value[key].is_f64(), "missing {}", key);
        }
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = ReportConfig {
            format: ReportFormat::Json,
            destination: ReportDestination::File(path.clone()),
        };

        write_report(&config, &sample()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["terms"], 1000);
    }

    #[test]
    fn test_write_report_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            format: ReportFormat::Human,
            destination: ReportDestination::File(dir.path().join("nope").join("r.txt")),
        };
        assert!(write_report(&config, &sample()).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        let original = std::env::var(REPORT_ENV).ok();

        unsafe { std::env::set_var(REPORT_ENV, "json") };
        assert_eq!(
            ReportConfig::from_env().map(|c| c.format),
            Some(ReportFormat::Json)
        );

        unsafe { std::env::remove_var(REPORT_ENV) };
        assert_eq!(ReportConfig::from_env(), None);

        unsafe {
            match original {
                Some(v) => std::env::set_var(REPORT_ENV, v),
                None => std::env::remove_var(REPORT_ENV),
            }
        }
    }
}
