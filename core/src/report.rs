use std::io::Write;

use log::{info, warn};

use crate::error::Result;
use crate::factory::read_package;
use crate::metrics::{self, Metrics};
use crate::models::Summary;
use crate::types::{parse_json, BatchReport, Cfg, Package, Rejected, SummaryOut};

/// Build and summarize one package, counting it as processed or rejected.
pub(crate) fn summarize_one(tag: &str, data: &[f64], metrics: &Metrics) -> Result<Summary> {
    match read_package(tag, data) {
        Ok(workout) => {
            metrics.record_package(workout.kind().tag());
            Ok(workout.summary())
        }
        Err(e) => {
            metrics.record_rejected(e.reason());
            Err(e)
        }
    }
}

/// Write one summary line per package, in input order.
///
/// With `fail_fast` the first rejected package ends the batch and its error
/// is returned; lines already written stay written. Otherwise rejected
/// packages are skipped. Returns the number of lines written.
pub fn write_report<W: Write>(
    packages: &[Package],
    cfg: &Cfg,
    metrics: &Metrics,
    out: &mut W,
) -> Result<usize> {
    let locale = cfg.locale();
    let mut written = 0usize;

    for (i, pkg) in packages.iter().enumerate() {
        match summarize_one(&pkg.tag, &pkg.data, metrics) {
            Ok(summary) => {
                writeln!(out, "{}", summary.message(locale))?;
                written += 1;
            }
            Err(e) if cfg.fail_fast() => return Err(e),
            Err(e) => warn!("skipping package #{} ({}): {}", i, pkg.tag, e),
        }
    }

    info!("report: {} of {} packages written", written, packages.len());
    Ok(written)
}

/// Summarize a batch. With `fail_fast` the first error is returned and no
/// partial report is produced. Numbers in the report are rounded to the
/// 3 decimals the message shows.
pub fn summarize_batch(packages: &[Package], cfg: &Cfg, metrics: &Metrics) -> Result<BatchReport> {
    let locale = cfg.locale();
    let mut report = BatchReport::default();

    for (index, pkg) in packages.iter().enumerate() {
        match summarize_one(&pkg.tag, &pkg.data, metrics) {
            Ok(summary) => {
                let message = summary.message(locale);
                report.summaries.push(SummaryOut {
                    index,
                    tag: pkg.tag.clone(),
                    summary: summary.rounded(3),
                    message,
                });
            }
            Err(e) if cfg.fail_fast() => return Err(e),
            Err(e) => report.rejected.push(Rejected {
                index,
                tag: pkg.tag.clone(),
                reason: e.reason().to_string(),
                error: e.to_string(),
            }),
        }
    }

    info!(
        "batch: {} summarized, {} rejected",
        report.summaries.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// JSON in, JSON out. `packages_json` is a list of packages; `cfg_json` is an
/// optional `Cfg` object. Counts go to the global metrics.
pub fn summarize_packages_json(packages_json: &str, cfg_json: Option<&str>) -> Result<String> {
    let packages: Vec<Package> = parse_json("packages", packages_json)?;
    let cfg = match cfg_json {
        Some(s) => Cfg::from_json(s)?,
        None => Cfg::default(),
    };

    let report = summarize_batch(&packages, &cfg, metrics::global())?;
    Ok(serde_json::to_string(&report)?)
}
