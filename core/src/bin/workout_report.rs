use std::io::{self, Write};

use anyhow::Context;
use workout_core::{write_report, Cfg, Metrics, Package};

fn packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> anyhow::Result<()> {
    let metrics = Metrics::new().context("metrics registry")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_report(&packages(), &Cfg::default(), &metrics, &mut out)
        .context("workout report aborted")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
