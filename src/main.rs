use std::io::{BufWriter, Write};

use anyhow::{anyhow, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bitgen::{entropy_rng, frequency::frequency_test, generate, write_bits, SIZE};

fn main() -> Result<()> {
    // stdout only carries the bits
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .map_err(|e| anyhow!("cannot init logger: {}", e))?;

    let mut rng = entropy_rng()?;
    let bits = generate(SIZE, &mut rng);

    let report = frequency_test(&bits);
    debug!("{} ones out of {} bits", report.ones, SIZE);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_bits(&mut out, &bits)?;
    out.flush()?;

    Ok(())
}
