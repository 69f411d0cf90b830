//! Magic probe command.

use crate::ProbeArgs;
use anyhow::{Result, bail};
use pfm_io::pfm;

/// Runs the probe command. Fails if any input is not a PFM file.
pub fn run(args: ProbeArgs) -> Result<()> {
    let mut rejected = 0usize;

    for path in &args.input {
        let mut reader = super::open(path)?;
        if pfm::can_load(&mut reader) {
            println!("{}: PFM", path.display());
        } else {
            println!("{}: not PFM", path.display());
            rejected += 1;
        }
    }

    if rejected > 0 {
        bail!("{} of {} file(s) not recognised", rejected, args.input.len());
    }
    Ok(())
}
