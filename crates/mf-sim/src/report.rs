//! CSV report of the output bins.
//!
//! ```csv
//! output_id,chip
//! 0,5
//! 1,3
//! ```

use std::io::Write;

use csv::Writer;

use mf_bot::OutputBins;

use crate::ReportError;

/// Write every filled output bin, ascending by id, to `dest`.
pub fn write_outputs_csv<W: Write>(outputs: &OutputBins, dest: W) -> Result<(), ReportError> {
    let mut writer = Writer::from_writer(dest);
    writer.write_record(["output_id", "chip"])?;
    for (id, chip) in outputs.iter() {
        writer.write_record(&[id.0.to_string(), chip.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
