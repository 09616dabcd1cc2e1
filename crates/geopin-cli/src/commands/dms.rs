//! DMS command implementation

use crate::cli::DmsArgs;
use crate::output::OutputWriter;
use crate::output_types::DmsOutput;
use anyhow::Result;
use geopin_geo::to_degrees_minutes_seconds;

pub fn execute(args: DmsArgs, output: &OutputWriter) -> Result<()> {
    let dms = to_degrees_minutes_seconds(args.degrees, args.axis);

    if output.is_json() {
        return output.result(DmsOutput {
            degrees: args.degrees,
            axis: args.axis,
            dms,
        });
    }

    output.plain(dms);
    Ok(())
}
