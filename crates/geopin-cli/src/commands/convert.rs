//! Convert command implementation

use super::{checked_point, warn_outside_region};
use crate::cli::ConvertArgs;
use crate::output::OutputWriter;
use crate::output_types::ConvertOutput;
use anyhow::Result;
use geopin_core::config::LayeredConfig;
use geopin_geo::validation::within_datum_region;
use geopin_geo::{convert_with, to_decimal_string};

pub fn execute(args: ConvertArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let input = checked_point(args.point)?;
    let datum = config.legacy_datum.value;

    warn_outside_region(&input, datum, output);

    let point = convert_with(input, datum);
    let decimal = to_decimal_string(point, config.precision.value);

    if output.is_json() {
        return output.result(ConvertOutput {
            input,
            datum,
            point,
            decimal,
            within_datum_region: within_datum_region(&input, datum),
        });
    }

    output.kv(datum, decimal);
    Ok(())
}
