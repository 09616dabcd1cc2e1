//! Format command implementation

use super::{checked_point, warn_outside_region};
use crate::cli::{FormatArgs, FormatStyle};
use crate::output::OutputWriter;
use crate::output_types::FormatOutput;
use anyhow::Result;
use geopin_core::config::LayeredConfig;
use geopin_geo::{convert_with, to_combined_dms, to_decimal_string, to_milliseconds};

pub fn execute(args: FormatArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let input = checked_point(args.point)?;

    let (point, datum) = if args.legacy {
        let datum = config.legacy_datum.value;
        warn_outside_region(&input, datum, output);
        (convert_with(input, datum), Some(datum))
    } else {
        (input, None)
    };

    let (style, value) = match args.style {
        FormatStyle::Dms => ("dms", to_combined_dms(point)),
        FormatStyle::Decimal => ("decimal", to_decimal_string(point, config.precision.value)),
        FormatStyle::Milliseconds => ("milliseconds", to_milliseconds(point)),
    };

    if output.is_json() {
        return output.result(FormatOutput {
            point,
            datum,
            style: style.to_string(),
            value,
        });
    }

    output.plain(value);
    Ok(())
}
