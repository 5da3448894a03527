//! `dishy info` -- device identity.

use dishy_core::AsyncDish;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(dish: &mut AsyncDish, global: &GlobalOpts) -> Result<(), CliError> {
    let info = dish.device_info()?.clone();

    let rows = vec![
        ("id", info.id.clone()),
        ("hardware version", info.hardware_version.clone()),
        ("software version", info.software_version.clone()),
        ("country code", info.country_code.clone()),
        ("utc offset (s)", info.utc_offset_s.to_string()),
    ];
    let plain = format!(
        "id\t{}\nhardware_version\t{}\nsoftware_version\t{}\ncountry_code\t{}\nutc_offset_s\t{}",
        info.id, info.hardware_version, info.software_version, info.country_code, info.utc_offset_s
    );

    let out = output::render(&global.output, &info, &rows, &plain);
    output::print_output(&out, global.quiet);
    Ok(())
}
