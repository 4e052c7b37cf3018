use std::path::PathBuf;
use welldoc_core::error::WelldocError;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), WelldocError> {
    let file = welldoc_core::load_job_file(&input_file)?;
    let check = welldoc_core::check_permit_number_match(&file);

    match output_format {
        "json" => output::json::print(&check)?,
        _ => output::table::print_permit(&file, &check),
    }

    Ok(())
}
