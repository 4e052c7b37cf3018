use std::path::PathBuf;
use welldoc_core::error::WelldocError;
use welldoc_core::render::{print::render_print, svg::render_screen};
use welldoc_core::CanvasSize;

pub fn run(
    input_file: PathBuf,
    size: CanvasSize,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), WelldocError> {
    let model = welldoc_core::load_wellbore(&input_file)?;
    let layout = welldoc_core::layout_wellbore(&model, size);

    let rendered = match output_format {
        "svg" => render_screen(&layout)?,
        "print" => render_print(&layout)?,
        _ => serde_json::to_string_pretty(&layout)?,
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!(
                "Laid out {} formation band(s), {} casing string(s) on a {} canvas, written to {}",
                layout.formations.len(),
                layout.casings.len(),
                layout.size,
                path.display()
            );
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
