use std::path::Path;

use anyhow::{Context, Result};
use log::info;

fn print_help() {
    println!("Usage: ff-compute <input_file> <output_file>");
}

/// The input and output paths, or `None` unless exactly two arguments are
/// given.
fn input_output(args: &[String]) -> Option<(&Path, &Path)> {
    match args {
        [input, output] => Some((Path::new(input), Path::new(output))),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let (input, output) = match input_output(&args) {
        Some(paths) => paths,
        None => {
            print_help();
            return Ok(());
        }
    };

    ff_compute::run_files(input, output).with_context(|| {
        format!(
            "Failed to process {} into {}",
            input.display(),
            output.display()
        )
    })?;
    info!("wrote {}", output.display());

    Ok(())
}
