//! Batch command implementation.

use super::convert::{ConvertArgs, convert};
use crate::utils::{create_progress_bar, read_lines};
use rayon::prelude::*;
use std::path::PathBuf;

/// Convert every line, in parallel, keeping input order in the result.
pub fn convert_all(
    lines: &[String],
    args: &ConvertArgs,
    progress: bool,
) -> Vec<Result<String, String>> {
    let pb = create_progress_bar(lines.len() as u64, progress);

    let results = lines
        .par_iter()
        .map(|line| {
            let result = convert(line, args).map_err(|e| format!("{line}: {e}"));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    results
}

pub fn cmd_batch(
    source: &PathBuf,
    args: &ConvertArgs,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = read_lines(source)?;
    tracing::info!(count = lines.len(), source = %source.display(), "converting batch");

    let mut failed = 0usize;
    for result in convert_all(&lines, args, progress) {
        match result {
            Ok(output) => println!("{}", output),
            Err(message) => {
                eprintln!("Error: {}", message);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} addresses failed to convert", failed, lines.len()).into());
    }

    Ok(())
}
