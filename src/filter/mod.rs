use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::{error, info, warn};

pub mod decode;
pub mod table;

use table::RawTable;

/// Flag column: 1 marks an accident involving a bicycle.
pub const FLAG_COLUMN: &str = "IstRad";
/// Region-code column (federal state).
pub const REGION_COLUMN: &str = "ULAND";
/// The exports encode the state code inconsistently, with and without a
/// leading zero. Only these two spellings count; "005" and friends do not.
pub const REGION_CODES: [&str; 2] = ["05", "5"];

/// Per-file result of a successful (non-erroring) filter pass.
#[derive(Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// File was rewritten in place with only the matching rows.
    Filtered { kept: usize, total: usize },
    /// Required columns absent; file left untouched.
    MissingColumns,
}

/// Best-effort numeric coercion. Unparseable or empty cells become `None`
/// instead of failing the file.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn row_matches(flag: Option<&str>, region: Option<&str>) -> bool {
    let is_bike = flag.and_then(coerce_numeric) == Some(1.0);
    let in_region = region.is_some_and(|r| REGION_CODES.contains(&r));
    is_bike && in_region
}

/// Filter a single `;`-delimited file in place, keeping only rows where
/// `IstRad` coerces to 1 and `ULAND` reads "05" or "5".
pub fn filter_file(path: &Path) -> Result<FilterOutcome> {
    let mut table = RawTable::read(path)?;

    let (flag_idx, region_idx) = match (
        table.column_index(FLAG_COLUMN),
        table.column_index(REGION_COLUMN),
    ) {
        (Some(f), Some(r)) => (f, r),
        _ => return Ok(FilterOutcome::MissingColumns),
    };

    let total = table.rows.len();
    table.rows.retain(|row| {
        row_matches(
            row.get(flag_idx).map(String::as_str),
            row.get(region_idx).map(String::as_str),
        )
    });
    let kept = table.rows.len();

    table.write(path)?;
    Ok(FilterOutcome::Filtered { kept, total })
}

/// Run the filter over every `.csv` file directly inside `dir` (suffix match
/// is case-sensitive, subdirectories are not entered). Each file is handled
/// independently; a failure is logged and the batch moves on.
pub fn filter_csv_files(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry of {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".csv") {
            continue;
        }

        match filter_file(&entry.path()) {
            Ok(FilterOutcome::Filtered { kept, total }) => {
                info!(file = %name, kept, total, "filtered and overwritten");
            }
            Ok(FilterOutcome::MissingColumns) => {
                warn!(
                    file = %name,
                    "missing required columns {FLAG_COLUMN} and {REGION_COLUMN}; left untouched"
                );
            }
            Err(err) => {
                error!("{} failed: {}", name, err);
            }
        }
    }

    Ok(())
}
