//! Display formatting for the staged-file list.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Human-readable byte count, base 1024, one decimal above bytes.
#[allow(clippy::cast_precision_loss)]
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Footer line under `fileList`, e.g. `2 files, 1.5 KB`.
pub fn selection_summary(count: usize, total_bytes: u64) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("{count} {noun}, {}", human_size(total_bytes))
}
