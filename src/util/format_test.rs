use super::*;

// =============================================================
// human_size
// =============================================================

#[test]
fn human_size_keeps_small_values_in_bytes() {
    assert_eq!(human_size(0), "0 B");
    assert_eq!(human_size(1023), "1023 B");
}

#[test]
fn human_size_scales_by_1024() {
    assert_eq!(human_size(1024), "1.0 KB");
    assert_eq!(human_size(1536), "1.5 KB");
    assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
}

#[test]
fn human_size_caps_at_largest_unit() {
    assert_eq!(human_size(2048 * 1024 * 1024 * 1024 * 1024), "2048.0 TB");
}

// =============================================================
// selection_summary
// =============================================================

#[test]
fn selection_summary_pluralizes() {
    assert_eq!(selection_summary(1, 10), "1 file, 10 B");
    assert_eq!(selection_summary(2, 1536), "2 files, 1.5 KB");
    assert_eq!(selection_summary(0, 0), "0 files, 0 B");
}
