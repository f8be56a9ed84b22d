//! Compact number formatting for counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a counter the way card chips show it: exact below one thousand,
/// then `48.2k` / `2.3M` with one rounded decimal, dropping a trailing
/// `.0`. Integer math throughout so huge counters stay exact enough.
pub fn format_count(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    // Work in tenths of the target unit, rounding half up. Saturating:
    // the stats bar can hand over totals as large as `u64::MAX`.
    let (tenths, suffix) = if value < 999_500 {
        (value.saturating_add(50) / 100, "k")
    } else {
        (value.saturating_add(50_000) / 100_000, "M")
    };
    let whole = tenths / 10;
    let fraction = tenths % 10;
    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}
