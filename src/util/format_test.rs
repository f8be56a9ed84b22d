use super::*;

#[test]
fn small_counts_stay_exact() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(37), "37");
    assert_eq!(format_count(999), "999");
}

#[test]
fn thousands_round_to_one_decimal() {
    assert_eq!(format_count(1_000), "1k");
    assert_eq!(format_count(1_050), "1.1k");
    assert_eq!(format_count(48_210), "48.2k");
    assert_eq!(format_count(999_499), "999.5k");
}

#[test]
fn millions_take_over_where_thousands_would_read_oddly() {
    assert_eq!(format_count(999_500), "1M");
    assert_eq!(format_count(2_340_000), "2.3M");
    assert_eq!(format_count(10_049_999), "10M");
    assert_eq!(format_count(10_050_000), "10.1M");
}

#[test]
fn extreme_counts_saturate_instead_of_overflowing() {
    // A saturated ecosystem download total must still format.
    assert_eq!(format_count(u64::MAX), "18446744073709.5M");
    assert_eq!(format_count(u64::MAX - 50_000), "18446744073709.5M");
}
