use super::*;

#[test]
fn summary_pluralizes() {
    assert_eq!(results_summary(0), "0 modules");
    assert_eq!(results_summary(1), "1 module");
    assert_eq!(results_summary(12), "12 modules");
}
