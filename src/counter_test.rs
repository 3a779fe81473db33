use super::*;

#[test]
fn extracts_plain_and_grouped_integers() {
    assert_eq!(extract_target("1,234"), Some(1234.0));
    assert_eq!(extract_target("500+"), Some(500.0));
    assert_eq!(extract_target("24/7"), Some(247.0));
}

#[test]
fn extracts_decimals_from_prefixed_labels() {
    assert_eq!(extract_target("$2.5M"), Some(2.5));
    assert_eq!(extract_target("v2.1.3"), Some(2.1));
}

#[test]
fn text_without_digits_has_no_target() {
    assert_eq!(extract_target("beta"), None);
    assert_eq!(extract_target(""), None);
    assert_eq!(extract_target("..."), None);
}

#[test]
fn count_up_ramps_and_lands_exactly_on_target() {
    let count = CountUp::new(1234.0);
    assert_eq!(count.display_at(0.0), 0.0);
    assert_eq!(count.display_at(DURATION_MS / 2.0), 617.0);
    assert_eq!(count.display_at(DURATION_MS), 1234.0);
    assert_eq!(count.display_at(DURATION_MS + 500.0), 1234.0);
    assert!(count.done(DURATION_MS));
    assert!(!count.done(DURATION_MS - 1.0));
}

#[test]
fn intermediate_frames_never_exceed_the_target() {
    let count = CountUp::new(2.5);
    let mut elapsed = 0.0;
    while elapsed < DURATION_MS {
        assert!(count.display_at(elapsed) <= count.target());
        elapsed += f64::from(TICK_MS);
    }
    assert_eq!(count.display_at(DURATION_MS), 2.5);
}

#[test]
fn grouped_formatting_matches_stat_labels() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(1234.0), "1,234");
    assert_eq!(format_value(1_000_000.0), "1,000,000");
}

#[test]
fn fractional_values_keep_up_to_three_digits() {
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(3.14159), "3.142");
    assert_eq!(format_value(10.10), "10.1");
}

#[test]
fn a_grouped_label_round_trips_through_the_animation() {
    let target = extract_target("1,234").unwrap();
    let count = CountUp::new(target);
    assert_eq!(format_value(count.display_at(DURATION_MS)), "1,234");
}
