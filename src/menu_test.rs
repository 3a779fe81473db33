use super::*;

#[test]
fn toggling_n_times_leaves_menu_open_iff_n_is_odd() {
    let mut open = false;
    for n in 1..=6 {
        let effect = toggle(open);
        open = effect.open;
        assert_eq!(open, n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn opening_moves_focus_into_the_menu() {
    let effect = toggle(false);
    assert!(effect.open);
    assert_eq!(effect.aria_expanded, "true");
    assert_eq!(effect.aria_label, "Close menu");
    assert_eq!(effect.focus, Focus::FirstMenuItem);
}

#[test]
fn closing_via_toggle_leaves_focus_alone() {
    let effect = toggle(true);
    assert!(!effect.open);
    assert_eq!(effect.aria_expanded, "false");
    assert_eq!(effect.aria_label, "Open menu");
    assert_eq!(effect.focus, Focus::Unchanged);
}

#[test]
fn escape_closes_and_returns_focus_to_the_toggle() {
    let effect = escape(true).unwrap();
    assert!(!effect.open);
    assert_eq!(effect.focus, Focus::Toggle);
}

#[test]
fn escape_with_closed_menu_does_nothing() {
    assert_eq!(escape(false), None);
}
