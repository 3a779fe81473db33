use super::*;

#[test]
fn toggle_alternates_between_light_and_dark() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn stored_value_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        let stored = theme.storage_value();
        assert_eq!(Theme::from_storage(Some(stored)), theme);
    }
}

#[test]
fn unknown_or_missing_preference_reads_as_light() {
    assert_eq!(Theme::from_storage(None), Theme::Light);
    assert_eq!(Theme::from_storage(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_storage(Some("")), Theme::Light);
}

#[test]
fn glyph_swaps_with_theme() {
    assert_eq!(Theme::Light.glyph(), "🌙");
    assert_eq!(Theme::Dark.glyph(), "☀️");
    assert_ne!(Theme::Light.glyph(), Theme::Dark.glyph());
}
