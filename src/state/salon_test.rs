use super::*;

#[test]
fn default_has_no_selection() {
    assert!(!SalonSelection::default().is_selected());
}

#[test]
fn select_trims_and_stores_id() {
    let mut selection = SalonSelection::default();
    assert!(selection.select("  salon-7 "));
    assert_eq!(selection.selected_salon_id.as_deref(), Some("salon-7"));
    assert!(selection.is_selected());
}

#[test]
fn blank_select_keeps_previous_choice() {
    let mut selection = SalonSelection::default();
    selection.select("salon-7");
    assert!(!selection.select("   "));
    assert_eq!(selection.selected_salon_id.as_deref(), Some("salon-7"));
}

#[test]
fn clear_drops_selection() {
    let mut selection = SalonSelection::default();
    selection.select("salon-7");
    selection.clear();
    assert_eq!(selection, SalonSelection::default());
}
