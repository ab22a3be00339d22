//! Selected-salon context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Salon-scoped views render only while a salon is selected; the salon guard
//! sends everyone else to the selection view.

#[cfg(test)]
#[path = "salon_test.rs"]
mod salon_test;

/// The salon the signed-in user is currently working in, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalonSelection {
    pub selected_salon_id: Option<String>,
}

impl SalonSelection {
    /// Select a salon by id. Blank ids are ignored and leave the current
    /// selection alone.
    pub fn select(&mut self, salon_id: &str) -> bool {
        let salon_id = salon_id.trim();
        if salon_id.is_empty() {
            return false;
        }
        self.selected_salon_id = Some(salon_id.to_owned());
        true
    }

    pub fn clear(&mut self) {
        self.selected_salon_id = None;
    }

    pub fn is_selected(&self) -> bool {
        self.selected_salon_id.is_some()
    }
}
