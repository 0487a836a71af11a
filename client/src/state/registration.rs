//! Item selection and state/city cascade rules for the registration form.

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;

/// Selection state owned by the registration page.
///
/// Text inputs (name, email, whatsapp) stay as page-local signals; this
/// struct owns the parts with rules attached: the item selection set and the
/// UF -> city dependency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationState {
    /// Selected item ids, set semantics, insertion-ordered.
    pub selected_items: Vec<i64>,
    pub uf: String,
    pub city: String,
    /// Last map click, `(lat, lng)`. `None` until the first click.
    pub position: Option<(f64, f64)>,
}

impl RegistrationState {
    /// Symmetric set toggle: first click selects an item, second deselects.
    pub fn toggle_item(&mut self, id: i64) {
        if let Some(index) = self.selected_items.iter().position(|&selected| selected == id) {
            self.selected_items.remove(index);
        } else {
            self.selected_items.push(id);
        }
    }

    #[must_use]
    pub fn has_item(&self, id: i64) -> bool {
        self.selected_items.contains(&id)
    }

    /// Select a state. Any previously selected city belongs to the old
    /// state's list, so it is cleared.
    pub fn select_uf(&mut self, uf: String) {
        if self.uf != uf {
            self.city.clear();
        }
        self.uf = uf;
    }

    pub fn select_city(&mut self, city: String) {
        self.city = city;
    }

    /// Record a map click. Last click wins.
    pub fn select_position(&mut self, lat: f64, lng: f64) {
        self.position = Some((lat, lng));
    }
}
