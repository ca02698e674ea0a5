// 🖱️ Presentation Shell - the one piece of interactive state
//
// The shell owns the selected vendor key and nothing else. Selection
// changes are validated self-transitions; the chart and highlights views
// never depend on it, only the detail projection does.

use crate::catalog::VendorCatalog;

/// Holds `selected`, the current vendor key.
///
/// Initialized to the first catalog entry. Unknown keys are silently
/// ignored: the selectable keys are generated from the catalog itself, so
/// an invalid key can only come from a misbehaving rendering layer.
pub struct Shell {
    selected: String,
    keys: Vec<String>,
}

impl Shell {
    pub fn new(catalog: &VendorCatalog) -> Self {
        let keys: Vec<String> = catalog.vendors().iter().map(|r| r.name.clone()).collect();
        let selected = keys.first().cloned().unwrap_or_default();
        Shell { selected, keys }
    }

    /// The currently selected vendor key.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Apply a "vendor selected" interaction.
    ///
    /// Valid keys transition the state; anything else is a no-op (no crash,
    /// no visible change). Re-selecting the current key changes nothing.
    pub fn select(&mut self, key: &str) {
        if self.keys.iter().any(|k| k == key) {
            self.selected = key.to_string();
        }
    }

    /// Move the selection to the next vendor, wrapping at the end.
    pub fn next(&mut self) {
        if let Some(i) = self.selected_index() {
            let next = (i + 1) % self.keys.len();
            self.selected = self.keys[next].clone();
        }
    }

    /// Move the selection to the previous vendor, wrapping at the start.
    pub fn previous(&mut self) {
        if let Some(i) = self.selected_index() {
            let prev = if i == 0 { self.keys.len() - 1 } else { i - 1 };
            self.selected = self.keys[prev].clone();
        }
    }

    /// Select the vendor at `index` in catalog order, if it exists.
    pub fn select_index(&mut self, index: usize) {
        if let Some(key) = self.keys.get(index) {
            self.selected = key.clone();
        }
    }

    /// Index of the current selection in catalog order.
    pub fn selected_index(&self) -> Option<usize> {
        self.keys.iter().position(|k| k == &self.selected)
    }

    /// All selectable keys, in catalog order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(&VendorCatalog::new())
    }

    #[test]
    fn test_initial_selection_is_first_vendor() {
        assert_eq!(shell().selected(), "Google Vision");
    }

    #[test]
    fn test_selecting_valid_key_transitions() {
        let mut s = shell();
        s.select("Klippa");
        assert_eq!(s.selected(), "Klippa");
        s.select("Mindee");
        assert_eq!(s.selected(), "Mindee");
    }

    #[test]
    fn test_selecting_invalid_key_is_ignored() {
        let mut s = shell();
        s.select("Mindee");
        s.select("Nonexistent Vendor");
        assert_eq!(s.selected(), "Mindee", "unknown key should not change state");
    }

    #[test]
    fn test_reselecting_current_key_is_a_noop() {
        let mut s = shell();
        s.select("Docsumo");
        s.select("Docsumo");
        assert_eq!(s.selected(), "Docsumo");
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut s = shell();
        s.previous();
        assert_eq!(s.selected(), "Mindee", "previous from first should wrap to last");
        s.next();
        assert_eq!(s.selected(), "Google Vision", "next from last should wrap to first");
        s.next();
        assert_eq!(s.selected(), "Azure Vision");
    }

    #[test]
    fn test_select_index_bounds() {
        let mut s = shell();
        s.select_index(4);
        assert_eq!(s.selected(), "DocuClipper");
        s.select_index(99);
        assert_eq!(s.selected(), "DocuClipper", "out-of-range index should be ignored");
    }
}
