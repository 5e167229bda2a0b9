//! Card selection for the generic extension
//!
//! The generic extension adds nothing of its own to selection: it wraps the
//! caller's [`CardSelector`] and hands it to the selection layer unchanged.

use cardlink_core::CardSelector;

/// Selection descriptor produced by the generic extension.
///
/// Carries the caller's [`CardSelector`] verbatim; a reader-side selection
/// layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericCardSelection {
    selector: CardSelector,
}

impl GenericCardSelection {
    pub(crate) const fn new(selector: CardSelector) -> Self {
        Self { selector }
    }

    /// The selector this selection was created with.
    pub const fn selector(&self) -> &CardSelector {
        &self.selector
    }

    /// Consume the selection and return the selector.
    pub fn into_selector(self) -> CardSelector {
        self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_carries_selector_verbatim() {
        let selector = CardSelector::new()
            .with_aid(hex::decode("A000000151000000").unwrap())
            .with_power_on_data_pattern("3B.*");
        let selection = GenericCardSelection::new(selector.clone());
        assert_eq!(selection.selector(), &selector);
        assert_eq!(selection.into_selector(), selector);
    }
}
