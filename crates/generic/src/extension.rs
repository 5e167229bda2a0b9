//! Extension entry point
//!
//! [`GenericExtension`] is the factory for everything this crate offers:
//! card selections and card transactions. It is a plain value; construct it
//! where your application wires its dependencies and pass it to whoever
//! needs it. Callers that want one process-wide instance instead can use
//! [`GenericExtension::shared`].

use std::sync::OnceLock;

use cardlink_core::{CardReader, CardResource, CardSelector, SmartCard};

use crate::selection::GenericCardSelection;
use crate::transaction::GenericCardTransaction;

/// Factory for generic card selections and transactions.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericExtension;

impl GenericExtension {
    /// Create an extension instance.
    pub const fn new() -> Self {
        Self
    }

    /// The process-wide shared instance, created on first access.
    ///
    /// Concurrent first calls observe exactly one instance.
    pub fn shared() -> &'static Self {
        static INSTANCE: OnceLock<GenericExtension> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Create a selection carrying the given selector.
    pub const fn create_card_selection(&self, selector: CardSelector) -> GenericCardSelection {
        GenericCardSelection::new(selector)
    }

    /// Create a transaction on the reader of the given resource.
    ///
    /// The transaction borrows the resource for its whole lifetime; the
    /// resource guarantees a reader and a selected card are both present.
    pub const fn create_card_transaction<'a, R, C>(
        &self,
        resource: &'a mut CardResource<R, C>,
    ) -> GenericCardTransaction<'a, R>
    where
        R: CardReader,
        C: SmartCard,
    {
        GenericCardTransaction::new(resource)
    }

    /// Version of the core contracts this extension was built against.
    pub const fn core_api_version(&self) -> &'static str {
        cardlink_core::API_VERSION
    }

    /// Version of this extension crate.
    pub const fn extension_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
