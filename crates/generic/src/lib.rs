//! Generic card extension for assembling and transmitting raw APDU batches
//!
//! This crate is the thinnest useful extension over [`cardlink_core`]: it
//! carries no card-specific command set and no protocol state. It queues raw
//! APDU commands, given as hex strings, byte sequences or individual fields,
//! and transmits them as one batch through whatever reader the caller's
//! [`CardResource`] is bound to, returning raw or hex-encoded responses.
//!
//! The main entry point is the [`GenericExtension`] struct, which creates
//! card selections and card transactions. A [`GenericCardTransaction`] is a
//! fluent builder: `prepare_*` calls queue commands, `process_*` calls flush
//! the queue as one transmission.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod extension;
pub mod selection;
pub mod transaction;

// Re-exports
pub use error::{Error, Result};
pub use extension::GenericExtension;
pub use selection::GenericCardSelection;
pub use transaction::{APDU_MAX_LENGTH, APDU_MIN_LENGTH, GenericCardTransaction};

// Re-export from cardlink_core for convenience
pub use cardlink_core::{
    CardReader, CardResource, CardSelector, ChannelControl, ReaderError, SmartCard,
};
