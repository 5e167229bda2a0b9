//! Core contracts for smart card access
//!
//! This crate defines the shared vocabulary that extension crates and reader
//! implementations agree on.
//!
//! ## Overview
//!
//! Extensions talk to cards by assembling APDU (Application Protocol Data
//! Unit) batches and handing them to a reader. This crate provides the
//! contracts for that exchange:
//!
//! - Building APDU request batches and reading back response batches
//! - The [`CardReader`] capability readers implement to transmit a batch
//! - The [`CardResource`] pairing of a reader with a selected card
//! - The [`CardSelector`] descriptor handed to the selection layer
//!
//! It contains no transport of its own. Concrete readers (PC/SC or
//! otherwise) implement [`CardReader`] in their own crates; extension crates
//! build on the contracts without caring which reader sits underneath.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

// Main modules
pub mod reader;
pub mod request;
pub mod resource;
pub mod response;
pub mod selection;

// Re-exports for common types
pub use reader::{BoxError, CardReader, ChannelControl, ReaderError};
pub use request::{ApduRequest, CardRequest};
pub use resource::{CardResource, SmartCard};
pub use response::{ApduResponse, CardResponse, StatusWord};
pub use selection::CardSelector;

/// Version of the core contracts exposed by this crate.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        Bytes, BytesMut,
        reader::{BoxError, CardReader, ChannelControl, ReaderError},
        request::{ApduRequest, CardRequest},
        resource::{CardResource, SmartCard},
        response::{ApduResponse, CardResponse, StatusWord},
        selection::CardSelector,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the basic types are re-exported correctly
    #[test]
    fn test_reexports() {
        let request = ApduRequest::new(Bytes::from_static(&[0x00, 0xA4, 0x04, 0x00, 0x00]));
        assert_eq!(request.bytes().len(), 5);

        let response = ApduResponse::new(Bytes::from_static(&[0x90, 0x00]));
        assert!(response.is_success());
        assert_eq!(response.status_word(), Some(StatusWord::new(0x90, 0x00)));

        assert!(!API_VERSION.is_empty());
    }
}
