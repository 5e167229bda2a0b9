//! Reader capability contract
//!
//! [`CardReader`] is the seam between extension crates and whatever actually
//! talks to a card: a PC/SC terminal, an embedded interface, or an in-memory
//! stand-in for tests. Implementations transmit a [`CardRequest`] batch and
//! return one response per request, in request order.

use std::fmt;

use crate::request::CardRequest;
use crate::response::{CardResponse, StatusWord};

/// Boxed transport-level error cause carried inside [`ReaderError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What to do with the logical channel once a batch has been transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelControl {
    /// Keep the logical channel open for further exchanges.
    #[default]
    KeepOpen,
    /// Close the logical channel after the batch completes.
    CloseAfter,
}

/// Error raised by a [`CardReader`] while transmitting a batch.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// Communication with the reader itself failed
    #[error("reader communication failure")]
    ReaderCommunication(#[source] BoxError),

    /// The reader is fine but communication with the card failed
    #[error("card communication failure")]
    CardCommunication(#[source] BoxError),

    /// The card answered with a status word outside the accepted set
    #[error("unexpected status word: {status}")]
    UnexpectedStatus {
        /// The status word the card returned
        status: StatusWord,
    },
}

impl ReaderError {
    /// Wrap a transport-level cause as a reader communication failure.
    pub fn reader_communication(source: impl Into<BoxError>) -> Self {
        Self::ReaderCommunication(source.into())
    }

    /// Wrap a transport-level cause as a card communication failure.
    pub fn card_communication(source: impl Into<BoxError>) -> Self {
        Self::CardCommunication(source.into())
    }

    /// Report a status word outside the accepted set.
    pub const fn unexpected_status(status: StatusWord) -> Self {
        Self::UnexpectedStatus { status }
    }
}

/// Capability to transmit APDU batches to a card.
///
/// Contract for implementations:
/// - the returned [`CardResponse`] holds exactly one response per transmitted
///   request, in request order;
/// - a request whose status word falls outside its accepted set is reported
///   as [`ReaderError::UnexpectedStatus`];
/// - when [`CardRequest::stop_on_unsuccessful_status`] is set, transmission
///   stops at the first unsuccessful response.
pub trait CardReader: Send + Sync + fmt::Debug {
    /// Transmit the batch and collect the card's responses.
    fn transmit(
        &mut self,
        request: &CardRequest,
        channel_control: ChannelControl,
    ) -> Result<CardResponse, ReaderError>;
}
