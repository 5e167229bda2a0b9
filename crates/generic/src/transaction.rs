//! APDU batch transactions
//!
//! [`GenericCardTransaction`] accumulates raw APDU commands and transmits
//! them as one batch through the reader of the [`CardResource`] it was
//! created on. The queue is cleared on every flush, successful or not, so a
//! failed batch never leaks into the next one.

use std::mem;

use bytes::Bytes;
use cardlink_core::{
    ApduRequest, CardReader, CardRequest, CardResource, ChannelControl, SmartCard,
};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Minimum accepted APDU command length: the four header bytes plus one.
pub const APDU_MIN_LENGTH: usize = 5;

/// Maximum accepted APDU command length: what a single short frame can carry.
pub const APDU_MAX_LENGTH: usize = 251;

/// A transaction accumulating APDU commands for one card session.
///
/// Commands are queued with the `prepare_*` operations and transmitted as a
/// single batch by [`process_apdus`](Self::process_apdus) or
/// [`process_apdus_hex`](Self::process_apdus_hex). Each flush is an
/// independent batch; the queue is empty again once a flush returns,
/// whatever the outcome.
///
/// The transaction borrows the resource's reader for its whole lifetime, so
/// it is bound to exactly one reader and cannot outlive the resource.
#[derive(Debug)]
pub struct GenericCardTransaction<'a, R: CardReader> {
    reader: &'a mut R,
    apdu_requests: Vec<ApduRequest>,
    channel_control: ChannelControl,
}

impl<'a, R: CardReader> GenericCardTransaction<'a, R> {
    /// Create a transaction on the reader of the given resource.
    pub(crate) const fn new<C: SmartCard>(resource: &'a mut CardResource<R, C>) -> Self {
        Self {
            reader: resource.reader_mut(),
            apdu_requests: Vec::new(),
            channel_control: ChannelControl::KeepOpen,
        }
    }

    /// Queue a hex-encoded APDU command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyApdu`] for an empty string,
    /// [`Error::InvalidHex`] when the string is not valid hexadecimal, and
    /// [`Error::InvalidLength`] when the decoded command falls outside
    /// [`APDU_MIN_LENGTH`]..=[`APDU_MAX_LENGTH`]. Nothing is queued on error.
    pub fn prepare_apdu_hex(&mut self, apdu_command: &str) -> Result<&mut Self> {
        if apdu_command.is_empty() {
            return Err(Error::EmptyApdu);
        }
        self.prepare_apdu(hex::decode(apdu_command)?)
    }

    /// Queue an APDU command given as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] when the command falls outside
    /// [`APDU_MIN_LENGTH`]..=[`APDU_MAX_LENGTH`]. Nothing is queued on error.
    pub fn prepare_apdu(&mut self, apdu_command: impl Into<Bytes>) -> Result<&mut Self> {
        let bytes = apdu_command.into();
        if !(APDU_MIN_LENGTH..=APDU_MAX_LENGTH).contains(&bytes.len()) {
            return Err(Error::InvalidLength(bytes.len()));
        }
        trace!(apdu = ?hex::encode_upper(&bytes), "Queueing APDU command");
        self.apdu_requests.push(ApduRequest::new(bytes));
        Ok(self)
    }

    /// Queue an APDU command built from its individual fields.
    ///
    /// `data` and `le` are optional; empty data is treated as absent. The
    /// command is serialized by [`ApduRequest::from_parts`]; unlike the raw
    /// forms, this one performs no length check of its own.
    pub fn prepare_apdu_parts(
        &mut self,
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: Option<&[u8]>,
        le: Option<u8>,
    ) -> &mut Self {
        let request = ApduRequest::from_parts(cla, ins, p1, p2, data, le);
        trace!(apdu = ?request, "Queueing APDU command");
        self.apdu_requests.push(request);
        self
    }

    /// Close the logical channel after the next flush.
    ///
    /// The directive sticks for the rest of the transaction; there is no way
    /// back to keeping the channel open.
    pub const fn prepare_release_channel(&mut self) -> &mut Self {
        self.channel_control = ChannelControl::CloseAfter;
        self
    }

    /// Transmit the queued commands as one batch and return the responses.
    ///
    /// Responses are the complete bytes returned by the card, status word
    /// included, one per command and in command order. An empty queue
    /// returns an empty list without touching the reader. The queue is
    /// cleared before the reader is invoked, so it is empty after every
    /// flush, successful or not.
    ///
    /// # Errors
    ///
    /// A transmission failure surfaces as [`Error::ReaderCommunication`],
    /// [`Error::CardCommunication`] or [`Error::Apdu`] depending on where it
    /// originated, with the reader-level cause attached. No partial
    /// responses are returned.
    pub fn process_apdus(&mut self) -> Result<Vec<Bytes>> {
        if self.apdu_requests.is_empty() {
            return Ok(Vec::new());
        }
        let apdu_requests = mem::take(&mut self.apdu_requests);
        debug!(
            count = apdu_requests.len(),
            channel_control = ?self.channel_control,
            "Transmitting APDU batch"
        );
        let card_request = CardRequest::new(apdu_requests);
        let card_response = self.reader.transmit(&card_request, self.channel_control)?;
        Ok(card_response
            .into_apdu_responses()
            .into_iter()
            .map(|response| response.into_bytes())
            .collect())
    }

    /// Transmit the queued commands and return each response hex-encoded.
    ///
    /// Same behavior and error semantics as
    /// [`process_apdus`](Self::process_apdus); each response is uppercase
    /// hex, in command order.
    pub fn process_apdus_hex(&mut self) -> Result<Vec<String>> {
        Ok(self
            .process_apdus()?
            .iter()
            .map(hex::encode_upper)
            .collect())
    }
}
