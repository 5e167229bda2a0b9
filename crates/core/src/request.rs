//! APDU request batching types
//!
//! This module provides the request side of a card exchange: a single
//! [`ApduRequest`] queued for transmission, and the [`CardRequest`] batch a
//! reader transmits as one unit.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::response::StatusWord;

/// A single APDU command awaiting transmission.
///
/// A request is immutable once constructed. It is either built from an
/// already-encoded command with [`ApduRequest::new`], or assembled from the
/// ISO/IEC 7816-4 components with [`ApduRequest::from_parts`].
///
/// By default only the standard success status word (`90 00`) is treated as
/// successful by the transmitting reader. A request may declare additional
/// status words as successful with [`ApduRequest::with_successful_status`];
/// responses carrying one of them must not be reported as
/// [`ReaderError::UnexpectedStatus`](crate::reader::ReaderError::UnexpectedStatus).
#[derive(Clone, PartialEq, Eq)]
pub struct ApduRequest {
    bytes: Bytes,
    successful_statuses: Vec<StatusWord>,
}

impl ApduRequest {
    /// Create a request from an already-encoded APDU command.
    pub fn new(apdu: impl Into<Bytes>) -> Self {
        Self {
            bytes: apdu.into(),
            successful_statuses: Vec::new(),
        }
    }

    /// Assemble a request from the command components.
    ///
    /// The encoding is the short form: CLA, INS, P1, P2 header, then Lc and
    /// the data field when `data` is non-empty, then Le when present. Empty
    /// data is treated as absent. The data field is expected to fit a short
    /// APDU (Lc is a single byte).
    pub fn from_parts(
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: Option<&[u8]>,
        le: Option<u8>,
    ) -> Self {
        let data = data.filter(|data| !data.is_empty());

        let mut buffer = BytesMut::with_capacity(
            4 + data.map_or(0, |data| data.len() + 1) + le.map_or(0, |_| 1),
        );

        // Header: CLA, INS, P1, P2
        buffer.put_u8(cla);
        buffer.put_u8(ins);
        buffer.put_u8(p1);
        buffer.put_u8(p2);

        // Add Lc and data if present
        if let Some(data) = data {
            buffer.put_u8(data.len() as u8);
            buffer.put_slice(data);
        }

        // Add Le if present
        if let Some(le) = le {
            buffer.put_u8(le);
        }

        Self {
            bytes: buffer.freeze(),
            successful_statuses: Vec::new(),
        }
    }

    /// Declare an additional status word as successful for this request.
    pub fn with_successful_status(mut self, status: StatusWord) -> Self {
        self.successful_statuses.push(status);
        self
    }

    /// Get the encoded command bytes.
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consume the request and return the encoded command bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Status words accepted as successful in addition to `90 00`.
    pub fn successful_statuses(&self) -> &[StatusWord] {
        &self.successful_statuses
    }
}

impl fmt::Debug for ApduRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApduRequest")
            .field("bytes", &hex::encode_upper(&self.bytes))
            .field("successful_statuses", &self.successful_statuses)
            .finish()
    }
}

/// An ordered batch of APDU requests transmitted as one unit.
///
/// The batch optionally directs the reader to stop at the first response
/// whose status word is not successful for its request; the flag is off by
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    apdu_requests: Vec<ApduRequest>,
    stop_on_unsuccessful_status: bool,
}

impl CardRequest {
    /// Create a batch from the given requests, in transmission order.
    pub const fn new(apdu_requests: Vec<ApduRequest>) -> Self {
        Self {
            apdu_requests,
            stop_on_unsuccessful_status: false,
        }
    }

    /// Direct the reader to stop at the first unsuccessful status word.
    pub const fn with_stop_on_unsuccessful_status(mut self) -> Self {
        self.stop_on_unsuccessful_status = true;
        self
    }

    /// The queued requests, in transmission order.
    pub fn apdu_requests(&self) -> &[ApduRequest] {
        &self.apdu_requests
    }

    /// Whether the reader must stop at the first unsuccessful status word.
    pub const fn stop_on_unsuccessful_status(&self) -> bool {
        self.stop_on_unsuccessful_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_parts_serialization() {
        let data = [0xA0, 0x00, 0x00, 0x01, 0x51, 0x00];
        let request = ApduRequest::from_parts(0x00, 0xA4, 0x04, 0x00, Some(&data), Some(0x00));
        let bytes = request.bytes();

        assert_eq!(bytes[0], 0x00); // CLA
        assert_eq!(bytes[1], 0xA4); // INS
        assert_eq!(bytes[2], 0x04); // P1
        assert_eq!(bytes[3], 0x00); // P2
        assert_eq!(bytes[4], 0x06); // Lc (data length)
        assert_eq!(&bytes[5..11], &data);
        assert_eq!(bytes[11], 0x00); // Le
        assert_eq!(bytes.len(), 12);
    }

    #[test]
    fn test_request_from_parts_header_only() {
        let request = ApduRequest::from_parts(0x00, 0xB0, 0x00, 0x00, None, None);
        assert_eq!(request.bytes().as_ref(), &[0x00, 0xB0, 0x00, 0x00]);
    }

    #[test]
    fn test_request_from_parts_le_only() {
        let request = ApduRequest::from_parts(0x00, 0xB0, 0x00, 0x00, None, Some(0xFF));
        assert_eq!(request.bytes().as_ref(), &[0x00, 0xB0, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn test_request_from_parts_data_only() {
        let request = ApduRequest::from_parts(0x00, 0xD6, 0x00, 0x00, Some(&[0x01, 0x02]), None);
        assert_eq!(
            request.bytes().as_ref(),
            &[0x00, 0xD6, 0x00, 0x00, 0x02, 0x01, 0x02]
        );
    }

    #[test]
    fn test_request_from_parts_empty_data_is_absent() {
        let request = ApduRequest::from_parts(0x00, 0xA4, 0x04, 0x00, Some(&[]), Some(0x00));
        assert_eq!(request.bytes().as_ref(), &[0x00, 0xA4, 0x04, 0x00, 0x00]);
    }

    #[test]
    fn test_request_successful_statuses() {
        let request = ApduRequest::new(Bytes::from_static(&[0x00, 0xB0, 0x00, 0x00, 0x00]));
        assert!(request.successful_statuses().is_empty());

        let request = request.with_successful_status(StatusWord::new(0x62, 0x82));
        assert_eq!(
            request.successful_statuses(),
            &[StatusWord::new(0x62, 0x82)]
        );
    }

    #[test]
    fn test_card_request_defaults() {
        let requests = vec![
            ApduRequest::new(Bytes::from_static(&[0x00, 0xB0, 0x00, 0x00, 0x00])),
            ApduRequest::new(Bytes::from_static(&[0x00, 0xB0, 0x00, 0x01, 0x00])),
        ];
        let card_request = CardRequest::new(requests.clone());

        assert_eq!(card_request.apdu_requests(), requests.as_slice());
        assert!(!card_request.stop_on_unsuccessful_status());

        let card_request = card_request.with_stop_on_unsuccessful_status();
        assert!(card_request.stop_on_unsuccessful_status());
    }
}
