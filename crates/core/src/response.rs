//! APDU response types and status word handling
//!
//! The response side mirrors the request side: a [`CardResponse`] carries one
//! [`ApduResponse`] per transmitted request, in request order. Responses keep
//! the complete bytes returned by the card; the trailing [`StatusWord`] and
//! the payload in front of it are exposed through accessors.

use std::fmt;

use bytes::Bytes;

/// Status Word (SW1-SW2) from an APDU response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// First status byte (SW1)
    pub sw1: u8,
    /// Second status byte (SW2)
    pub sw2: u8,
}

impl StatusWord {
    /// Create a new status word.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Create from a u16 value (SW1 | SW2).
    pub const fn from_u16(status: u16) -> Self {
        Self {
            sw1: (status >> 8) as u8,
            sw2: status as u8,
        }
    }

    /// Convert to a u16 value (SW1 | SW2).
    pub const fn to_u16(&self) -> u16 {
        ((self.sw1 as u16) << 8) | (self.sw2 as u16)
    }

    /// Check if this status word indicates success (90 00).
    pub const fn is_success(&self) -> bool {
        self.sw1 == 0x90 && self.sw2 == 0x00
    }
}

impl From<(u8, u8)> for StatusWord {
    fn from(tuple: (u8, u8)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<u16> for StatusWord {
    fn from(status: u16) -> Self {
        Self::from_u16(status)
    }
}

impl From<StatusWord> for u16 {
    fn from(status: StatusWord) -> Self {
        status.to_u16()
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}

/// The complete response returned by the card for one APDU request.
///
/// The bytes include the trailing status word. A well-formed response is at
/// least two bytes long; [`ApduResponse::status_word`] returns `None` for
/// anything shorter.
#[derive(Clone, PartialEq, Eq)]
pub struct ApduResponse {
    bytes: Bytes,
}

impl ApduResponse {
    /// Create a response from the raw bytes returned by the card.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The complete response bytes, status word included.
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consume the response and return the complete bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// The response data without the trailing status word.
    pub fn payload(&self) -> &[u8] {
        match self.bytes.len() {
            0..=2 => &[],
            len => &self.bytes[..len - 2],
        }
    }

    /// The trailing status word, if the response is long enough to carry one.
    pub fn status_word(&self) -> Option<StatusWord> {
        let len = self.bytes.len();
        if len < 2 {
            return None;
        }
        Some(StatusWord::new(self.bytes[len - 2], self.bytes[len - 1]))
    }

    /// Check if the response carries the standard success status word.
    pub fn is_success(&self) -> bool {
        self.status_word().is_some_and(|status| status.is_success())
    }
}

impl fmt::Debug for ApduResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApduResponse")
            .field("bytes", &hex::encode_upper(&self.bytes))
            .finish()
    }
}

/// The ordered batch of responses produced by one transmission.
///
/// Readers return exactly one [`ApduResponse`] per transmitted request, in
/// request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    apdu_responses: Vec<ApduResponse>,
}

impl CardResponse {
    /// Create a batch from the given responses, in request order.
    pub const fn new(apdu_responses: Vec<ApduResponse>) -> Self {
        Self { apdu_responses }
    }

    /// The responses, in request order.
    pub fn apdu_responses(&self) -> &[ApduResponse] {
        &self.apdu_responses
    }

    /// Consume the batch and return the responses, in request order.
    pub fn into_apdu_responses(self) -> Vec<ApduResponse> {
        self.apdu_responses
    }
}
