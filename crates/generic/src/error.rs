//! Error types for the generic card extension
//!
//! Two families share one enum: argument errors raised synchronously by the
//! prepare operations, and transaction failures raised by the process
//! operations after a transmission went wrong. Transaction failures keep the
//! reader-level cause attached.

use cardlink_core::ReaderError;

/// Result type for generic extension operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for generic extension operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An empty string was given where an APDU command was expected
    #[error("apdu command is empty")]
    EmptyApdu,

    /// The APDU command string is not valid hexadecimal
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The APDU command length is outside the 5 to 251 byte bounds
    #[error("invalid apdu command length: {0}")]
    InvalidLength(usize),

    /// Communication with the reader failed during transmission
    #[error("Reader communication error.")]
    ReaderCommunication(#[source] ReaderError),

    /// Communication with the card failed during transmission
    #[error("Card communication error.")]
    CardCommunication(#[source] ReaderError),

    /// The card returned a status word outside the accepted set
    #[error("Apdu error.")]
    Apdu(#[source] ReaderError),
}

impl Error {
    /// Whether this error was raised by a prepare operation rejecting its
    /// input.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyApdu | Self::InvalidHex(_) | Self::InvalidLength(_)
        )
    }

    /// Whether this error was raised by a process operation after a failed
    /// transmission.
    pub const fn is_transaction_failure(&self) -> bool {
        matches!(
            self,
            Self::ReaderCommunication(_) | Self::CardCommunication(_) | Self::Apdu(_)
        )
    }
}

impl From<ReaderError> for Error {
    fn from(error: ReaderError) -> Self {
        match error {
            ReaderError::ReaderCommunication(_) => Self::ReaderCommunication(error),
            ReaderError::CardCommunication(_) => Self::CardCommunication(error),
            ReaderError::UnexpectedStatus { .. } => Self::Apdu(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use cardlink_core::StatusWord;

    use super::*;

    #[test]
    fn test_reader_error_mapping() {
        let error = Error::from(ReaderError::reader_communication(std::io::Error::other(
            "usb unplugged",
        )));
        assert!(matches!(error, Error::ReaderCommunication(_)));
        assert_eq!(error.to_string(), "Reader communication error.");

        let error = Error::from(ReaderError::card_communication(std::io::Error::other(
            "card mute",
        )));
        assert!(matches!(error, Error::CardCommunication(_)));
        assert_eq!(error.to_string(), "Card communication error.");

        let error = Error::from(ReaderError::unexpected_status(StatusWord::new(0x6A, 0x82)));
        assert!(matches!(error, Error::Apdu(_)));
        assert_eq!(error.to_string(), "Apdu error.");
    }

    #[test]
    fn test_cause_is_preserved() {
        let error = Error::from(ReaderError::reader_communication(std::io::Error::other(
            "usb unplugged",
        )));
        let reader_error = error.source().map(ToString::to_string);
        assert_eq!(reader_error.as_deref(), Some("reader communication failure"));
    }

    #[test]
    fn test_error_families() {
        assert!(Error::EmptyApdu.is_invalid_argument());
        assert!(Error::InvalidLength(4).is_invalid_argument());
        assert!(!Error::EmptyApdu.is_transaction_failure());

        let failure = Error::from(ReaderError::unexpected_status(StatusWord::new(0x67, 0x00)));
        assert!(failure.is_transaction_failure());
        assert!(!failure.is_invalid_argument());
    }
}
