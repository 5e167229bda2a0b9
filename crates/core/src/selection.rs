//! Card selection descriptors
//!
//! Selection itself is performed by the reader layer; this module only
//! defines the descriptor extension crates hand to it. A [`CardSelector`]
//! names the application to select and an optional filter on the power-on
//! data, and is carried opaquely until a reader consumes it.

use std::fmt;

use bytes::Bytes;

/// Filter describing which card an extension wants selected.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardSelector {
    aid: Option<Bytes>,
    power_on_data_pattern: Option<String>,
}

impl CardSelector {
    /// An empty selector accepting any card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by application identifier (DF name).
    pub fn with_aid(mut self, aid: impl Into<Bytes>) -> Self {
        self.aid = Some(aid.into());
        self
    }

    /// Filter on the power-on data with a regular expression pattern.
    ///
    /// The pattern is carried verbatim; the reader layer interprets it.
    pub fn with_power_on_data_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.power_on_data_pattern = Some(pattern.into());
        self
    }

    /// The application identifier to select, if any.
    pub const fn aid(&self) -> Option<&Bytes> {
        self.aid.as_ref()
    }

    /// The power-on data pattern, if any.
    pub fn power_on_data_pattern(&self) -> Option<&str> {
        self.power_on_data_pattern.as_deref()
    }
}

impl fmt::Debug for CardSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSelector")
            .field("aid", &self.aid.as_ref().map(hex::encode_upper))
            .field("power_on_data_pattern", &self.power_on_data_pattern)
            .finish()
    }
}
