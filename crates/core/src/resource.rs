//! Card resources
//!
//! A [`CardResource`] pairs a [`CardReader`] with the [`SmartCard`] image
//! produced when the card was selected in that reader. Extension crates take
//! a resource rather than a bare reader so a transaction is always bound to a
//! card that is actually present.

use std::fmt;

use bytes::Bytes;

use crate::reader::CardReader;

/// Image of a card selected in a reader.
///
/// Implementations typically capture what selection produced: the power-on
/// data (ATR) and the response to the application selection command. Both are
/// optional since not every card or selection scenario provides them.
pub trait SmartCard: Send + Sync + fmt::Debug {
    /// Power-on data (ATR) captured when the card was detected.
    fn power_on_data(&self) -> Option<&str> {
        None
    }

    /// Raw response to the application selection command.
    fn select_application_response(&self) -> Option<&Bytes> {
        None
    }
}

/// A reader together with the card selected in it.
#[derive(Debug)]
pub struct CardResource<R: CardReader, C: SmartCard> {
    reader: R,
    card: C,
}

impl<R: CardReader, C: SmartCard> CardResource<R, C> {
    /// Bind a selected card to the reader it was selected in.
    pub const fn new(reader: R, card: C) -> Self {
        Self { reader, card }
    }

    /// The reader the card sits in.
    pub const fn reader(&self) -> &R {
        &self.reader
    }

    /// Mutable access to the reader, for transmitting.
    pub const fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// The selected card.
    pub const fn card(&self) -> &C {
        &self.card
    }

    /// Consume the resource and return the reader and card.
    pub fn into_parts(self) -> (R, C) {
        (self.reader, self.card)
    }
}
