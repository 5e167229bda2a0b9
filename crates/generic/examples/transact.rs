//! Queue a few APDU commands and flush them as one batch.
//!
//! No physical reader is required: the example binds the transaction to an
//! in-memory reader that answers like a minimal file-system card.

use cardlink_core::prelude::*;
use cardlink_generic::GenericExtension;

/// Reader simulating a card that answers SELECT and READ BINARY.
#[derive(Debug, Default)]
struct LoopbackReader;

impl CardReader for LoopbackReader {
    fn transmit(
        &mut self,
        request: &CardRequest,
        channel_control: ChannelControl,
    ) -> Result<CardResponse, ReaderError> {
        println!(
            "-- transmitting {} command(s), channel control {:?}",
            request.apdu_requests().len(),
            channel_control
        );
        let responses = request
            .apdu_requests()
            .iter()
            .map(|apdu| {
                let reply = match apdu.bytes().get(1).copied() {
                    // SELECT: a small FCI template
                    Some(0xA4) => "6F108408315449432E494341A5049F6501FF9000",
                    // READ BINARY: sixteen bytes of record data
                    Some(0xB0) => "00112233445566778899AABBCCDDEEFF9000",
                    _ => "9000",
                };
                ApduResponse::new(hex::decode(reply).unwrap_or_default())
            })
            .collect();
        Ok(CardResponse::new(responses))
    }
}

#[derive(Debug)]
struct LoopbackCard;

impl SmartCard for LoopbackCard {
    fn power_on_data(&self) -> Option<&str> {
        Some("3B8F8001804F0CA000000306030001000000006A")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut resource = CardResource::new(LoopbackReader, LoopbackCard);
    println!(
        "Card present, power-on data: {}",
        resource.card().power_on_data().unwrap_or("(none)")
    );

    let extension = GenericExtension::new();
    println!(
        "Extension {} over core contracts {}",
        extension.extension_version(),
        extension.core_api_version()
    );

    let mut transaction = extension.create_card_transaction(&mut resource);
    transaction
        .prepare_apdu_hex("00A4040008315449432E49434100")?
        .prepare_apdu_parts(0x00, 0xB0, 0x00, 0x00, None, Some(0x10))
        .prepare_release_channel();

    let responses = transaction.process_apdus_hex()?;
    for (index, response) in responses.iter().enumerate() {
        println!("response {index}: {response}");
    }

    // The queue is empty again: flushing now is a no-op.
    assert!(transaction.process_apdus()?.is_empty());

    Ok(())
}
