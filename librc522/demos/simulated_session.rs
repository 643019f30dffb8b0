// Read/write session against the simulated MFRC522 and NTAG tag.
//
// Run with `RUST_LOG=debug cargo run --example simulated_session -- "new text"`
// to see the session's log output.

use anyhow::Context;
use librc522::prelude::*;
use librc522::transport::{MockTransport, SimulatedTag};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "hello, tag".into());

    let uid = Uid::from_bytes([0x04, 0x3C, 0x51, 0x9A]);
    let mock = MockTransport::with_tag(SimulatedTag::with_text(uid, b"factory default!"));

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build_uninitialized()?;
    let mut dev = device.initialize().context("initializing reader")?;
    println!("chip version: {:#04x}", dev.version()?);

    match dev.detect()? {
        Some(tag) => println!(
            "tag in field: UID = {}",
            tag.uid().map(|u| u.to_hex()).unwrap_or_default()
        ),
        None => println!("no tag in field"),
    }

    match dev.read_tag_text()? {
        Some(t) => println!("before: {:?}", t),
        None => println!("read failed: no tag"),
    }

    match dev.write_tag_text(&text)? {
        Some(n) => println!("wrote {:?} in {} page(s)", text, n),
        None => println!("write failed: no tag"),
    }

    if let Some(t) = dev.read_tag_text()? {
        println!("after:  {:?}", t);
    }

    println!("frames on air: {}", mock.frames().len());
    for frame in mock.frames() {
        println!("  {}", bytes_to_hex_spaced(&frame));
    }

    mock.set_tag(None);
    println!("tag removed, read -> {:?}", dev.read_tag_text()?);
    Ok(())
}
