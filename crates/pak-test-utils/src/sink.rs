//! In-memory log sinks.

use std::sync::{Arc, Mutex};

/// Byte buffer shared between a test and the logger under test.
///
/// Coerces to `pak_bard::Sink` when passed by value.
pub type SharedBuffer = Arc<Mutex<Vec<u8>>>;

pub fn shared_buffer() -> SharedBuffer {
    Arc::new(Mutex::new(Vec::new()))
}

/// Everything written to `buffer` so far, as UTF-8.
///
/// # Panics
/// Panics if the buffer holds invalid UTF-8.
pub fn contents(buffer: &SharedBuffer) -> String {
    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
