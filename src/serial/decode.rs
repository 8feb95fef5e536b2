/// Incremental UTF-8 decoder for an inbound byte stream.
///
/// Bytes that can never begin or continue a valid sequence are dropped one at
/// a time; a valid prefix of a multi-byte sequence is held back until the rest
/// arrives, so sequences split across reads reassemble.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes`, appending complete characters to `out`.
    pub fn feed(&mut self, bytes: &[u8], out: &mut String) {
        self.pending.extend_from_slice(bytes);

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    out.push_str(valid);
                    self.pending.clear();
                    return;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    if valid_up_to > 0 {
                        if let Ok(valid) = std::str::from_utf8(&self.pending[..valid_up_to]) {
                            out.push_str(valid);
                        }
                    }
                    match err.error_len() {
                        Some(bad) => {
                            // Drop the undecodable bytes and keep going.
                            self.pending.drain(..valid_up_to + bad);
                        }
                        None => {
                            // Incomplete tail; wait for more bytes.
                            self.pending.drain(..valid_up_to);
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Bytes held back waiting for the rest of a sequence.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serial/decode.rs"]
mod tests;
