// SPDX-License-Identifier: MIT
//
// Clipboard collaborator.
//
// The core never touches the system clipboard; `copy` hands text to
// whatever implements `Clipboard`. The terminal implementation uses the
// OSC 52 escape sequence, which most modern terminals (and tmux with
// `set-clipboard on`) forward to the host clipboard, over SSH too:
//
//   ESC ] 52 ; c ; <base64 payload> BEL

use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Something that can take text for the user's clipboard.
pub trait Clipboard {
    /// Offer `text`. Returns `false` if it could not be delivered.
    fn copy(&mut self, text: &str) -> bool;
}

/// Writes OSC 52 "set clipboard" sequences to a terminal stream.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The full escape sequence for `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> bool {
        let sequence = osc52_sequence(text);
        let result = self
            .out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush());
        match result {
            Ok(()) => {
                tracing::debug!(bytes = text.len(), "copied to clipboard");
                true
            }
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                false
            }
        }
    }
}
