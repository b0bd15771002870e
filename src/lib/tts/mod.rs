pub mod elevenlabs;

use std::{fmt::Debug, future::Future};

/// Converts narration text into an encoded audio byte stream.
pub trait SpeechSynthesizer {
    const SPEECH_MODEL: &'static str;
    const OUTPUT_FORMAT: &'static str;

    type Error: Debug;

    fn synthesize(&self, text: &str) -> impl Future<Output = Result<Vec<u8>, Self::Error>>;
}
