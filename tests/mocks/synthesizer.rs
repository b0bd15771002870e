use std::sync::{Arc, Mutex};

use blogcast::SpeechSynthesizer;

#[derive(Clone)]
pub struct MockSynthesizer {
    pub audio: Vec<u8>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSynthesizer {
    pub fn new(audio: &[u8]) -> Self {
        Self {
            audio: audio.to_vec(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    const SPEECH_MODEL: &'static str = "mock-voice-v1";
    const OUTPUT_FORMAT: &'static str = "mp3_44100_128";
    type Error = anyhow::Error;

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, Self::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.audio.clone())
    }
}
