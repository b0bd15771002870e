use reqwest::Client;

use crate::tts::SpeechSynthesizer;

pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
    voice_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl ElevenLabsClient {
    /// Default narration voice ("George").
    pub const DEFAULT_VOICE_ID: &'static str = "JBFqnCBsd6RMkjVDRZzb";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.elevenlabs.io/v1".into(),
            voice_id: Self::DEFAULT_VOICE_ID.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub async fn send_speech_request(
        &self,
        text: &str,
        model_id: &str,
        output_format: &str,
    ) -> Result<Vec<u8>, ElevenLabsError> {
        let body = serde_json::json!({
            "text": text,
            "model_id": model_id
        });

        let resp = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, self.voice_id))
            .header("xi-api-key", &self.api_key)
            .query(&[("output_format", output_format)])
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    const SPEECH_MODEL: &'static str = "eleven_multilingual_v2";
    const OUTPUT_FORMAT: &'static str = "mp3_44100_128";
    type Error = ElevenLabsError;

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, Self::Error> {
        self.send_speech_request(text, Self::SPEECH_MODEL, Self::OUTPUT_FORMAT)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))
    }
}
