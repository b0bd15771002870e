pub mod builder;

use std::path::PathBuf;

use uuid::Uuid;

use crate::{error::Stage, ContentFetcher, Error, SpeechSynthesizer, Summarizer};

/// Fixed display name offered for download, distinct from the unique
/// on-disk name.
pub const DOWNLOAD_FILENAME: &str = "generated_podcast.mp3";

/// One blog-to-podcast run: a single URL, consumed once.
#[derive(Debug, Clone)]
pub struct PodcastRequest {
    pub url: String,
}

/// Per-invocation secrets for the three external services. Held in memory
/// only; never persisted, never logged.
#[derive(Clone)]
pub struct Credentials {
    pub firecrawl: String,
    pub openai: String,
    pub elevenlabs: String,
}

impl Credentials {
    /// Rejects any blank secret before a single client is constructed, so
    /// no network call can be issued on missing input.
    pub fn validate(&self) -> Result<(), Error> {
        if self.firecrawl.trim().is_empty() {
            return Err(Error::MissingInput("firecrawl api key"));
        }
        if self.openai.trim().is_empty() {
            return Err(Error::MissingInput("openai api key"));
        }
        if self.elevenlabs.trim().is_empty() {
            return Err(Error::MissingInput("elevenlabs api key"));
        }
        Ok(())
    }
}

/// The saved podcast: its on-disk path, the bytes read back for playback,
/// and the narration script that was synthesized.
#[derive(Debug)]
pub struct PodcastArtifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub summary: String,
}

// The core blog-to-podcast pipeline
pub struct PodcastPipeline<F, S, V>
where
    F: ContentFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    output_dir: PathBuf,
    fetcher: F,
    summarizer: S,
    synthesizer: V,
}

impl<F, S, V> PodcastPipeline<F, S, V>
where
    F: ContentFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    /// Runs the four stages in strict order: fetch, summarize, synthesize,
    /// deliver. Each stage's output is the next stage's sole input; any
    /// failure is terminal for the run.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, request: PodcastRequest) -> Result<PodcastArtifact, Error> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(Error::MissingInput("url"));
        }

        let article = self
            .fetcher
            .fetch_article(url)
            .await
            .map_err(|e| Error::UpstreamCall {
                stage: Stage::Extraction,
                source: anyhow::anyhow!("Failed to fetch article: {e:?}"),
            })?;

        // halt before any downstream call gets billed
        if article.trim().is_empty() {
            tracing::error!(url, "No article content extracted");
            return Err(Error::ExtractionEmpty {
                url: url.to_string(),
            });
        }
        tracing::info!(chars = article.len(), "Fetched article content");

        let summary_resp = self
            .summarizer
            .summarize(&article)
            .await
            .map_err(|e| Error::UpstreamCall {
                stage: Stage::Summarization,
                source: anyhow::anyhow!("Failed to summarize article: {e:?}"),
            })?;

        let summary = clamp_summary(&summary_resp.summary, S::MAX_SUMMARY_CHARS);
        tracing::info!(chars = summary.len(), "Prepared narration script");

        let audio = self
            .synthesizer
            .synthesize(&summary)
            .await
            .map_err(|e| Error::UpstreamCall {
                stage: Stage::Synthesis,
                source: anyhow::anyhow!("Failed to synthesize speech: {e:?}"),
            })?;
        tracing::info!(bytes = audio.len(), "Synthesized podcast audio");

        self.deliver(audio, summary)
    }

    /// Writes the audio under a fresh unique name, then reads it back for
    /// playback. Files accumulate in the output directory across runs;
    /// cleanup is the caller's concern.
    #[tracing::instrument(skip_all)]
    fn deliver(&self, audio: Vec<u8>, summary: String) -> Result<PodcastArtifact, Error> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("podcast_{}.mp3", Uuid::new_v4()));
        std::fs::write(&path, &audio)?;

        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved podcast");
                Ok(PodcastArtifact {
                    path,
                    bytes,
                    summary,
                })
            }
            Err(source) => Err(Error::DeliveryRead {
                path,
                bytes: audio,
                source,
            }),
        }
    }
}

/// Trims the model output and hard-truncates it to the first `max_chars`
/// characters. Truncation may clip mid-word; the bound holds regardless of
/// model compliance.
fn clamp_summary(raw: &str, max_chars: usize) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_summary;

    #[test]
    fn short_summary_only_trimmed() {
        assert_eq!(clamp_summary("  hello there  \n", 2_000), "hello there");
    }

    #[test]
    fn overlong_summary_cut_to_exactly_max_chars() {
        let raw = format!("  {}  ", "a".repeat(2_500));
        let clamped = clamp_summary(&raw, 2_000);
        assert_eq!(clamped.chars().count(), 2_000);
        assert_eq!(clamped, "a".repeat(2_000));
    }

    #[test]
    fn boundary_length_summary_untouched() {
        let raw = "b".repeat(2_000);
        assert_eq!(clamp_summary(&raw, 2_000), raw);
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let raw = "é".repeat(2_100);
        let clamped = clamp_summary(&raw, 2_000);
        assert_eq!(clamped.chars().count(), 2_000);
        assert_eq!(clamped, "é".repeat(2_000));
    }
}
