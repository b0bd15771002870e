mod error;
mod llm;
mod pipeline;
pub mod extract;
pub mod tracing;
pub mod tts;

pub use error::{Error, Stage};
pub use extract::{firecrawl::FirecrawlClient, ContentFetcher};
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use pipeline::{
    builder::PodcastPipelineBuilder, Credentials, PodcastArtifact, PodcastPipeline,
    PodcastRequest, DOWNLOAD_FILENAME,
};
pub use tts::{elevenlabs::ElevenLabsClient, SpeechSynthesizer};
