use std::path::PathBuf;

use crate::{ContentFetcher, PodcastPipeline, SpeechSynthesizer, Summarizer};

pub struct PodcastPipelineBuilder<F = (), S = (), V = ()> {
    output_dir: PathBuf,
    fetcher: F,
    summarizer: S,
    synthesizer: V,
}

impl PodcastPipelineBuilder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            fetcher: (),
            summarizer: (),
            synthesizer: (),
        }
    }
}

impl<F, S, V> PodcastPipelineBuilder<F, S, V> {
    pub fn fetcher<F2: ContentFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> PodcastPipelineBuilder<F2, S, V> {
        PodcastPipelineBuilder {
            output_dir: self.output_dir,
            fetcher,
            summarizer: self.summarizer,
            synthesizer: self.synthesizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> PodcastPipelineBuilder<F, S2, V> {
        PodcastPipelineBuilder {
            output_dir: self.output_dir,
            fetcher: self.fetcher,
            summarizer,
            synthesizer: self.synthesizer,
        }
    }

    pub fn synthesizer<V2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        synthesizer: V2,
    ) -> PodcastPipelineBuilder<F, S, V2> {
        PodcastPipelineBuilder {
            output_dir: self.output_dir,
            fetcher: self.fetcher,
            summarizer: self.summarizer,
            synthesizer,
        }
    }
}

impl<F, S, V> PodcastPipelineBuilder<F, S, V>
where
    F: ContentFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    pub fn build(self) -> PodcastPipeline<F, S, V> {
        PodcastPipeline {
            output_dir: self.output_dir,
            fetcher: self.fetcher,
            summarizer: self.summarizer,
            synthesizer: self.synthesizer,
        }
    }
}
