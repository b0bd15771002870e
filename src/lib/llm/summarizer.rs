use std::{fmt::Debug, future::Future};

pub trait Summarizer {
    /// Hard upper bound on the delivered summary, enforced by the pipeline
    /// after trimming regardless of model compliance.
    const MAX_SUMMARY_CHARS: usize = 2_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        article: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
