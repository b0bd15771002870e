use std::path::{Path, PathBuf};

use anyhow::Context;
use blogcast::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, Credentials, ElevenLabsClient, Error,
    FirecrawlClient, PodcastPipelineBuilder, PodcastRequest, DOWNLOAD_FILENAME,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blogcast", about = "Turns a blog article into a short spoken-word podcast")]
struct Cli {
    /// Blog article URL
    url: String,

    /// Firecrawl API key
    #[arg(long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
    firecrawl_key: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: String,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    elevenlabs_key: String,

    /// Directory where generated audio accumulates
    #[arg(long, default_value = "audio_generations")]
    output_dir: PathBuf,

    /// Also copy the audio here under the fixed download name
    #[arg(long)]
    download_to: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let credentials = Credentials {
        firecrawl: cli.firecrawl_key,
        openai: cli.openai_key,
        elevenlabs: cli.elevenlabs_key,
    };
    // no client is constructed and no call goes out on a blank key
    credentials.validate()?;

    let pipeline = PodcastPipelineBuilder::new(&cli.output_dir)
        .fetcher(FirecrawlClient::new(&credentials.firecrawl))
        .summarizer(OpenAIClient::new(&credentials.openai))
        .synthesizer(ElevenLabsClient::new(&credentials.elevenlabs))
        .build();

    match pipeline.run(PodcastRequest { url: cli.url }).await {
        Ok(artifact) => {
            println!("Podcast generated: {}", artifact.path.display());
            if let Some(dir) = cli.download_to {
                let download_path = write_download_copy(&dir, &artifact.bytes)?;
                println!("Download copy: {}", download_path.display());
            }
            Ok(())
        }
        Err(Error::DeliveryRead {
            path,
            bytes,
            source,
        }) => {
            // the audio was produced; playback from disk is unavailable but
            // the synthesized bytes are still good for download
            eprintln!(
                "Podcast saved to {} but could not be read back for playback: {source}",
                path.display()
            );
            if let Some(dir) = cli.download_to {
                let download_path = write_download_copy(&dir, &bytes)?;
                println!("Download copy: {}", download_path.display());
            }
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Podcast generation failed"),
    }
}

fn write_download_copy(dir: &Path, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(DOWNLOAD_FILENAME);
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write download copy to {}", path.display()))?;
    Ok(path)
}
