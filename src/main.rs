use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use particle_news::error::AppError;
use particle_news::models::AppConfig;
use particle_news::services::{
    convert_to_particle, fetch_feed, image_document, parse_article, read_document,
    text_edition_url, write_document, write_feed, write_preview, Fetcher, ImagePipeline,
};

#[derive(Parser)]
#[command(name = "particle-news")]
#[command(about = "Turn news articles and images into particle documents for 1-bit viewers")]
struct Cli {
    /// Configuration file (YAML); falls back to CONFIG_FILE
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one image (URL or file) into an image document
    Image {
        /// http(s) URL or local file path
        source: String,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Fetch an article and write it as a text document
    Article {
        /// Article URL
        url: String,

        /// Output directory (index.json, image-<n>.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Also convert the article's images
        #[arg(long)]
        images: bool,
    },
    /// Fetch an RSS feed and convert its linked articles
    Feed {
        /// Feed URL
        url: String,

        /// Output directory (index.json, <n>/index.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Convert at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode the first image of a document into a PNG
    Preview {
        /// Particle document (JSON)
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "particle_news=info,particle_bitmap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Image { source, output }) => run_image_command(config, source, &output).await,
        Some(Commands::Article {
            url,
            output,
            images,
        }) => run_article_command(config, &url, &output, images).await,
        Some(Commands::Feed { url, output, limit }) => {
            run_feed_command(config, url, output, limit).await
        }
        Some(Commands::Preview { input, output }) => run_preview_command(&input, &output),
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

/// Convert a single image and write it as its own document
async fn run_image_command(config: AppConfig, source: String, output: &Path) -> anyhow::Result<()> {
    let pipeline = ImagePipeline::new(&config.image);
    let fetch = config.fetch.clone();

    // reqwest's blocking client must stay off the async runtime
    let block = tokio::task::spawn_blocking(move || -> Result<_, AppError> {
        let fetcher = Fetcher::new(&fetch)?;
        Ok(pipeline.process_source(&fetcher, &source)?)
    })
    .await
    .map_err(AppError::from)??;

    let (width, height) = (block.width, block.height);
    write_document(&image_document(block), output)?;
    println!("Wrote {} ({width}x{height} pixels)", output.display());

    Ok(())
}

/// Fetch, parse and convert an article, optionally with its images
async fn run_article_command(
    config: AppConfig,
    url: &str,
    output: &Path,
    with_images: bool,
) -> anyhow::Result<()> {
    let page_url = text_edition_url(url);
    let fetch = config.fetch.clone();

    let (fetcher, html) = tokio::task::spawn_blocking({
        let page_url = page_url.clone();
        move || -> Result<_, AppError> {
            let fetcher = Fetcher::new(&fetch)?;
            let html = fetcher.fetch_text(&page_url)?;
            Ok((fetcher, html))
        }
    })
    .await
    .map_err(AppError::from)??;

    let article = parse_article(&html, &page_url);
    let doc = convert_to_particle(&article, &config.article);
    let index_path = output.join("index.json");
    write_document(&doc, &index_path)?;
    println!("Wrote {} ({} paragraphs)", index_path.display(), doc.content.len());

    if !with_images {
        return Ok(());
    }
    if article.images.is_empty() {
        println!("No images found");
        return Ok(());
    }

    let pipeline = Arc::new(ImagePipeline::new(&config.image));
    let blocks = pipeline
        .process_many(Arc::new(fetcher), article.images.clone())
        .await;

    let mut written = 0;
    for (index, block) in blocks.into_iter().enumerate() {
        let Some(block) = block else {
            continue;
        };
        let path = output.join(format!("image-{}.json", index + 1));
        write_document(&image_document(block), &path)?;
        written += 1;
    }
    println!("Wrote {written} of {} images", article.images.len());

    Ok(())
}

/// Fetch a feed, write its overview and one document per linked article
async fn run_feed_command(
    config: AppConfig,
    url: String,
    output: PathBuf,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let (entries, written) = tokio::task::spawn_blocking(move || -> Result<_, AppError> {
        let fetcher = Fetcher::new(&config.fetch)?;
        let feed = fetch_feed(&fetcher, &url)?;
        let written = write_feed(&fetcher, &feed, &config.article, &output, limit)?;
        Ok((feed.entries.len(), written))
    })
    .await
    .map_err(AppError::from)??;

    println!("Wrote {written} articles from {entries} feed entries");
    Ok(())
}

/// Decode a document's first image for visual inspection
fn run_preview_command(input: &Path, output: &Path) -> anyhow::Result<()> {
    let doc = read_document(input)?;
    write_preview(&doc, output)?;
    println!("Rendered {}", output.display());
    Ok(())
}

fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Particle News v{VERSION}");
    println!("Articles and images as particle documents for 1-bit viewers\n");

    println!("Configuration:");
    match config_path {
        Some(path) if path.exists() => println!("  Source: {}", path.display()),
        Some(path) => println!("  Source: defaults ({} not found)", path.display()),
        None => println!("  Source: defaults"),
    }
    match serde_yaml::to_string(config) {
        Ok(yaml) => {
            for line in yaml.lines() {
                println!("  {line}");
            }
        }
        Err(e) => println!("  (cannot display: {e})"),
    }

    println!("\nCommands:");
    println!("  particle-news image <SOURCE> -o <OUT.json>          Convert one image");
    println!("  particle-news article <URL> -o <DIR> [--images]    Convert an article");
    println!("  particle-news feed <URL> -o <DIR> [--limit N]      Convert a feed's articles");
    println!("  particle-news preview <IN.json> -o <OUT.png>       Decode an image block");
    println!("\nRun 'particle-news --help' for more options.");
}
