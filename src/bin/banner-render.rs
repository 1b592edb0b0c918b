use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use banner_render::{
    Banner, BannerMeta, Canvas, ClientOpts, Compositor, MetaClient, PatternImageCache,
    PatternLoader, PixelBuffer,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "banner-render", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a banner code to a PNG.
    Render(RenderArgs),
    /// Print a banner's metadata as JSON.
    Meta(MetaArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON options file (see `ClientOpts`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Banner API root, e.g. `http://127.0.0.1:3000/api`.
    #[arg(long)]
    api: Option<String>,
}

impl SourceArgs {
    fn opts(&self) -> anyhow::Result<ClientOpts> {
        let mut opts = match &self.config {
            Some(path) => ClientOpts::from_path(path)?,
            None => ClientOpts::default(),
        };
        if let Some(api) = &self.api {
            opts.api_base_url = api.clone();
        }
        opts.validate()?;
        Ok(opts)
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Banner code, e.g. `f010045`.
    #[arg(long)]
    code: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Decode the code locally and read masks from `<dir>/<name>.png`.
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Output size as WxH; must match the pattern masks.
    #[arg(long)]
    canvas: Option<Canvas>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Debug)]
struct MetaArgs {
    /// Banner code, e.g. `f010045`.
    #[arg(long)]
    code: String,

    /// Decode the code locally instead of asking the API.
    #[arg(long, default_value_t = false)]
    local: bool,

    #[command(flatten)]
    source: SourceArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args).await,
        Command::Meta(args) => cmd_meta(args).await,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut opts = args.source.opts()?;
    if let Some(canvas) = args.canvas {
        opts.canvas = canvas;
    }
    if let Some(dir) = &args.patterns {
        opts.pattern_dir = Some(dir.clone());
    }

    let buffer = match opts.dir_pattern_cache() {
        Some(cache) => {
            let banner = Banner::from_code(&args.code)?;
            render(cache, opts.canvas, &banner).await?
        }
        None => {
            let banner = MetaClient::from_opts(&opts)?
                .get_banner(&args.code)
                .await?;
            render(opts.http_pattern_cache()?, opts.canvas, &banner).await?
        }
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    buffer.write_png(&args.out)?;

    tracing::info!(out = %args.out.display(), "wrote banner");
    Ok(())
}

async fn render<L: PatternLoader>(
    cache: Arc<PatternImageCache<L>>,
    canvas: Canvas,
    banner: &Banner,
) -> anyhow::Result<PixelBuffer> {
    let compositor = Compositor::new(cache);
    let buffer = compositor.render_to_buffer(canvas, banner).await?;
    Ok(buffer)
}

async fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let meta = if args.local {
        BannerMeta::from(&Banner::from_code(&args.code)?)
    } else {
        let opts = args.source.opts()?;
        MetaClient::from_opts(&opts)?
            .get_banner_meta(&args.code)
            .await?
    };
    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}
