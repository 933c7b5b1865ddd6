use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "touchup", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an edit script over a cutout and write the result as PNG.
    Apply(ApplyArgs),
    /// Print the aspect-fit display rectangle for a buffer inside a container.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// AI-processed cutout (PNG or any format `image` decodes).
    #[arg(long)]
    cutout: PathBuf,

    /// Unmodified original image used by the restore brush.
    #[arg(long)]
    original: PathBuf,

    /// Edit script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Editor config JSON; overrides the script's own config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Buffer size as `WxH`.
    #[arg(long, value_parser = parse_dims)]
    buffer: (u32, u32),

    /// Container size as `WxH`.
    #[arg(long, value_parser = parse_dims)]
    container: (u32, u32),
}

fn parse_dims(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let script = touchup::EditScript::from_path(&args.script)?;
    let config = match &args.config {
        Some(path) => touchup::EditorConfig::from_path(path)?,
        None => script.editor_config(),
    };

    let cutout = std::fs::read(&args.cutout)
        .with_context(|| format!("read cutout '{}'", args.cutout.display()))?;
    let original = std::fs::read(&args.original)
        .with_context(|| format!("read original '{}'", args.original.display()))?;

    let mut session = touchup::EditorSession::from_encoded(&cutout, &original, config)?;
    let report = script.apply(&mut session)?;
    tracing::info!(
        steps = report.steps,
        strokes = report.strokes,
        undos = report.undos,
        ignored = report.ignored,
        "script applied"
    );

    let png = session.export_png()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let (bw, bh) = args.buffer;
    let (cw, ch) = args.container;
    let container = touchup::Rect::new(0.0, 0.0, f64::from(cw), f64::from(ch));
    let rect = touchup::DisplayRect::fit(container, touchup::Dimensions::new(bw, bh))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&rect).context("serialize display rect")?
    );
    Ok(())
}
