use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use vectorpad::demo;
use vectorpad::{
    editor_options, init_logging, Editor, EditorConfig, FileImageLoader, ImageLoader,
    PixmapProvider, BUILD_DATE, VERSION,
};
use vectorpad_scene::LoadedImage;

/// VectorPad headless renderer.
///
/// Runs a scripted drawing and editing session and writes the composited
/// viewport to a PNG.
#[derive(Parser, Debug)]
#[command(
    name = "vectorpad",
    version,
    about = "Render a scripted VectorPad editing session to an image"
)]
struct CliArgs {
    /// Editor configuration (JSON or TOML). Defaults to the platform config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image to place in the scene before the script runs.
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Trim transparent borders from the placed image.
    #[arg(long)]
    crop: bool,

    /// Where to write the rendered scene.
    #[arg(short, long, value_name = "FILE", default_value = "vectorpad.png")]
    output: PathBuf,

    /// Write the effective configuration to this file and continue.
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    if let Some(path) = path {
        return EditorConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()));
    }
    match EditorConfig::default_path() {
        Ok(path) if path.exists() => Ok(EditorConfig::load_from_file(&path)?),
        _ => Ok(EditorConfig::default()),
    }
}

fn load_image(path: &Path) -> anyhow::Result<LoadedImage> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let loader = FileImageLoader::new();
    Ok(runtime.block_on(loader.load(&path.to_string_lossy()))?)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = CliArgs::parse();
    info!("VectorPad {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.write_config {
        config.save_to_file(path)?;
    }

    let mut editor = Editor::new(editor_options(&config), Rc::new(PixmapProvider))?;
    if let Some(path) = &args.image {
        let loaded = load_image(path)?;
        demo::place_image(&mut editor, loaded, args.crop);
    }

    demo::sketch(&mut editor)?;

    editor
        .composite()
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());
    Ok(())
}
