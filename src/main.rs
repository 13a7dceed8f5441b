use anyhow::{Context, Result, bail};
use cheatsheet::persistence::{autosave_path, load_document, save_document};
use cheatsheet::render::export_png_pages;
use cheatsheet::{Editor, ImageHandle, PaperSize, Settings};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
cheatsheet - lay out images on printable pages

USAGE:
  cheatsheet [OPTIONS] [IMAGE]...

OPTIONS:
  --load FILE       Start from a saved document (default: autosave if present)
  --new             Ignore the autosave and start blank
  --paper NAME      a4 or letter (default: from settings)
  --one-per-page    Put each image on its own page
  --save FILE       Write the document here (default: autosave)
  --export DIR      Write page-NNN.png files into DIR
  --dpi N           Export resolution (default: from settings)
  -h, --help        Print this help
";

struct Args {
    load: Option<PathBuf>,
    new: bool,
    paper: Option<PaperSize>,
    one_per_page: bool,
    save: Option<PathBuf>,
    export: Option<PathBuf>,
    dpi: Option<u32>,
    images: Vec<PathBuf>,
}

fn parse_paper(name: &str) -> Result<PaperSize, String> {
    match name.to_ascii_lowercase().as_str() {
        "a4" => Ok(PaperSize::A4),
        "letter" => Ok(PaperSize::Letter),
        other => Err(format!("unknown paper size '{other}'")),
    }
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        load: args.opt_value_from_str("--load")?,
        new: args.contains("--new"),
        paper: args.opt_value_from_fn("--paper", parse_paper)?,
        one_per_page: args.contains("--one-per-page"),
        save: args.opt_value_from_str("--save")?,
        export: args.opt_value_from_str("--export")?,
        dpi: args.opt_value_from_str("--dpi")?,
        images: args.finish().into_iter().map(PathBuf::from).collect(),
    };

    if parsed.images.iter().any(|p| p.to_string_lossy().starts_with('-')) {
        bail!("unknown option, see --help");
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let mut settings = Settings::load();
    if let Some(paper) = args.paper {
        settings.paper = paper;
    }
    let dpi = args.dpi.unwrap_or(settings.export_dpi);
    let autosave = autosave_path().context("Failed to locate autosave file")?;

    let mut editor = Editor::with_settings(settings);
    let source = match (&args.load, args.new) {
        (Some(path), _) => Some(path.clone()),
        (None, false) if autosave.exists() => Some(autosave.clone()),
        _ => None,
    };
    if let Some(path) = source {
        let doc = load_document(&path, editor.settings().paper)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        editor.set_document(doc);
    }

    for (index, path) in args.images.iter().enumerate() {
        if args.one_per_page && (index > 0 || !editor.document().current_page().is_empty()) {
            editor.next_page();
        }
        let image = ImageHandle::from_path(path)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        editor.add_image(image);
        info!(path = %path.display(), page = %editor.page_label(), "Imported image");
    }

    let save_path = args.save.unwrap_or(autosave);
    save_document(editor.document(), &save_path)
        .with_context(|| format!("Failed to save {}", save_path.display()))?;

    if let Some(dir) = args.export {
        let paths = export_png_pages(editor.document(), &dir, dpi)
            .with_context(|| format!("Failed to export to {}", dir.display()))?;
        for path in paths {
            println!("{}", path.display());
        }
    }

    Ok(())
}
