// SPDX-License-Identifier: MPL-2.0
use folio_lens::application::navigator::GalleryNavigator;
use folio_lens::cli::{self, Flags};
use folio_lens::config::{self, Config};
use folio_lens::error::{Error, Result};
use folio_lens::infrastructure::page::{self, OverlayElements};
use folio_lens::infrastructure::render::RecordingOverlay;
use folio_lens::ui::lightbox::Lightbox;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_logging();

    let flags = match Flags::parse(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        print!("{}", cli::HELP);
        return ExitCode::SUCCESS;
    }

    if flags.write_default_config {
        return match cli::write_default_config(&flags) {
            Ok(path) => {
                println!("wrote {}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio_lens=info".into());

    // A second init only fails if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn load_config(flags: &Flags) -> Result<Config> {
    if let Some(path) = &flags.config {
        return config::load_from_path(Path::new(path));
    }

    let (config, warning) =
        config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

fn run(flags: &Flags) -> Result<()> {
    let page_path = flags
        .page
        .as_deref()
        .ok_or_else(|| Error::Page("no page given (see --help)".to_string()))?;

    let config = load_config(flags)?;
    let scan = page::scan_file(Path::new(page_path), config.gallery.selector())?;
    tracing::info!(page = page_path, items = scan.entries.len(), "gallery collected");

    let elements = if flags.create_overlay {
        OverlayElements::all()
    } else {
        scan.overlay_elements
    };
    let overlay = RecordingOverlay::bind(&elements, &config.overlay);
    let navigator = GalleryNavigator::new(scan.entries, overlay)
        .with_caption_source(config.gallery.caption_source());
    let mut lightbox = Lightbox::new(navigator);

    let stdout = io::stdout();
    let dispatched = match &flags.script {
        Some(path) => {
            let file = File::open(path)?;
            cli::run_script(&mut lightbox, BufReader::new(file), stdout.lock())?
        }
        None => cli::run_script(&mut lightbox, io::stdin().lock(), stdout.lock())?,
    };

    tracing::info!(events = dispatched, "script finished");
    Ok(())
}
