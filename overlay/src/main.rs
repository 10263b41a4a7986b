//! Tooltip preview
//!
//! Renders the full tooltip pass for a built-in sample item (or a custom
//! catalog and settings file) onto a stand-in game tooltip and writes the
//! result as a PNG.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use tiertip_core::{
    AdvancedTooltip, ClipboardAction, ItemRarity, ModCatalog, Pos, Rect, RenderSurface,
    TextAnchor, TextMeasure, TooltipSettingsExt, spawn_copy,
};
use tiertip_overlay::sample::{sample_catalog, sample_item};
use tiertip_overlay::{Canvas, PreviewError};
use tiertip_types::{FastModsAnchor, TooltipSettings};

// ═══════════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

impl From<Rarity> for ItemRarity {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Normal => ItemRarity::Normal,
            Rarity::Magic => ItemRarity::Magic,
            Rarity::Rare => ItemRarity::Rare,
            Rarity::Unique => ItemRarity::Unique,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Anchor {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CopyTarget {
    StatNames,
    ModNames,
}

#[derive(Parser, Debug)]
#[command(name = "tiertip-preview")]
#[command(about = "Render the item mod tooltip for a sample item to a PNG")]
#[command(version)]
struct Args {
    /// Output PNG path
    #[arg(short, long, default_value = "tiertip-preview.png")]
    output: PathBuf,

    /// Mod catalog TOML (defaults to the bundled sample catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Settings TOML (defaults to built-in settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rarity of the sample item
    #[arg(long, value_enum, default_value_t = Rarity::Rare)]
    rarity: Rarity,

    /// Override the fast mods anchor edge
    #[arg(long, value_enum)]
    anchor: Option<Anchor>,

    /// Base font size in pixels
    #[arg(long, default_value_t = tiertip_overlay::DEFAULT_FONT_SIZE)]
    font_size: f32,

    #[arg(long, default_value_t = 720)]
    width: u32,

    #[arg(long, default_value_t = 680)]
    height: u32,

    /// Trace fast mods badges
    #[arg(long)]
    debug: bool,

    /// Also copy stat names or mod names to the clipboard
    #[arg(long, value_enum)]
    copy: Option<CopyTarget>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Logging
// ═══════════════════════════════════════════════════════════════════════════════

/// Stdout logging; `DEBUG_LOGGING=1` enables debug output for tiertip crates
fn init_logging() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,tiertip_core=debug,tiertip_overlay=debug,tiertip_preview=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Preview
// ═══════════════════════════════════════════════════════════════════════════════

/// Stand-in for the game's own tooltip
const GAME_TOOLTIP: Rect = Rect::new(300.0, 40.0, 380.0, 260.0);
const GAME_TOOLTIP_BG: [u8; 4] = [12, 10, 8, 240];
const GAME_TOOLTIP_FRAME: [u8; 4] = [110, 90, 60, 255];
const GAME_TOOLTIP_TEXT: [u8; 4] = [255, 255, 119, 255];
const CANVAS_BG: [u8; 4] = [36, 38, 44, 255];

fn load_catalog(path: Option<&Path>) -> Result<ModCatalog, PreviewError> {
    match path {
        Some(path) => Ok(ModCatalog::from_toml_str(&std::fs::read_to_string(path)?)?),
        None => Ok(sample_catalog()?),
    }
}

fn load_settings(args: &Args) -> Result<TooltipSettings, PreviewError> {
    let mut settings = match &args.config {
        Some(path) => TooltipSettings::load_from(path)?,
        None => TooltipSettings::default(),
    };
    if let Some(anchor) = args.anchor {
        settings.item_mods.fast_mods_anchor = match anchor {
            Anchor::Top => FastModsAnchor::Top,
            Anchor::Bottom => FastModsAnchor::Bottom,
        };
    }
    settings.debug.show_debug |= args.debug;
    Ok(settings)
}

fn draw_game_tooltip(canvas: &mut Canvas, base_type: &str) {
    canvas.fill_rect(GAME_TOOLTIP, GAME_TOOLTIP_BG);
    canvas.stroke_rect(GAME_TOOLTIP, GAME_TOOLTIP_FRAME, 1.0);
    let title = canvas.measure(base_type);
    canvas.draw_text(
        base_type,
        Pos::new(GAME_TOOLTIP.x + (GAME_TOOLTIP.w - title.w) / 2.0, GAME_TOOLTIP.y + 12.0),
        GAME_TOOLTIP_TEXT,
        TextAnchor::TopLeft,
        1.0,
    );
}

fn run(args: Args) -> Result<(), PreviewError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let settings = load_settings(&args)?;
    let item = sample_item(args.rarity.into());

    let mut canvas = Canvas::new(args.width, args.height, args.font_size)?;
    canvas.clear(CANVAS_BG);
    draw_game_tooltip(&mut canvas, &item.base_type);

    let mut tooltip = AdvancedTooltip::new();
    let output = tooltip.render(&item, GAME_TOOLTIP, &settings, &catalog, &mut canvas);
    output.display.paint(&mut canvas);

    if let Some(err) = &output.fast_mods_error {
        tracing::warn!(error = %err, "Fast mods panel was not drawn");
    }
    tracing::info!(
        commands = output.display.len(),
        block_height = output.block_height,
        t1 = output.counts.t1,
        t2 = output.counts.t2,
        t3 = output.counts.t3,
        badges = output.badges.len(),
        anchor = settings.item_mods.fast_mods_anchor.label(),
        "Rendered tooltip"
    );

    canvas.save_png(&args.output)?;
    tracing::info!(path = %args.output.display(), "Wrote preview");

    if let Some(target) = args.copy {
        let action = match target {
            CopyTarget::StatNames => ClipboardAction::StatNames,
            CopyTarget::ModNames => ClipboardAction::ModNames,
        };
        // Wait for the worker, the process would otherwise exit first
        if let Some(handle) = spawn_copy(action, tooltip.cached_mods())
            && handle.join().is_err()
        {
            tracing::warn!("Clipboard thread panicked");
        }
    }

    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = run(args) {
        tracing::error!(error = %err, "Preview failed");
        std::process::exit(1);
    }
}
