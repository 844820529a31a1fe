use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use luna_core::{Locals, Platform, Size, Theme, Viewport};
use luna_devtools::{FrameTimer, Inspector, Metrics};
use luna_home::{HomeScreen, ThemeConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Ios,
    Android,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Tree,
    Json,
}

/// Composes the Luna home screen for a viewport and prints the view tree.
#[derive(Parser, Debug)]
#[command(name = "home-preview", version)]
struct Cli {
    #[arg(long, default_value_t = 390.0)]
    width: f32,
    #[arg(long, default_value_t = 844.0)]
    height: f32,
    /// Use the dark color scheme.
    #[arg(long)]
    dark: bool,
    #[arg(long, value_enum, default_value = "ios")]
    platform: PlatformArg,
    /// On-screen keyboard height.
    #[arg(long, default_value_t = 0.0)]
    keyboard: f32,
    /// JSON palette overrides.
    #[arg(long)]
    palette: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "tree")]
    format: Format,
    /// Include laid-out rects in the dump.
    #[arg(long)]
    layout: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let theme = match &cli.palette {
        Some(path) => ThemeConfig::load(path)
            .and_then(|cfg| cfg.theme(cli.dark))
            .with_context(|| format!("loading palette {}", path.display()))?,
        None if cli.dark => Theme::dark(),
        None => Theme::light(),
    };
    let platform = match cli.platform {
        PlatformArg::Ios => Platform::Ios,
        PlatformArg::Android => Platform::Android,
    };
    let locals = Locals::new(theme, Viewport::new(cli.width, cli.height))
        .with_platform(platform)
        .with_keyboard_height(cli.keyboard);
    log::info!(
        "previewing {}x{} ({:?}, {:?})",
        cli.width,
        cli.height,
        locals.layout_mode(),
        platform
    );

    let mut timer = FrameTimer::start();
    let view = HomeScreen(&locals);
    let build_ms = timer.lap_ms();

    let size = Size {
        width: cli.width,
        height: cli.height,
    };
    let tree = luna_ui::layout(&view, size).context("laying out home screen")?;
    let scene = luna_ui::paint(&view, &tree);
    let layout_ms = timer.lap_ms();

    let metrics = Metrics {
        build_ms,
        layout_ms,
        view_nodes: view.node_count(),
        scene_nodes: scene.nodes.len(),
    };

    let inspector = Inspector::new().with_rects(cli.layout);
    let rects = cli.layout.then_some(&tree);
    match cli.format {
        Format::Tree => {
            print!("{}", inspector.dump_tree(&view, rects));
            println!(
                "-- {} views, {} scene nodes, build {:.2}ms, layout+paint {:.2}ms, content height {:.0}",
                metrics.view_nodes,
                metrics.scene_nodes,
                metrics.build_ms,
                metrics.layout_ms,
                tree.content_bottom()
            );
        }
        Format::Json => {
            let dump = inspector
                .dump_json(&view, rects)
                .context("serializing view tree")?;
            println!("{dump}");
            log::info!("{metrics:?}");
        }
    }

    Ok(())
}
