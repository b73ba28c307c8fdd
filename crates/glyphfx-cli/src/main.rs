//! # glyphfx
//!
//! Build, migrate and render text effect models from the command line.
//!
//! ```bash
//! glyphfx shadow --distance 50 --angle -45 --transparency 40
//! glyphfx --config builders.json elevation --strength 80 --blur 30
//! glyphfx migrate legacy-style.json --output effect.json
//! glyphfx render effect.json --text "Spin to win" --width 400 --height 120
//! glyphfx render effect.json --text "Spin" --backend css
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyphfx_core::{
    BuilderConfigs, ElevationParams, GlowParams, OutlineParams, ShadowParams, TextEffectModel,
    build_elevation_effect, build_glow_effect, build_outline_effect, build_shadow_effect,
    migrate_css_to_text_effect,
};
use glyphfx_render::{
    CssRenderer, EffectRenderer, FontAttributes, InstanceKey, RenderContext, SvgRenderer,
};
use kurbo::{Point, Size};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "glyphfx")]
#[command(about = "Build, migrate and render parametric text effects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the result to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Builder scaling constants (JSON with shadow/elevation/glow/outline sections)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a drop shadow effect
    Shadow {
        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        distance: f64,
        /// Direction in degrees (0 = right, 90 = down)
        #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
        angle: f64,
        #[arg(long, default_value_t = 0.0)]
        blur: f64,
        /// Shadow opacity as 0..100
        #[arg(long, default_value_t = 40.0)]
        transparency: f64,
        #[arg(long, default_value = "#000000")]
        color: String,
    },

    /// Build a lifted-off-the-page elevation effect
    Elevation {
        #[arg(long, default_value_t = 50.0)]
        strength: f64,
        #[arg(long, default_value_t = 50.0)]
        blur: f64,
        #[arg(long, default_value_t = 40.0)]
        transparency: f64,
        #[arg(long, default_value = "#000000")]
        color: String,
    },

    /// Build a centered glow effect
    Glow {
        #[arg(long, default_value_t = 50.0)]
        size: f64,
        #[arg(long, default_value_t = 80.0)]
        transparency: f64,
        #[arg(long, default_value = "#ffffff")]
        color: String,
    },

    /// Build an outlined text effect
    Outline {
        #[arg(long, default_value_t = 25.0)]
        thickness: f64,
        #[arg(long, default_value = "#000000")]
        color: String,
        #[arg(long, default_value = "#ffffff")]
        fill_color: String,
    },

    /// Convert a legacy flat style object into an effect model
    Migrate {
        /// JSON file holding the style object
        style: PathBuf,
    },

    /// Render an effect model for a piece of text
    Render {
        /// JSON file holding the effect model
        model: PathBuf,

        #[arg(long)]
        text: String,

        #[arg(long, default_value_t = 300.0)]
        width: f64,

        #[arg(long, default_value_t = 100.0)]
        height: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        /// Scope for generated ids (random when omitted)
        #[arg(long)]
        key: Option<String>,

        #[arg(long, default_value = "sans-serif")]
        font_family: String,

        #[arg(long, default_value_t = 32.0)]
        font_size: f64,

        #[arg(long, default_value_t = 400)]
        font_weight: u16,

        #[arg(long)]
        italic: bool,

        #[arg(long, value_enum, default_value_t = Backend::Svg)]
        backend: Backend,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Svg,
    Css,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let configs = load_configs(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Shadow {
            distance,
            angle,
            blur,
            transparency,
            color,
        } => {
            let params = ShadowParams {
                distance,
                angle,
                blur,
                transparency,
                color,
            };
            model_json(&build_shadow_effect(&params, &configs.shadow))?
        }
        Commands::Elevation {
            strength,
            blur,
            transparency,
            color,
        } => {
            let params = ElevationParams {
                strength,
                blur,
                transparency,
                color,
            };
            model_json(&build_elevation_effect(&params, &configs.elevation))?
        }
        Commands::Glow {
            size,
            transparency,
            color,
        } => {
            let params = GlowParams {
                size,
                transparency,
                color,
            };
            model_json(&build_glow_effect(&params, &configs.glow))?
        }
        Commands::Outline {
            thickness,
            color,
            fill_color,
        } => {
            let params = OutlineParams {
                thickness,
                color,
                fill_color,
            };
            model_json(&build_outline_effect(&params, &configs.outline))?
        }
        Commands::Migrate { style } => {
            let source = read_to_string(&style)?;
            let model = migrate_source(&source)
                .with_context(|| format!("{} is not valid JSON", style.display()))?;
            model_json(&model)?
        }
        Commands::Render {
            model,
            text,
            width,
            height,
            x,
            y,
            key,
            font_family,
            font_size,
            font_weight,
            italic,
            backend,
        } => {
            let source = read_to_string(&model)?;
            let effect = TextEffectModel::from_json(&source)
                .with_context(|| format!("invalid effect model in {}", model.display()))?;
            let key = key.map(InstanceKey::new).unwrap_or_else(InstanceKey::random);
            let font = FontAttributes::new(font_family, font_size)
                .with_weight(font_weight)
                .with_italic(italic);
            let ctx = RenderContext::new(&effect, &text, &key, Size::new(width, height))
                .with_position(Point::new(x, y))
                .with_font(font);
            render(&ctx, backend)
        }
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn load_configs(path: Option<&Path>) -> Result<BuilderConfigs> {
    let Some(path) = path else {
        return Ok(BuilderConfigs::default());
    };
    let source = read_to_string(path)?;
    let configs = BuilderConfigs::from_json(&source)
        .with_context(|| format!("invalid builder config in {}", path.display()))?;
    log::info!("Loaded builder config from {}", path.display());
    Ok(configs)
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Any JSON value migrates; non-objects yield the default effect.
fn migrate_source(source: &str) -> serde_json::Result<TextEffectModel> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    Ok(migrate_css_to_text_effect(&value))
}

fn model_json(model: &TextEffectModel) -> Result<String> {
    log::info!(
        "Built {:?} with {} layer(s)",
        model.name.as_deref().unwrap_or("effect"),
        model.layers.len()
    );
    model.to_json().context("failed to serialize effect model")
}

fn render(ctx: &RenderContext, backend: Backend) -> String {
    match backend {
        Backend::Svg => {
            let renderer = SvgRenderer::new();
            log::info!("Rendering with {} backend", renderer.name());
            renderer.render(ctx)
        }
        Backend::Css => {
            let renderer = CssRenderer::new();
            log::info!("Rendering with {} backend", renderer.name());
            renderer
                .render(ctx)
                .layers
                .iter()
                .map(|layer| layer.to_inline())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
