use crate::config::load_config;
use crate::layout::layout_dialog;
use crate::layout_dump::write_layout_dump;
use crate::measure::{BoundaryCache, Measurer};
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use crate::schema::parse_dialog;
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bfr", version, about = "Flowchart layout and rendering for declarative bot dialogs")]
pub struct Args {
    /// Input dialog file (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for svg and layout output.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (layout intervals, theme overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Theme preset, overriding the config file
    #[arg(short = 't', long = "theme", value_enum)]
    pub theme: Option<ThemePreset>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    /// Positioned nodes and edges as JSON, without drawing anything
    Layout,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemePreset {
    Light,
    Dark,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(preset) = args.theme {
        config.theme = match preset {
            ThemePreset::Light => Theme::light(),
            ThemePreset::Dark => Theme::dark(),
        };
        config.render.background = config.theme.background.clone();
    }

    let input = read_input(args.input.as_deref())?;
    let doc = parse_dialog(&input)?;

    let mut cache = BoundaryCache::new();
    let mut measurer = Measurer::new(&mut cache, &config.layout);
    let flow = layout_dialog(&doc, &mut measurer);

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&flow, &config);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let svg = render_svg(&flow, &config);
                let output = ensure_output(&args.output, "png")?;
                write_output_png(&svg, &output)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!("this build does not include PNG output"));
        }
        OutputFormat::Layout => {
            write_layout_dump(&flow, args.output.as_deref())?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_format_and_theme_flags() {
        let args = Args::parse_from(["bfr", "-i", "dialog.json", "-e", "layout", "-t", "dark"]);
        assert!(matches!(args.output_format, OutputFormat::Layout));
        assert!(matches!(args.theme, Some(ThemePreset::Dark)));
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_output_requires_a_path() {
        assert!(ensure_output(&None, "png").is_err());
        let path = ensure_output(&Some(PathBuf::from("out.png")), "png").unwrap();
        assert_eq!(path, PathBuf::from("out.png"));
    }
}
