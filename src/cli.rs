//! Command-line front end
//!
//! Each subcommand loads one asset, applies a single edit and writes the
//! whole file back, in place or to `--output`.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use xbm_color_rs::color_pipeline::{
    color::parse_hex_rgb8, BaseColor, ColorSession, EditorConfig, NonFinitePolicy,
    NormalizationMode, RawColor,
};

/// Inspect and edit the IlluminationColor1 value of an asset file
#[derive(Parser)]
#[command(name = "xbm-color")]
#[command(version)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Refuse files whose color holds NaN or infinity
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stored color and its preview
    Show(ShowArgs),

    /// Overwrite all four channels
    Set(SetArgs),

    /// Rescale an HDR color so its brightest channel is 1.0
    Normalize(EditArgs),

    /// Store a standard-range color, keeping the HDR scale of the preview
    Pick(PickArgs),

    /// Store a base color multiplied by an intensity
    Hdr(HdrArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    pub file: PathBuf,

    /// Preview with per-channel clamping instead of auto-normalization
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct EditArgs {
    pub file: PathBuf,

    /// Write here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SetArgs {
    #[command(flatten)]
    pub edit: EditArgs,

    #[arg(
        long,
        num_args = 4,
        value_names = ["R", "G", "B", "A"],
        allow_negative_numbers = true,
        required = true
    )]
    pub rgba: Vec<f32>,
}

#[derive(Args)]
pub struct PickArgs {
    #[command(flatten)]
    pub edit: EditArgs,

    /// Picked color as #RRGGBB
    #[arg(long, value_parser = parse_rgb8)]
    pub hex: [u8; 3],

    /// Take the pick literally, ignoring the HDR scale of the preview
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct HdrArgs {
    #[command(flatten)]
    pub edit: EditArgs,

    /// Base color as #RRGGBB
    #[arg(long, value_parser = parse_base)]
    pub base: BaseColor,

    /// Multiplier applied to the base color [default: current HDR scale, or 1.0]
    #[arg(long)]
    pub intensity: Option<f32>,
}

fn parse_rgb8(s: &str) -> std::result::Result<[u8; 3], String> {
    parse_hex_rgb8(s).ok_or_else(|| format!("expected #RRGGBB, got '{}'", s))
}

fn parse_base(s: &str) -> std::result::Result<BaseColor, String> {
    BaseColor::from_hex(s).ok_or_else(|| format!("expected #RRGGBB, got '{}'", s))
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    fn config(&self, mode: NormalizationMode) -> EditorConfig {
        EditorConfig::builder()
            .normalization(mode)
            .non_finite(if self.strict {
                NonFinitePolicy::Reject
            } else {
                NonFinitePolicy::PassThrough
            })
            .build()
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Show(args) => {
            let mode = if args.raw {
                NormalizationMode::Raw
            } else {
                NormalizationMode::Auto
            };
            let session = open(&args.file, cli.config(mode))?;
            print_summary(&session)
        }
        Commands::Set(args) => {
            let [red, green, blue, alpha] = args.rgba[..] else {
                bail!("--rgba takes exactly four values");
            };
            let mut session = open(&args.edit.file, cli.config(NormalizationMode::Auto))?;
            session.set_color(RawColor::new(red, green, blue, alpha))?;
            finish(&mut session, &args.edit)
        }
        Commands::Normalize(args) => {
            let mut session = open(&args.file, cli.config(NormalizationMode::Auto))?;
            match session.normalize()? {
                Some(factor) => println!("Normalized by {:.3}x", factor),
                None => {
                    println!("Already in range, nothing to do");
                    return Ok(());
                }
            }
            finish(&mut session, args)
        }
        Commands::Pick(args) => {
            let mode = if args.raw {
                NormalizationMode::Raw
            } else {
                NormalizationMode::Auto
            };
            let mut session = open(&args.edit.file, cli.config(mode))?;
            session.apply_standard_pick(args.hex)?;
            finish(&mut session, &args.edit)
        }
        Commands::Hdr(args) => {
            let mut session = open(&args.edit.file, cli.config(NormalizationMode::Auto))?;
            let intensity = match args.intensity {
                Some(intensity) => intensity,
                None => session.default_hdr_intensity()?,
            };
            session.apply_hdr_pick(args.base, intensity)?;
            finish(&mut session, &args.edit)
        }
    }
}

fn open(path: &Path, config: EditorConfig) -> Result<ColorSession> {
    let mut session = ColorSession::new(config);
    session
        .load_file(path)
        .with_context(|| format!("Cannot edit {}", path.display()))?;
    Ok(session)
}

fn finish(session: &mut ColorSession, args: &EditArgs) -> Result<()> {
    let output = args.output.as_ref().unwrap_or(&args.file);
    session
        .save_to(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    print_summary(session)?;
    println!("Saved: {}", output.display());
    Ok(())
}

fn print_summary(session: &ColorSession) -> Result<()> {
    let summary = session.summary()?;
    let hex = summary.current.channel_hex();
    let name = summary
        .file_name
        .ok_or_else(|| anyhow!("session has no source file"))?;

    println!("File:       {} ({} bytes)", name, summary.file_size);
    println!("Position:   {}", summary.offset);
    println!("Raw RGBA:   {}", summary.current);
    println!("Hex bytes:  R:{} G:{} B:{} A:{}", hex[0], hex[1], hex[2], hex[3]);
    println!(
        "Display:    {}{}",
        summary.display.to_hex(),
        if summary.display.normalized {
            format!(" (normalized by {:.3}x)", summary.display.scale_factor)
        } else {
            String::new()
        }
    );
    println!("HDR status: {}", summary.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["xbm-color", "show", "a.xbm"]);
        assert_eq!(cli.log_level(), "info");
        let cli = Cli::parse_from(["xbm-color", "show", "a.xbm", "-v"]);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_hdr_intensity_is_optional() {
        let cli = Cli::parse_from(["xbm-color", "hdr", "a.xbm", "--base", "#FF8000"]);
        match cli.command {
            Commands::Hdr(args) => {
                assert_eq!(args.intensity, None);
                assert_eq!(args.base, BaseColor::from_rgb8(255, 128, 0));
            }
            _ => panic!("expected hdr command"),
        }

        let cli = Cli::parse_from([
            "xbm-color", "hdr", "a.xbm", "--base", "#FF8000", "--intensity", "3.5",
        ]);
        match cli.command {
            Commands::Hdr(args) => assert_eq!(args.intensity, Some(3.5)),
            _ => panic!("expected hdr command"),
        }
    }

    #[test]
    fn test_set_accepts_negative_channels() {
        let cli = Cli::parse_from([
            "xbm-color", "set", "a.xbm", "--rgba", "-1", "2.5", "0", "1",
        ]);
        match cli.command {
            Commands::Set(args) => assert_eq!(args.rgba, vec![-1.0, 2.5, 0.0, 1.0]),
            _ => panic!("expected set command"),
        }
    }
}
