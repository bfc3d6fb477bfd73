//! The batch driver: scan, admit, expand, report.

use crate::Cli;
use anyhow::{Context, Result, bail};
use rand::Rng;
use stamp_core::{
    ColorPolicy, Filter, PositionPolicy, Settings, resolve_colors, resolve_positions,
};
use stamp_io::{Logos, admit, ensure_dir, flush_output, scan_input};
use stamp_ops::process_image;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Counters reported after a run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Images watermarked successfully.
    pub processed: usize,
    /// Output files written (variants, across all images).
    pub written: usize,
    /// Files rejected and moved to quarantine.
    pub invalid: usize,
}

/// Runs one batch over the input directory.
///
/// A failed image never aborts the batch: rejections are counted and
/// quarantined, per-image render failures are logged and skipped.
pub fn run<R: Rng>(cli: &Cli, rng: &mut R) -> Result<Summary> {
    let settings = settings_from(cli)?;
    let color_policy = ColorPolicy::parse(&cli.color)?;
    let position_policy = PositionPolicy::parse(&cli.position)?;

    let logos = Logos::load(&cli.logos)
        .with_context(|| format!("failed to load logo assets from '{}'", cli.logos.display()))?;

    if !cli.input.is_dir() {
        ensure_dir(&cli.input)?;
        bail!(
            "input directory '{}' not found; it has been created, put images there and rerun",
            cli.input.display()
        );
    }
    ensure_dir(&cli.output)?;
    let invalid_dir = invalid_dir_for(&cli.input);
    ensure_dir(&invalid_dir)?;

    if cli.flush {
        let deleted = flush_output(&cli.output)?;
        info!("flushed {deleted} file(s) from '{}'", cli.output.display());
    }

    let paths = scan_input(&cli.input)?;
    let total = paths.len();
    let mut summary = Summary::default();

    for (index, path) in paths.iter().enumerate() {
        let image = match admit(path, &invalid_dir, !cli.no_rotate) {
            Ok(image) => image,
            Err(err) if err.is_rejection() => {
                summary.invalid += 1;
                continue;
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                continue;
            }
        };

        let corners = resolve_positions(position_policy, rng);
        let colors = resolve_colors(color_policy, rng);

        print!(
            "\rProcessing image {} of {total} | Colors: {} | Variations: {} | Invalid: {}",
            index + 1,
            colors.len(),
            corners.len(),
            summary.invalid
        );
        let _ = std::io::stdout().flush();

        match process_image(&image, &logos, &corners, &colors, &settings) {
            Ok(files) => {
                summary.processed += 1;
                summary.written += files.len();
            }
            Err(err) => warn!("failed to watermark {}: {err}", path.display()),
        }
    }
    if total > 0 {
        println!();
    }

    info!(
        "batch done: {} processed, {} file(s) written, {} invalid",
        summary.processed, summary.written, summary.invalid
    );
    Ok(summary)
}

/// Quarantine directory, kept next to the input directory.
fn invalid_dir_for(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("invalid")
}

fn settings_from(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings {
        wm_size_ratio: cli.watermark_size,
        padding_ratio: cli.watermark_padding,
        circle_ratio: cli.watermark_ratio,
        ss_factor: cli.supersampling,
        draw_circle: !cli.no_circle,
        filter: Filter::parse(&cli.filter)?,
        output_dir: cli.output.clone(),
        format: cli.format.clone(),
        prefix: if cli.no_prefix {
            String::new()
        } else {
            Settings::default().prefix
        },
        ..Settings::default()
    };
    if cli.center_circle {
        settings = settings.with_centered_circle();
    }
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn write_logos(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        RgbaImage::from_pixel(40, 25, Rgba([200, 30, 30, 255]))
            .save(dir.join(stamp_io::LOGO_COLOR_FILE))
            .unwrap();
        RgbaImage::from_pixel(40, 25, Rgba([255, 255, 255, 255]))
            .save(dir.join(stamp_io::LOGO_WHITE_FILE))
            .unwrap();
    }

    fn cli_for(root: &Path, extra: &[&str]) -> Cli {
        let input = root.join("input");
        let output = root.join("output");
        let logos = root.join("logos");
        let mut args = vec![
            "stamp".to_string(),
            "-i".into(),
            input.display().to_string(),
            "-o".into(),
            output.display().to_string(),
            "--logos".into(),
            logos.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::parse_from(args)
    }

    fn seed_input(root: &Path) {
        let input = root.join("input");
        fs::create_dir_all(&input).unwrap();
        RgbaImage::from_pixel(320, 240, Rgba([90, 90, 90, 255]))
            .save(input.join("a.png"))
            .unwrap();
        RgbaImage::from_pixel(240, 320, Rgba([120, 90, 60, 255]))
            .save(input.join("b.png"))
            .unwrap();
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write_logos(&dir.path().join("logos"));
        seed_input(dir.path());
        fs::write(dir.path().join("input/notes.txt"), b"not an image").unwrap();

        let cli = cli_for(dir.path(), &["-c", "magenta", "-p", "all"]);
        let mut rng = StdRng::seed_from_u64(7);
        let summary = run(&cli, &mut rng).unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.written, 8);
        assert!(dir.path().join("output/wm_a_bottom_right.png").exists());
        assert!(dir.path().join("output/wm_b_top_left.png").exists());
        assert!(dir.path().join("invalid/notes.txt").exists());
        assert!(!dir.path().join("input/notes.txt").exists());
    }

    #[test]
    fn test_run_flush_removes_stale_outputs() {
        let dir = tempfile::tempdir().unwrap();
        write_logos(&dir.path().join("logos"));
        seed_input(dir.path());
        let output = dir.path().join("output");
        fs::create_dir_all(&output).unwrap();
        RgbaImage::new(4, 4).save(output.join("wm_stale.png")).unwrap();

        let cli = cli_for(dir.path(), &["-f", "-c", "white", "-p", "bottom_right"]);
        let mut rng = StdRng::seed_from_u64(1);
        let summary = run(&cli, &mut rng).unwrap();

        assert!(!output.join("wm_stale.png").exists());
        assert_eq!(summary.written, 2);
    }

    #[test]
    fn test_run_no_prefix_and_format() {
        let dir = tempfile::tempdir().unwrap();
        write_logos(&dir.path().join("logos"));
        seed_input(dir.path());

        let cli = cli_for(
            dir.path(),
            &["--no-prefix", "--format", "jpg", "-c", "cyan", "-p", "top_right"],
        );
        let mut rng = StdRng::seed_from_u64(1);
        run(&cli, &mut rng).unwrap();

        assert!(dir.path().join("output/a_top_right.jpg").exists());
    }

    #[test]
    fn test_run_missing_input_creates_dir_and_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_logos(&dir.path().join("logos"));

        let cli = cli_for(dir.path(), &[]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = run(&cli, &mut rng).unwrap_err();

        assert!(err.to_string().contains("not found"));
        assert!(dir.path().join("input").is_dir());
    }

    #[test]
    fn test_run_missing_logos_fails() {
        let dir = tempfile::tempdir().unwrap();
        seed_input(dir.path());

        let cli = cli_for(dir.path(), &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(run(&cli, &mut rng).is_err());
    }

    #[test]
    fn test_settings_rejects_bad_filter() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), &["--filter", "gaussian"]);
        assert!(settings_from(&cli).is_err());
    }
}
