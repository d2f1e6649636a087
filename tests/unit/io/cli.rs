//! Tests for CLI parsing, option mapping, and output path naming

#[cfg(test)]
mod tests {
    use clap::Parser;
    use quadmosaic::algorithm::executor::Mode;
    use quadmosaic::io::cli::{Cli, ModeArg, get_output_path, get_visualization_path};
    use std::path::Path;

    // Tests the defaults line up with the configuration module
    #[test]
    fn test_defaults() {
        let cli = match Cli::try_parse_from(["quadmosaic", "input.png"]) {
            Ok(cli) => cli,
            Err(error) => unreachable!("parse failed: {error}"),
        };

        assert_eq!(cli.mode, ModeArg::Plain);
        assert!((cli.size_ratio - 0.2).abs() < 1e-9);
        assert_eq!(cli.max_limit_count, 1000);
        assert_eq!(cli.minimum_split_width, 2);
        assert_eq!(cli.downsample, 4);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.visualize);
    }

    // Tests every engine-facing flag reaches the render options
    #[test]
    fn test_render_options_mapping() {
        let cli = match Cli::try_parse_from([
            "quadmosaic",
            "input.png",
            "--mode",
            "with-border",
            "--size-ratio",
            "1.25",
            "--max-limit-count",
            "10",
            "--minimum-split-width",
            "3",
            "--line-luminance-scale",
            "0.5",
            "--luminance-scale",
            "1.1",
            "--monochrome",
            "--swap-stroke",
            "--randomness",
            "--seed",
            "9",
        ]) {
            Ok(cli) => cli,
            Err(error) => unreachable!("parse failed: {error}"),
        };

        let options = cli.render_options();
        assert_eq!(options.mode, Mode::PlainWithBorder);
        assert!((options.size_ratio - 1.25).abs() < 1e-9);
        assert_eq!(options.max_limit_count, 10);
        assert_eq!(options.minimum_split_width, 3);
        assert!((options.line_luminance_scale - 0.5).abs() < 1e-9);
        assert!((options.luminance_scale - 1.1).abs() < 1e-9);
        assert!(options.monochrome);
        assert!(options.swap_stroke);
        assert!(options.randomness);
        assert_eq!(options.seed, 9);
        assert!(options.validate().is_ok());
    }

    // Tests quiet and no-skip invert their accessors
    #[test]
    fn test_quiet_and_no_skip_flags() {
        let cli = match Cli::try_parse_from(["quadmosaic", "in.png", "--quiet", "--no-skip"]) {
            Ok(cli) => cli,
            Err(error) => unreachable!("parse failed: {error}"),
        };

        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests the output name keeps the directory and adds the suffix
    #[test]
    fn test_output_path_naming() {
        let output = get_output_path(Path::new("photos/cat.png"));
        assert_eq!(output, Path::new("photos/cat_mosaic.png"));

        let bare = get_output_path(Path::new("cat.png"));
        assert_eq!(bare, Path::new("cat_mosaic.png"));
    }

    // Tests the visualization path swaps the extension for gif
    #[test]
    fn test_visualization_path_naming() {
        let viz = get_visualization_path(Path::new("photos/cat.png"));
        assert_eq!(viz, Path::new("photos/cat_visualization.gif"));
    }

    // Tests a missing target is a parse error
    #[test]
    fn test_target_is_required() {
        assert!(Cli::try_parse_from(["quadmosaic"]).is_err());
    }
}
