//! Tests for command-line parsing and sheet orchestration

#[cfg(test)]
mod tests {
    use chordsheet::ChartError;
    use chordsheet::io::cli::{Cli, SheetProcessor};
    use chordsheet::theory::chord::{ChordKind, Tuning};
    use clap::Parser;
    use log::LevelFilter;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chordsheet").chain(args.iter().copied())).unwrap()
    }

    // Tests defaults describe the standard ukulele sheet
    // Verified by changing the default kinds
    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.tuning, Tuning::ukulele());
        assert_eq!(cli.root_list().unwrap().len(), 12);
        assert_eq!(
            cli.kind_list().unwrap(),
            vec![
                ChordKind::Major,
                ChordKind::Seventh,
                ChordKind::MajorSeventh,
                ChordKind::Minor,
                ChordKind::MinorSeventh,
                ChordKind::Sixth,
            ]
        );
        assert_eq!(cli.metacols, 2);
        assert_eq!(cli.quality, 100);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    // Tests verbosity and quiet map to log levels
    // Verified by ignoring the quiet flag
    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(), LevelFilter::Debug);
        let quiet = parse(&["--quiet", "-v"]);
        assert_eq!(quiet.log_level(), LevelFilter::Error);
        assert!(!quiet.should_show_progress());
    }

    // Tests tuning, roots and kinds are parsed from text
    // Verified by splitting roots on whitespace
    #[test]
    fn test_custom_lists() {
        let cli = parse(&["--tuning", "D,G,B,E", "--roots", "C,F#", "--kinds", "m,dim7"]);
        assert_eq!(cli.tuning.to_string(), "D,G,B,E");
        let roots: Vec<u8> = cli.root_list().unwrap().iter().map(|p| p.value()).collect();
        assert_eq!(roots, vec![0, 6]);
        assert_eq!(
            cli.kind_list().unwrap(),
            vec![ChordKind::Minor, ChordKind::DiminishedSeventh]
        );
    }

    // Tests invalid tunings are rejected by the parser
    // Verified by accepting unknown notes as C
    #[test]
    fn test_invalid_tuning() {
        let result = Cli::try_parse_from(["chordsheet", "--tuning", "G,H"]);
        assert!(result.is_err());
    }

    // Tests invalid roots and kinds surface when building settings
    // Verified by skipping unknown entries
    #[test]
    fn test_invalid_lists() {
        let cli = parse(&["--roots", "C,X"]);
        assert!(matches!(cli.cheat_sheet(), Err(ChartError::UnknownNote { .. })));
        let cli = parse(&["--kinds", "7,sus2"]);
        assert!(matches!(
            cli.cheat_sheet(),
            Err(ChartError::UnknownChordKind { .. })
        ));
    }

    // Tests colors accept both component scales
    // Verified by rejecting byte-scale components
    #[test]
    fn test_colors() {
        let cli = parse(&["--background", "0,0,0", "--foreground", "255,255,255"]);
        let background = cli.background.unwrap();
        let foreground = cli.foreground.unwrap();
        assert_eq!(background.components(), [0.0, 0.0, 0.0]);
        assert_eq!(foreground.components(), [1.0, 1.0, 1.0]);
        assert!(Cli::try_parse_from(["chordsheet", "--background", "1,1"]).is_err());
    }

    // Tests flags turn into sheet settings
    // Verified by passing the flip flag through uninverted
    #[test]
    fn test_cheat_sheet_settings() {
        let cli = parse(&["--roots", "G", "--kinds", ",m", "--metacols", "1"]);
        let settings = cli.cheat_sheet().unwrap();
        assert_eq!(settings.total_diagrams(), 2);
        assert_eq!(settings.kinds(), &[ChordKind::Major, ChordKind::Minor]);
    }

    // Tests the processor writes the requested file
    // Verified by skipping the save step
    #[test]
    fn test_process_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sheets").join("g.png");
        let output_arg = output.to_string_lossy().to_string();
        let cli = parse(&[
            "--roots",
            "G",
            "--kinds",
            ",7",
            "--metacols",
            "1",
            "--no-antialias",
            "--quiet",
            "--output",
            &output_arg,
        ]);
        SheetProcessor::new(cli).process().unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!(written.width(), 20 + 2 * 129);
        assert_eq!(written.height(), 20 + 255);
    }

    // Tests processing fails on settings that cannot compose
    // Verified by clamping zero metacolumns
    #[test]
    fn test_process_rejects_zero_metacols() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("never.jpg");
        let output_arg = output.to_string_lossy().to_string();
        let cli = parse(&["--roots", "C", "--metacols", "0", "--quiet", "--output", &output_arg]);
        assert!(SheetProcessor::new(cli).process().is_err());
        assert!(!output.exists());
    }
}
