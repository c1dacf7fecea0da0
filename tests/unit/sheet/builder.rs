//! Tests for single chord generation and cheat sheet rendering

#[cfg(test)]
mod tests {
    use chordsheet::ChartError;
    use chordsheet::io::configuration::Geometry;
    use chordsheet::io::diagnostics::Advisory;
    use chordsheet::io::progress::DiagramProgress;
    use chordsheet::raster::board::BoardRasterizer;
    use chordsheet::raster::label::BlankLabeler;
    use chordsheet::sheet::builder::{CheatSheet, DEFAULT_SHEET_KINDS, build_chord};
    use chordsheet::sheet::color::Color;
    use chordsheet::theory::chord::{ChordKind, ChordSpec, Tuning};
    use chordsheet::theory::pitch::PitchClass;

    fn roots(names: &[&str]) -> Vec<PitchClass> {
        names.iter().map(|name| name.parse().unwrap()).collect()
    }

    // Tests one chord is resolved, drawn and labelled
    // Verified by skipping the label band
    #[test]
    fn test_build_chord() {
        let built = build_chord("C", "", true).unwrap();
        assert_eq!(built.chord.name(), "C");
        assert_eq!(built.resolution.fingering.encode().as_deref(), Some("0003"));
        assert_eq!(built.diagram.dims(), (255, 129));
        assert!(built.diagnostics.is_empty());
    }

    // Tests the antialias flag reaches the board
    // Verified by ignoring the flag in build_chord
    #[test]
    fn test_build_chord_antialias() {
        let soft = build_chord("G", "7", true).unwrap();
        let hard = build_chord("G", "7", false).unwrap();
        assert_ne!(soft.diagram, hard.diagram);
    }

    // Tests unknown names fail before drawing
    // Verified by defaulting unknown roots to C
    #[test]
    fn test_build_chord_errors() {
        assert!(matches!(
            build_chord("H", "", true),
            Err(ChartError::UnknownNote { .. })
        ));
        assert!(matches!(
            build_chord("C", "13", true),
            Err(ChartError::UnknownChordKind { .. })
        ));
    }

    // Tests the default sheet covers twelve roots and six kinds
    // Verified by dropping the sixth chord column
    #[test]
    fn test_defaults() {
        let settings = CheatSheet::new();
        assert_eq!(settings.roots().len(), 12);
        assert_eq!(settings.kinds(), &DEFAULT_SHEET_KINDS);
        assert_eq!(settings.total_diagrams(), 72);
        assert_eq!(settings.tuning(), &Tuning::ukulele());
        assert_eq!(settings.geometry(), &Geometry::default());
    }

    // Tests diagram rows follow roots and columns follow kinds
    // Verified by collecting parallel results unordered
    #[test]
    fn test_diagram_order() {
        let settings = CheatSheet::new()
            .with_roots(roots(&["C", "G", "A"]))
            .with_kinds(vec![ChordKind::Major, ChordKind::Minor]);
        let rows = settings.diagrams(&BlankLabeler, None);
        let names: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.iter().map(|entry| entry.chord.name()).collect())
            .collect();
        assert_eq!(names, vec![vec!["C", "Cm"], vec!["G", "Gm"], vec!["A", "Am"]]);
    }

    // Tests progress counts every diagram
    // Verified by counting rows instead of diagrams
    #[test]
    fn test_progress_counts() {
        let settings = CheatSheet::new()
            .with_roots(roots(&["C", "D"]))
            .with_kinds(vec![ChordKind::Major, ChordKind::Seventh, ChordKind::Minor]);
        let progress = DiagramProgress::hidden(settings.total_diagrams());
        let _ = settings.diagrams(&BlankLabeler, Some(&progress));
        assert_eq!(progress.position(), 6);
    }

    // Tests rendering a small sheet yields the expected footprint
    // Verified by ignoring the metacolumn count in the width
    #[test]
    fn test_render_size() {
        let settings = CheatSheet::new()
            .with_roots(roots(&["C", "G"]))
            .with_kinds(vec![ChordKind::Major, ChordKind::Minor]);
        let rendered = settings.render(&BlankLabeler, None).unwrap();
        assert_eq!(rendered.sheet.width(), 540);
        assert_eq!(rendered.sheet.height(), 275);
        assert!(rendered.unresolved.is_empty());
        assert!(rendered.diagnostics.is_empty());
    }

    // Tests unresolvable chords are listed and still drawn
    // Verified by dropping diagrams that did not converge
    #[test]
    fn test_render_reports_unresolved() {
        let tuning: Tuning = "G,G,G,G".parse().unwrap();
        let settings = CheatSheet::new()
            .with_tuning(tuning)
            .with_roots(roots(&["C"]))
            .with_kinds(vec![ChordKind::Major])
            .with_metacols(1);
        let rendered = settings.render(&BlankLabeler, None).unwrap();
        assert_eq!(rendered.unresolved, vec!["C".to_string()]);
        assert!(
            rendered
                .diagnostics
                .any(|advisory| matches!(advisory, Advisory::NotConverged { .. }))
        );
    }

    // Tests row flipping changes the layout of an uneven sheet
    // Verified by ignoring the flip flag
    #[test]
    fn test_flip_changes_layout() {
        let settings = CheatSheet::new()
            .with_roots(roots(&["C", "D", "E"]))
            .with_kinds(vec![ChordKind::Major])
            .with_antialias(false);
        let flipped = settings.clone().render(&BlankLabeler, None).unwrap();
        let straight = settings.with_flip(false).render(&BlankLabeler, None).unwrap();
        assert_eq!(flipped.sheet.width(), straight.sheet.width());
        assert_ne!(flipped.sheet, straight.sheet);
    }

    // Tests colors reach the final sheet
    // Verified by composing with the default palette unconditionally
    #[test]
    fn test_render_colors() {
        let settings = CheatSheet::new()
            .with_roots(roots(&["C"]))
            .with_kinds(vec![ChordKind::Major])
            .with_metacols(1)
            .with_colors(Color::BLACK, Color::WHITE);
        let rendered = settings.render(&BlankLabeler, None).unwrap();
        assert_eq!(rendered.sheet.get(0, 0), Some([0, 0, 0]));
    }

    // Tests invalid sheet settings surface as errors
    // Verified by clamping the metacolumn count to one
    #[test]
    fn test_render_errors() {
        let settings = CheatSheet::new().with_metacols(0);
        assert!(matches!(
            settings.render(&BlankLabeler, None),
            Err(ChartError::InvalidParameter { parameter: "metacols", .. })
        ));

        let settings = CheatSheet::new().with_roots(Vec::new());
        assert!(matches!(
            settings.render(&BlankLabeler, None),
            Err(ChartError::EmptySheet)
        ));
    }

    // Tests sheets without label bands still compose
    // Verified by sizing spacers with the label band unconditionally
    #[test]
    fn test_render_without_labels() {
        let geometry = Geometry {
            label_size: 0,
            ..Geometry::default()
        };
        let settings = CheatSheet::new()
            .with_geometry(geometry)
            .with_roots(roots(&["C", "D", "E"]))
            .with_kinds(vec![ChordKind::Major]);
        let rendered = settings.render(&BlankLabeler, None).unwrap();
        assert_eq!(rendered.sheet.height(), 20 + 2 * 225);
    }

    // Tests a tuning with more strings is drawn on a matching board
    // Verified by keeping the default string count when the tuning changes
    #[test]
    fn test_five_string_tuning() {
        let tuning: Tuning = "D,G,B,E,A".parse().unwrap();
        let settings = CheatSheet::new().with_tuning(tuning);
        assert_eq!(settings.geometry().string_count, 5);

        let chord = ChordSpec::from_kind(PitchClass::new(0), ChordKind::Major);
        let built = settings.build_chord(&chord, &BlankLabeler);
        assert_eq!(built.resolution.fingering.encode().as_deref(), Some("20103"));
        assert!(built.diagnostics.is_empty(), "{:?}", built.diagnostics);

        let (width, height) = settings.geometry().board_size(true);
        assert_eq!((width, height), (153, 255));
        assert_eq!(built.diagram.dims(), (height, width));
    }

    // Tests a later geometry cannot disagree with the tuning
    // Verified by storing the geometry as given
    #[test]
    fn test_geometry_follows_tuning() {
        let tuning: Tuning = "D,G,B,E,A,D".parse().unwrap();
        let geometry = Geometry {
            string_count: 4,
            label_size: 0,
            ..Geometry::default()
        };
        let settings = CheatSheet::new().with_tuning(tuning).with_geometry(geometry);
        assert_eq!(settings.geometry().string_count, 6);
        assert_eq!(settings.geometry().label_size, 0);

        let rendered = settings
            .with_roots(roots(&["E"]))
            .with_kinds(vec![ChordKind::Minor])
            .with_metacols(1)
            .render(&BlankLabeler, None)
            .unwrap();
        assert!(
            !rendered
                .diagnostics
                .any(|advisory| matches!(advisory, Advisory::PlacementLength { .. }))
        );
    }

    // Tests identical settings give identical pixels despite parallel generation
    // Verified by letting worker threads write into a shared canvas
    #[test]
    fn test_render_is_deterministic() {
        let first = CheatSheet::new().render(&BlankLabeler, None).unwrap();
        let second = CheatSheet::new().render(&BlankLabeler, None).unwrap();
        assert_eq!(first.sheet, second.sheet);
        assert_eq!(first.diagnostics, second.diagnostics);

        let board = BoardRasterizer::new(Geometry::default());
        let (once, _) = board.draw_chord("2413", true);
        let (again, _) = board.draw_chord("2413", true);
        assert_eq!(once, again);
    }
}
