//! Tests for default geometry constants and derived sizes

#[cfg(test)]
mod tests {
    use chordsheet::io::configuration::{
        BOARD_PADDING, DEFAULT_JPEG_QUALITY, DEFAULT_KINDS, DEFAULT_METACOLS, DEFAULT_OUTPUT,
        DEFAULT_TUNING, FRET_COUNT, Geometry, LABEL_SIZE, MARK_SIZE, MAX_ENCODED_FRET,
        MAX_REPAIR_ITERATIONS, Padding, SEPARATOR_INTENSITY, SEPARATOR_WIDTH, SHEET_PADDING,
        STRING_COUNT, SheetGeometry,
    };

    // Tests board constants match the classic diagram proportions
    // Verified by changing the mark size
    #[test]
    fn test_board_constants() {
        assert_eq!(MARK_SIZE, 15);
        assert_eq!(LABEL_SIZE, 30);
        assert_eq!(FRET_COUNT, 7);
        assert_eq!(STRING_COUNT, 4);
        assert_eq!(BOARD_PADDING, Padding::uniform(20));
    }

    // Tests sheet and search constants
    // Verified by raising the repair cap
    #[test]
    fn test_sheet_constants() {
        assert_eq!(SHEET_PADDING, Padding::uniform(10));
        assert_eq!(SEPARATOR_WIDTH, 4);
        assert!((SEPARATOR_INTENSITY - 0.8).abs() < f64::EPSILON);
        assert_eq!(MAX_REPAIR_ITERATIONS, 10);
        assert_eq!(MAX_ENCODED_FRET, 9);
        assert_eq!(DEFAULT_METACOLS, 2);
        assert_eq!(DEFAULT_JPEG_QUALITY, 100);
    }

    // Tests command-line defaults parse as the values they stand for
    // Verified by reordering the default tuning
    #[test]
    fn test_text_defaults() {
        assert_eq!(DEFAULT_TUNING, "G,C,E,A");
        assert_eq!(DEFAULT_KINDS.split(',').count(), 6);
        assert!(DEFAULT_OUTPUT.ends_with(".jpg"));
    }

    // Tests padding sums per axis
    // Verified by swapping bottom and right in the sums
    #[test]
    fn test_padding_sums() {
        let padding = Padding {
            left: 1,
            top: 2,
            bottom: 3,
            right: 4,
        };
        assert_eq!(padding.horizontal(), 5);
        assert_eq!(padding.vertical(), 5);
        assert_eq!(Padding::uniform(7).vertical(), 14);
    }

    // Tests the default geometry is built from the constants
    // Verified by mixing up string and fret counts
    #[test]
    fn test_default_geometry() {
        let geometry = Geometry::default();
        assert_eq!(geometry.mark_size, MARK_SIZE);
        assert_eq!(geometry.fret_count, FRET_COUNT);
        assert_eq!(geometry.string_count, STRING_COUNT);
        assert_eq!(geometry.padding, BOARD_PADDING);
        assert_eq!(SheetGeometry::default().separator_width, SEPARATOR_WIDTH);
    }

    // Tests grid and board sizes follow the line and spacing counts
    // Verified by counting one fret line too many
    #[test]
    fn test_sizes() {
        let geometry = Geometry::default();
        assert_eq!(geometry.grid_size(), (74, 170));
        assert_eq!(geometry.board_size(false), (129, 225));
        assert_eq!(geometry.board_size(true), (129, 255));

        let six_strings = Geometry {
            string_count: 6,
            ..Geometry::default()
        };
        assert_eq!(six_strings.grid_size().0, 6 * 2 + 5 * 22);
    }

    // Tests degenerate geometries do not underflow
    // Verified by subtracting without saturation
    #[test]
    fn test_degenerate_sizes() {
        let geometry = Geometry {
            string_count: 0,
            fret_count: 0,
            ..Geometry::default()
        };
        assert_eq!(geometry.grid_size(), (0, 6));
    }
}
