//! Output formatting for embedding vectors.

/// Render a vector as comma-separated decimal components: no brackets, no
/// quotes, no whitespace, no trailing delimiter.
pub fn csv_line(vector: &[f32]) -> String {
    vector
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_basic() {
        assert_eq!(csv_line(&[0.5, -1.25, 3.0]), "0.5,-1.25,3");
    }

    #[test]
    fn test_csv_line_single_component_has_no_delimiter() {
        assert_eq!(csv_line(&[0.125]), "0.125");
    }

    #[test]
    fn test_csv_line_empty_vector() {
        assert_eq!(csv_line(&[]), "");
    }

    #[test]
    fn test_csv_line_field_count_matches_dimension() {
        let v = vec![0.1f32; 384];
        let line = csv_line(&v);
        assert_eq!(line.split(',').count(), 384);
    }

    #[test]
    fn test_csv_line_round_trips_through_parse() {
        let v = vec![0.25f32, -0.75, 1.5, 0.0];
        let parsed: Vec<f32> = csv_line(&v)
            .split(',')
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(parsed, v);
    }

    #[test]
    fn test_csv_line_has_no_brackets_or_spaces() {
        let line = csv_line(&[1.0, 2.0, 3.5]);
        assert!(!line.contains(['[', ']', '"', ' ']));
    }
}
