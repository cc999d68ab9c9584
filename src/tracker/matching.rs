//! Matching utilities for associating detections with existing tracks.

use std::cmp::Ordering;

use ndarray::Array2;

use crate::tracker::rect::Centroid;

/// Compute the pairwise Euclidean distance matrix between track positions
/// (rows) and detection centroids (columns).
pub fn distance_matrix(track_positions: &[Centroid], detections: &[Centroid]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_positions.len(), detections.len()));
    for (i, t) in track_positions.iter().enumerate() {
        for (j, d) in detections.iter().enumerate() {
            dists[[i, j]] = nalgebra::distance(t, d);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy gated nearest-neighbor assignment over a distance matrix.
///
/// Rows are visited in ascending order of their minimum distance; each row
/// claims its closest column, provided the column is still free and the
/// distance is within `max_distance`. A row whose closest column is taken or
/// gated out stays unmatched for this frame — it never falls back to a
/// second-best column.
///
/// Tie-break policy: rows with equal minima are visited in ascending row
/// order (the sort is stable); within a row the lowest column index attaining
/// the minimum wins.
pub fn greedy_assignment(cost_matrix: &Array2<f32>, max_distance: f32) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    // Per-row best candidate: minimum distance and the first column attaining it.
    let mut row_best: Vec<(f32, usize)> = Vec::with_capacity(num_rows);
    for row in 0..num_rows {
        let mut best = cost_matrix[[row, 0]];
        let mut best_col = 0;
        for col in 1..num_cols {
            let d = cost_matrix[[row, col]];
            if d < best {
                best = d;
                best_col = col;
            }
        }
        row_best.push((best, best_col));
    }

    let mut order: Vec<usize> = (0..num_rows).collect();
    order.sort_by(|&a, &b| {
        row_best[a]
            .0
            .partial_cmp(&row_best[b].0)
            .unwrap_or(Ordering::Equal)
    });

    let mut matches = Vec::new();
    let mut row_matched = vec![false; num_rows];
    let mut col_matched = vec![false; num_cols];

    for &row in &order {
        let (dist, col) = row_best[row];
        if col_matched[col] || dist > max_distance {
            continue;
        }
        matches.push((row, col));
        row_matched[row] = true;
        col_matched[col] = true;
    }

    let unmatched_tracks: Vec<usize> = row_matched
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| if m { None } else { Some(i) })
        .collect();
    let unmatched_detections: Vec<usize> = col_matched
        .iter()
        .enumerate()
        .filter_map(|(j, &m)| if m { None } else { Some(j) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn test_distance_matrix_values() {
        let tracks = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        let dets = vec![Point2::new(3.0, 4.0)];

        let d = distance_matrix(&tracks, &dets);
        assert_eq!(d.dim(), (2, 1));
        assert!((d[[0, 0]] - 5.0).abs() < 1e-6);
        assert!((d[[1, 0]] - (49.0f32 + 16.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_tracks() {
        let d = Array2::<f32>::zeros((0, 3));
        let result = greedy_assignment(&d, 80.0);
        assert!(result.matches.is_empty());
        assert!(result.unmatched_tracks.is_empty());
        assert_eq!(result.unmatched_detections, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_detections() {
        let d = Array2::<f32>::zeros((2, 0));
        let result = greedy_assignment(&d, 80.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0, 1]);
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_one_to_one_assignment() {
        let tracks = vec![Point2::new(0.0, 0.0), Point2::new(100.0, 100.0)];
        let dets = vec![Point2::new(98.0, 101.0), Point2::new(2.0, 1.0)];

        let d = distance_matrix(&tracks, &dets);
        let result = greedy_assignment(&d, 80.0);

        let mut matches = result.matches.clone();
        matches.sort();
        assert_eq!(matches, vec![(0, 1), (1, 0)]);
        assert!(result.unmatched_tracks.is_empty());
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_gate_blocks_distant_pair() {
        let tracks = vec![Point2::new(0.0, 0.0)];
        let dets = vec![Point2::new(100.0, 0.0)];

        let d = distance_matrix(&tracks, &dets);
        let result = greedy_assignment(&d, 80.0);

        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_detections, vec![0]);
    }

    #[test]
    fn test_distance_exactly_at_gate_matches() {
        let tracks = vec![Point2::new(0.0, 0.0)];
        let dets = vec![Point2::new(80.0, 0.0)];

        let d = distance_matrix(&tracks, &dets);
        let result = greedy_assignment(&d, 80.0);
        assert_eq!(result.matches, vec![(0, 0)]);
    }

    #[test]
    fn test_no_second_best_fallback() {
        // Both rows prefer column 0; row 0 is closer and wins it. Row 1 must
        // not fall back to column 1 even though it is within the gate.
        let mut d = Array2::<f32>::zeros((2, 2));
        d[[0, 0]] = 1.0;
        d[[0, 1]] = 50.0;
        d[[1, 0]] = 2.0;
        d[[1, 1]] = 60.0;

        let result = greedy_assignment(&d, 80.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
        assert_eq!(result.unmatched_detections, vec![1]);
    }

    #[test]
    fn test_equal_row_minima_resolve_in_row_order() {
        // Both rows have minimum 5.0 but at different columns; the stable
        // sort visits row 0 first.
        let mut d = Array2::<f32>::zeros((2, 2));
        d[[0, 0]] = 5.0;
        d[[0, 1]] = 7.0;
        d[[1, 0]] = 6.0;
        d[[1, 1]] = 5.0;

        let result = greedy_assignment(&d, 80.0);
        assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_column_tie_takes_lowest_index() {
        let mut d = Array2::<f32>::zeros((1, 2));
        d[[0, 0]] = 5.0;
        d[[0, 1]] = 5.0;

        let result = greedy_assignment(&d, 80.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_detections, vec![1]);
    }

    #[test]
    fn test_all_ties_leave_second_row_unmatched() {
        // Every entry is equal: row 0 claims column 0, and row 1's argmin is
        // that same consumed column, so row 1 stays unmatched.
        let d = Array2::<f32>::from_elem((2, 2), 5.0);

        let result = greedy_assignment(&d, 80.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
        assert_eq!(result.unmatched_detections, vec![1]);
    }
}
