//! Matching utilities for gesture tracking.

use ndarray::Array2;

use crate::tracker::rect::Point;

/// Compute the Euclidean distance matrix between track head centers and
/// pose centers. Shape is (tracks, poses).
pub fn center_distance(track_centers: &[Point], pose_centers: &[Point]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_centers.len(), pose_centers.len()));
    for (i, t) in track_centers.iter().enumerate() {
        for (j, p) in pose_centers.iter().enumerate() {
            dists[[i, j]] = t.distance(p);
        }
    }
    dists
}

/// One (track, pose) pair under the distance threshold.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    track: usize,
    pose: usize,
    distance: f32,
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_poses: Vec<usize>,
}

/// Greedy nearest-center assignment.
///
/// Retains every pair with distance strictly below `thresh`, sorts them
/// ascending by distance, then walks the list once, accepting a pair iff
/// neither its track nor its pose has been claimed. A greedy approximation
/// of minimum-weight bipartite matching; deterministic, and cheap at the
/// cardinalities a frame produces.
///
/// Ties keep encounter order: tracks iterated outer, poses inner, and the
/// sort is stable.
pub fn greedy_assignment(dists: &Array2<f32>, thresh: f32) -> AssignmentResult {
    let (num_tracks, num_poses) = dists.dim();

    let mut candidates = Vec::new();
    for track in 0..num_tracks {
        for pose in 0..num_poses {
            let distance = dists[[track, pose]];
            if distance < thresh {
                candidates.push(Candidate {
                    track,
                    pose,
                    distance,
                });
            }
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    // Claim sets live only for this call.
    let mut claimed_tracks = vec![false; num_tracks];
    let mut claimed_poses = vec![false; num_poses];
    let mut matches = Vec::new();

    for c in candidates {
        if claimed_tracks[c.track] || claimed_poses[c.pose] {
            continue;
        }
        claimed_tracks[c.track] = true;
        claimed_poses[c.pose] = true;
        matches.push((c.track, c.pose));
    }

    let unmatched_tracks = claimed_tracks
        .iter()
        .enumerate()
        .filter_map(|(i, &claimed)| if claimed { None } else { Some(i) })
        .collect();
    let unmatched_poses = claimed_poses
        .iter()
        .enumerate()
        .filter_map(|(j, &claimed)| if claimed { None } else { Some(j) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_poses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_distance_matrix() {
        let tracks = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let poses = vec![Point::new(3.0, 4.0)];
        let dists = center_distance(&tracks, &poses);
        assert_eq!(dists.dim(), (2, 1));
        assert!((dists[[0, 0]] - 5.0).abs() < 1e-6);
        assert!((dists[[1, 0]] - (49.0f32 + 16.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_nearest_pair_wins() {
        // Track 0 is close to pose 1, track 1 is close to pose 0.
        let tracks = vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)];
        let poses = vec![Point::new(48.0, 0.0), Point::new(1.0, 0.0)];
        let dists = center_distance(&tracks, &poses);

        let result = greedy_assignment(&dists, 100.0);
        assert_eq!(result.matches, vec![(0, 1), (1, 0)]);
        assert!(result.unmatched_tracks.is_empty());
        assert!(result.unmatched_poses.is_empty());
    }

    #[test]
    fn test_each_side_claimed_at_most_once() {
        // Two tracks chasing the same pose: only the nearer one gets it.
        let tracks = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        let poses = vec![Point::new(4.0, 0.0)];
        let dists = center_distance(&tracks, &poses);

        let result = greedy_assignment(&dists, 100.0);
        assert_eq!(result.matches, vec![(1, 0)]);
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert!(result.unmatched_poses.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let tracks = vec![Point::new(0.0, 0.0)];
        let poses = vec![Point::new(100.0, 0.0)];
        let dists = center_distance(&tracks, &poses);

        let result = greedy_assignment(&dists, 100.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_poses, vec![0]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        // Both poses are equidistant from both tracks; the stable sort must
        // preserve (0, 0) ahead of (0, 1) and (1, 0).
        let tracks = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let poses = vec![Point::new(5.0, 0.0), Point::new(5.0, 0.0)];
        let dists = center_distance(&tracks, &poses);

        let result = greedy_assignment(&dists, 100.0);
        assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty = center_distance(&[], &[Point::new(1.0, 1.0)]);
        let result = greedy_assignment(&empty, 100.0);
        assert!(result.matches.is_empty());
        assert!(result.unmatched_tracks.is_empty());
        assert_eq!(result.unmatched_poses, vec![0]);

        let empty = center_distance(&[Point::new(1.0, 1.0)], &[]);
        let result = greedy_assignment(&empty, 100.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert!(result.unmatched_poses.is_empty());
    }
}
