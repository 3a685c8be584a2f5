use std::ops::Range;

/// Coordinates of `v` and its direct neighbours that fall inside `[0, limit)`.
///
/// The window is contiguous and ascending, so a `Range` describes it exactly:
/// three entries in the interior, two at either edge, one when `limit == 1`.
/// It is empty only when `v > limit`.
#[inline]
pub fn window_indices(v: usize, limit: usize) -> Range<usize> {
    v.saturating_sub(1)..v.saturating_add(2).min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(v: usize, limit: usize) -> Vec<usize> {
        window_indices(v, limit).collect()
    }

    #[test]
    fn test_interior_window() {
        assert_eq!(collect(1, 4), vec![0, 1, 2]);
        assert_eq!(collect(2, 4), vec![1, 2, 3]);
    }

    #[test]
    fn test_edges_are_clipped() {
        assert_eq!(collect(0, 4), vec![0, 1]);
        assert_eq!(collect(3, 4), vec![2, 3]);
    }

    #[test]
    fn test_single_cell_axis() {
        assert_eq!(collect(0, 1), vec![0]);
    }

    #[test]
    fn test_two_cell_axis() {
        assert_eq!(collect(0, 2), vec![0, 1]);
        assert_eq!(collect(1, 2), vec![0, 1]);
    }

    #[test]
    fn test_always_contains_v() {
        for limit in 1..8 {
            for v in 0..limit {
                let window = collect(v, limit);
                assert!(window.contains(&v));
                let expected = if limit == 1 {
                    1
                } else if v == 0 || v == limit - 1 {
                    2
                } else {
                    3
                };
                assert_eq!(window.len(), expected, "v={v} limit={limit}");
                assert!(window.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_out_of_range_coordinate() {
        assert_eq!(collect(4, 4), vec![3]);
        assert!(collect(6, 4).is_empty());
        assert_eq!(collect(usize::MAX, 4), Vec::<usize>::new());
    }
}
