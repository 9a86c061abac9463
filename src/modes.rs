// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Canonical ordering of spherical-harmonic (ell, m) modes.
//!
//! A waveform's data matrix covers the full rectangular range
//! [ell_min, ell_max]: all m for ell_min first, ascending, then ell_min + 1,
//! and so on. Readers and consumers must agree on this linearization.

/// The number of (ell, m) pairs in the rectangular range `[ell_min, ell_max]`
/// with m in `[-ell, ell]`.
pub fn lm_total_size(ell_min: i32, ell_max: i32) -> usize {
    debug_assert!(0 <= ell_min && ell_min <= ell_max);
    ((ell_max + 1) * (ell_max + 1) - ell_min * ell_min) as usize
}

/// The column index of mode (ell, m) in a matrix whose first column is
/// (ell_min, -ell_min).
pub fn lm_index(ell: i32, m: i32, ell_min: i32) -> usize {
    debug_assert!(ell >= ell_min && m.abs() <= ell);
    (ell * (ell + 1) - ell_min * ell_min + m) as usize
}

/// All (ell, m) of the rectangular range, in canonical order.
pub fn modes_in_range(ell_min: i32, ell_max: i32) -> impl Iterator<Item = (i32, i32)> {
    (ell_min..=ell_max).flat_map(|ell| (-ell..=ell).map(move |m| (ell, m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_size_counts_the_rectangular_range() {
        assert_eq!(lm_total_size(2, 2), 5);
        assert_eq!(lm_total_size(0, 2), 9);
        assert_eq!(lm_total_size(2, 4), 21);
    }

    #[test]
    fn index_matches_the_canonical_iteration_order() {
        for &(ell_min, ell_max) in &[(0, 3), (2, 2), (2, 5)] {
            let order: Vec<_> = modes_in_range(ell_min, ell_max).collect();
            assert_eq!(order.len(), lm_total_size(ell_min, ell_max));
            for (i, &(ell, m)) in order.iter().enumerate() {
                assert_eq!(lm_index(ell, m, ell_min), i);
            }
        }
    }

    #[test]
    fn index_of_known_modes() {
        assert_eq!(lm_index(2, -2, 2), 0);
        assert_eq!(lm_index(2, 0, 2), 2);
        assert_eq!(lm_index(2, 2, 2), 4);
        assert_eq!(lm_index(3, -3, 2), 5);
    }
}
