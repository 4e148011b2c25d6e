// THEORY:
// The `runs` module finds the stretches of a scanline a sort is allowed to
// touch. Given the per-pixel sortability flags it emits every maximal run of
// consecutive sortable pixels as a half-open index range. Runs never span an
// unsortable pixel, so sorting one run can never move a pixel past a pixel
// that was supposed to stay put.
//
// The scan is a two-state machine (no run open / run open) walking the flags
// once, left to right. O(N) time, and the output only grows when a run
// actually closes.

pub mod runs {
    use std::ops::Range;

    /// Finds every maximal run of consecutive `true` flags as a half-open
    /// range. A sortable final flag closes its run at the scanline boundary.
    pub fn find_runs(sortable: &[bool]) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut open: Option<usize> = None;

        for (index, &flag) in sortable.iter().enumerate() {
            match (flag, open) {
                (true, None) => open = Some(index),
                (false, Some(start)) => {
                    ranges.push(start..index);
                    open = None;
                }
                _ => {}
            }
        }

        if let Some(start) = open {
            ranges.push(start..sortable.len());
        }

        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::runs::*;

    #[test]
    fn splits_on_unsortable_pixels() {
        let flags = [true, true, false, true, true, true, false, false, true];
        assert_eq!(find_runs(&flags), vec![0..2, 3..6, 8..9]);
    }

    #[test]
    fn fully_sortable_scanline_is_one_run() {
        assert_eq!(find_runs(&[true; 5]), vec![0..5]);
    }

    #[test]
    fn no_sortable_pixels_means_no_runs() {
        assert!(find_runs(&[false; 5]).is_empty());
        assert!(find_runs(&[]).is_empty());
    }

    #[test]
    fn single_trailing_pixel_still_closes_a_run() {
        assert_eq!(find_runs(&[false, true]), vec![1..2]);
        assert_eq!(find_runs(&[true]), vec![0..1]);
    }
}
