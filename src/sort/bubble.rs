use super::SwapCounter;

/// Bubble sort with a shrinking unsorted region and early exit
///
/// After `turn` passes the last `turn` elements are in their final position,
/// so each pass stops one element earlier. A pass without exchanges means the
/// buffer is sorted.
pub(super) fn sort_in_place(buf: &mut [i64], counter: &mut SwapCounter) {
    let n = buf.len();

    for turn in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - 1 - turn {
            if buf[j] > buf[j + 1] {
                counter.swap(buf, j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i64]) -> (Vec<i64>, u64) {
        let mut buf = values.to_vec();
        let mut counter = SwapCounter::default();
        sort_in_place(&mut buf, &mut counter);
        (buf, counter.total())
    }

    #[test]
    fn test_swaps_equal_inversions() {
        // Each adjacent exchange removes exactly one inversion
        let (sorted, swaps) = run(&[5, 3, 6, 2, 3, 1, 7]);
        assert_eq!(sorted, vec![1, 2, 3, 3, 5, 6, 7]);
        assert_eq!(swaps, 11);
    }

    #[test]
    fn test_equal_elements_never_swap() {
        let (sorted, swaps) = run(&[4, 4, 4, 4]);
        assert_eq!(sorted, vec![4, 4, 4, 4]);
        assert_eq!(swaps, 0);
    }

    #[test]
    fn test_single_out_of_place() {
        let (sorted, swaps) = run(&[2, 3, 4, 5, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(swaps, 4);
    }
}
