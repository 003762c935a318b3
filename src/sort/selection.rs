use super::SwapCounter;

/// Selection sort; exchanges only when the suffix minimum is out of place
pub(super) fn sort_in_place(buf: &mut [i64], counter: &mut SwapCounter) {
    let n = buf.len();

    for i in 0..n.saturating_sub(1) {
        let min_index = find_min_index(buf, i);

        if min_index != i {
            counter.swap(buf, i, min_index);
        }
    }
}

/// Index of the smallest element in `buf[start..]`, lowest index on ties
fn find_min_index(buf: &[i64], start: usize) -> usize {
    let mut min_index = start;

    for j in start + 1..buf.len() {
        if buf[j] < buf[min_index] {
            min_index = j;
        }
    }

    min_index
}
