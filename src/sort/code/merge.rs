//! Top-down merge sort.

/// Stable merge sort using one auxiliary buffer of the input length.
pub fn merge_sort(a: &mut [i32]) {
    if a.len() < 2 {
        return;
    }
    let mut buffer = a.to_vec();
    sort_into(&mut buffer, a);
}

/// Sort `src` into `dst`. Both slices hold the same values on entry.
///
/// The halves are sorted with the roles swapped, so no copy back is needed.
fn sort_into(src: &mut [i32], dst: &mut [i32]) {
    let len = dst.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;

    {
        let (src_lo, src_hi) = src.split_at_mut(mid);
        let (dst_lo, dst_hi) = dst.split_at_mut(mid);
        sort_into(dst_lo, src_lo);
        sort_into(dst_hi, src_hi);
    }

    merge(&src[..mid], &src[mid..], dst);
}

fn merge(left: &[i32], right: &[i32], out: &mut [i32]) {
    let (mut i, mut j) = (0, 0);

    for slot in out.iter_mut() {
        // `<=` keeps equal elements in their original order
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
