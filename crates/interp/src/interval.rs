/// Returns `i` such that `xs[i] <= x < xs[i + 1]`, clamped to
/// `[0, xs.len() - 2]` so queries outside the nodes use the nearest
/// boundary interval.
///
/// Expects at least two strictly increasing nodes.
pub(crate) fn find_interval(xs: &[f64], x: f64) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }

    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}
