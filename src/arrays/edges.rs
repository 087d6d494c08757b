//! Bin edges from bin centres.
//!
//! Interior edges are midpoints between neighbouring centres; the two outer
//! edges extrapolate the first and last spacing by half a step. `N` centres
//! give `N + 1` edges along the chosen axis, every other axis is untouched.

use ndarray::{ArrayD, ArrayView1, ArrayViewD, ArrayViewMut1, Axis, IxDyn, Zip, s};

use crate::core::error::{FigError, Result};

/// Resolve a possibly negative axis against `ndim`.
fn resolve_axis(axis: isize, ndim: usize) -> Result<usize> {
    let resolved = if axis < 0 {
        isize::try_from(ndim).ok().map(|n| n + axis)
    } else {
        Some(axis)
    };
    resolved
        .and_then(|a| usize::try_from(a).ok())
        .filter(|&a| a < ndim)
        .ok_or(FigError::AxisOutOfBounds { axis, ndim })
}

/// Compare the first two entries along `last`, at index 0 of every other axis.
fn is_descending(view: &ArrayViewD<'_, f64>, last: usize) -> bool {
    let mut idx = vec![0; view.ndim()];
    let first = view[idx.as_slice()];
    idx[last] = 1;
    view[idx.as_slice()] < first
}

fn fill_edges(mut edges: ArrayViewMut1<'_, f64>, centres: ArrayView1<'_, f64>) {
    let n = centres.len();
    edges[0] = centres[0] - (centres[1] - centres[0]) / 2.0;
    for (edge, pair) in edges
        .slice_mut(s![1..n])
        .iter_mut()
        .zip(centres.windows(2))
    {
        *edge = (pair[0] + pair[1]) / 2.0;
    }
    edges[n] = centres[n - 1] + (centres[n - 1] - centres[n - 2]) / 2.0;
}

/// Estimate edges along `axis` (negative counts from the end, `-1` is last).
///
/// Descending sequences are handled by reversing, estimating, and reversing
/// back. Fails with [`FigError::InsufficientData`] when the axis holds fewer
/// than two values. An empty array along any other axis yields an empty
/// result with the chosen axis one longer.
pub fn edges(values: ArrayViewD<'_, f64>, axis: isize) -> Result<ArrayD<f64>> {
    if values.ndim() == 0 {
        return Err(FigError::InsufficientData { axis: 0, len: 0 });
    }
    let ax = resolve_axis(axis, values.ndim())?;
    let last = values.ndim() - 1;

    let mut work = values;
    work.swap_axes(ax, last);

    let n = work.len_of(Axis(last));
    if n < 2 {
        return Err(FigError::InsufficientData { axis: ax, len: n });
    }

    // other axes may be empty; the result is then empty too
    let flip = !work.is_empty() && is_descending(&work, last);
    if flip {
        work.invert_axis(Axis(last));
    }

    let mut shape = work.shape().to_vec();
    shape[last] = n + 1;
    let mut out = ArrayD::<f64>::zeros(IxDyn(&shape));
    Zip::from(out.lanes_mut(Axis(last)))
        .and(work.lanes(Axis(last)))
        .for_each(fill_edges);

    if flip {
        out.invert_axis(Axis(last));
    }
    out.swap_axes(ax, last);
    Ok(out.as_standard_layout().into_owned())
}

/// [`edges`] for a plain slice.
pub fn edges_1d(values: &[f64]) -> Result<Vec<f64>> {
    let out = edges(ArrayView1::from(values).into_dyn(), -1)?;
    Ok(out.iter().copied().collect())
}
