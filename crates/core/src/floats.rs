//! Small helpers over `f64` slices.

/// Returns the dot product of `a` and `b`.
///
/// Extra elements in the longer slice are ignored.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Returns the Euclidean norm of `v`.
///
/// Entries are divided by the largest magnitude before squaring, as BLAS
/// `dnrm2` does, so the result only overflows when the norm itself does.
/// Returns NaN if any entry is NaN.
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    if v.iter().any(|vi| vi.is_nan()) {
        return f64::NAN;
    }
    let scale = v.iter().fold(0.0_f64, |m, vi| m.max(vi.abs()));
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }
    let sum: f64 = v.iter().map(|vi| (vi / scale).powi(2)).sum();
    scale * sum.sqrt()
}

/// Returns the Euclidean norm of `v` divided by `sqrt(v.len())`.
///
/// This is the root-mean-square magnitude, so a single tolerance means the
/// same thing regardless of dimension. Returns NaN for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scaled_norm(v: &[f64]) -> f64 {
    if v.is_empty() {
        return f64::NAN;
    }
    norm(v) / (v.len() as f64).sqrt()
}

/// Computes `dst = x + alpha * direction`.
pub fn add_scaled_to(dst: &mut [f64], x: &[f64], alpha: f64, direction: &[f64]) {
    for ((d, xi), di) in dst.iter_mut().zip(x).zip(direction) {
        *d = xi + alpha * di;
    }
}
