use nalgebra::{DMatrix, DVector};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum LinalgError {
    #[error("dimension mismatch: matrix has {rows} rows but right-hand side has {rhs} entries")]
    DimensionMismatch { rows: usize, rhs: usize },

    #[error("singular value decomposition did not converge")]
    SvdDidNotConverge,
}

/// Solves `A x = b` in the least-squares sense with rank truncation.
///
/// The system is factored as `A = U diag(S) Vᵗ` (economy SVD) and every
/// singular direction whose singular value is not strictly greater than
/// `max(S) * cutoff` is discarded before back-substitution. With `cutoff = 0`
/// and full rank retained this is the minimum-Euclidean-norm least-squares
/// solution; with truncation it is the minimum-norm solution restricted to
/// the retained right-singular subspace, which trades exactness for stability
/// on ill-conditioned or rank-deficient systems.
///
/// A zero matrix (or a `cutoff >= 1`) retains no direction at all and yields
/// the zero vector of length `a.ncols()`. Non-finite entries in `a` or `b`
/// are not screened; they propagate into the result or surface as a
/// convergence failure of the factorization.
///
/// # Errors
///
/// - [`LinalgError::DimensionMismatch`] if `b` does not have one entry per
///   row of `a`.
/// - [`LinalgError::SvdDidNotConverge`] if the underlying factorization
///   fails; this is propagated unchanged, with no retry.
#[instrument(level = "trace", skip_all, fields(rows = a.nrows(), cols = a.ncols(), cutoff))]
pub fn safe_solve(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    cutoff: f64,
) -> Result<DVector<f64>, LinalgError> {
    if b.nrows() != a.nrows() {
        return Err(LinalgError::DimensionMismatch {
            rows: a.nrows(),
            rhs: b.nrows(),
        });
    }

    let svd = a
        .clone()
        .try_svd(true, true, f64::EPSILON, 0)
        .ok_or(LinalgError::SvdDidNotConverge)?;
    let u = svd.u.ok_or(LinalgError::SvdDidNotConverge)?;
    let v_t = svd.v_t.ok_or(LinalgError::SvdDidNotConverge)?;
    let singular = svd.singular_values;

    let s_max = singular.iter().fold(0.0_f64, |acc, &s| acc.max(s));

    // Strict comparison: an exact-zero singular value never survives, even at
    // cutoff 0. `try_svd` sorts descending, so the survivors are a prefix.
    let rank = singular.iter().take_while(|&&s| s > s_max * cutoff).count();

    if rank == 0 {
        return Ok(DVector::zeros(a.ncols()));
    }
    tracing::debug!(
        rank,
        smallest_retained = singular[rank - 1],
        "truncated singular spectrum"
    );

    let y = u.columns(0, rank).tr_mul(b);
    let z = y.component_div(&singular.rows(0, rank));
    Ok(v_t.rows(0, rank).tr_mul(&z))
}
