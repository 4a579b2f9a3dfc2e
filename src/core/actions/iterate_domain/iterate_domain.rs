use std::num::NonZeroUsize;
use std::sync::OnceLock;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::iterate_domain::errors::IterateDomainError;
use crate::core::actions::iterate_domain::ports::domain::{Domain, DomainAccessError};
use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frac_result::FracResult;
use crate::core::data::results::Results;
use crate::core::util::calculate_worker_count::calculate_worker_count;

/// Validates the domain shape, then configures the algorithm for the run.
/// Returns `(rows, cols)`.
pub(super) fn prepare_run<D, Alg>(
    domain: &D,
    algorithm: &mut Alg,
    max_iterations: i64,
) -> Result<(usize, usize), IterateDomainError>
where
    D: Domain + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
{
    let (rows, cols) = domain.dimensions();
    if rows < 1 || cols < 1 {
        return Err(IterateDomainError::DomainShape { rows, cols });
    }

    algorithm.set_max_iterations(max_iterations)?;

    Ok((rows, cols))
}

pub(super) fn evaluate_row<D, Alg>(
    domain: &D,
    algorithm: &Alg,
    row: usize,
    cells: &mut [FracResult],
) -> Result<(), DomainAccessError>
where
    D: Domain + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
{
    for (col, cell) in cells.iter_mut().enumerate() {
        let point = domain.at(col, row)?;
        *cell = algorithm.evaluate(point);
    }

    Ok(())
}

/// Applies `algorithm` to every sample of `domain` on a worker pool sized to
/// the available hardware parallelism.
///
/// For an explicit worker count or cancel-aware runs, use
/// [`iterate_domain_cancelable`].
pub fn iterate_domain<D, Alg>(
    domain: &D,
    algorithm: &mut Alg,
    max_iterations: i64,
) -> Result<Results, IterateDomainError>
where
    D: Domain + Sync + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
{
    let (rows, _) = domain.dimensions();
    iterate_domain_cancelable(
        domain,
        algorithm,
        max_iterations,
        calculate_worker_count(rows),
        &NeverCancel,
    )
}

/// Applies `algorithm` to every sample of `domain` using `workers` threads.
///
/// Shape and configuration errors are returned before any worker starts.
/// Whole rows are the unit of work, and each row is written into its own
/// disjoint slice of the result store. Workers check for cancellation before
/// each row: the caller's `cancel` token and an internal flag raised by the
/// first domain access fault. On a fault, sibling workers stop at their next
/// row and that first fault is returned once every worker has finished.
///
/// Returns [`IterateDomainError::Cancelled`] if `cancel` fired first.
#[instrument(level = "debug", skip(domain, algorithm, cancel))]
pub fn iterate_domain_cancelable<D, Alg, C>(
    domain: &D,
    algorithm: &mut Alg,
    max_iterations: i64,
    workers: NonZeroUsize,
    cancel: &C,
) -> Result<Results, IterateDomainError>
where
    D: Domain + Sync + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
{
    let (rows, cols) = prepare_run(domain, algorithm, max_iterations)?;
    let algorithm: &Alg = algorithm;
    let mut results = Results::new(rows, cols, algorithm.config().max_iterations());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|index| format!("frac-worker-{index}"))
        .build()?;

    info!(rows, cols, workers = workers.get(), max_iterations, "iterating domain");
    let start = Instant::now();

    let abort = CancelFlag::new();
    let first_fault: OnceLock<DomainAccessError> = OnceLock::new();
    let row_slices = results.par_rows_mut()?;

    pool.install(|| {
        row_slices.for_each(|(row, cells)| {
            if abort.is_cancelled() {
                return;
            }
            if cancel.is_cancelled() {
                abort.cancel();
                return;
            }

            if let Err(fault) = evaluate_row(domain, algorithm, row, cells) {
                warn!(row, %fault, "domain access fault, cancelling remaining rows");
                let _ = first_fault.set(fault);
                abort.cancel();
            }
        });
    });

    if let Some(fault) = first_fault.into_inner() {
        return Err(IterateDomainError::DomainAccess(fault));
    }
    if abort.is_cancelled() {
        debug!("domain iteration cancelled");
        return Err(IterateDomainError::Cancelled(Cancelled));
    }

    results.done();
    info!(elapsed = ?start.elapsed(), "domain iterated");

    Ok(results)
}
