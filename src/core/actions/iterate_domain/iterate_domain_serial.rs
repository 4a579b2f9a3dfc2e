use crate::core::actions::iterate_domain::errors::IterateDomainError;
use crate::core::actions::iterate_domain::iterate_domain::prepare_run;
use crate::core::actions::iterate_domain::ports::domain::Domain;
use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::results::Results;

/// Single-threaded counterpart of
/// [`iterate_domain`](crate::core::actions::iterate_domain::iterate_domain::iterate_domain),
/// visiting samples in row-major order.
pub fn iterate_domain_serial<D, Alg>(
    domain: &D,
    algorithm: &mut Alg,
    max_iterations: i64,
) -> Result<Results, IterateDomainError>
where
    D: Domain + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
{
    let (rows, cols) = prepare_run(domain, algorithm, max_iterations)?;
    let mut results = Results::new(rows, cols, algorithm.config().max_iterations());

    for row in 0..rows {
        for col in 0..cols {
            let point = domain.at(col, row)?;
            results.set_result(row, col, algorithm.evaluate(point))?;
        }
    }

    results.done();
    Ok(results)
}
