use std::num::NonZeroUsize;

/// Worker count for a run over `rows` rows: the available hardware
/// parallelism, never more than one worker per row and never zero.
#[must_use]
pub fn calculate_worker_count(rows: usize) -> NonZeroUsize {
    let available = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);

    NonZeroUsize::new(available.min(rows)).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> usize {
        std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
    }

    #[test]
    fn test_single_row_gives_one_worker() {
        assert_eq!(calculate_worker_count(1).get(), 1);
    }

    #[test]
    fn test_zero_rows_still_gives_one_worker() {
        assert_eq!(calculate_worker_count(0).get(), 1);
    }

    #[test]
    fn test_workers_do_not_exceed_rows() {
        assert_eq!(calculate_worker_count(2).get(), available().min(2));
    }

    #[test]
    fn test_many_rows_use_all_available_parallelism() {
        assert_eq!(calculate_worker_count(available() * 3).get(), available());
    }
}
