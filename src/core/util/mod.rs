pub mod calculate_worker_count;
