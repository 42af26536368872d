//! Basic job pool usage example
//!
//! Demonstrates pool creation, job submission, result retrieval and statistics.
//!
//! Run with: cargo run --example basic_usage

use rust_job_pool::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Job Pool - Basic Usage Example ===\n");

    let pool: Pool<u64, u64, String> = Pool::new(4)?;
    pool.set_id_generator(id::sequential_with_prefix("square"));

    println!("1. Started pool with {} workers", pool.num_workers());

    println!("\n2. Submitting jobs:");
    for n in 0..10 {
        pool.add(
            |n: &u64| {
                thread::sleep(Duration::from_millis(10 * (n % 3)));
                if *n == 7 {
                    return Err("seven is unlucky".to_string());
                }
                Ok(n * n)
            },
            n,
        )?;
    }
    println!("   Submitted 10 jobs");

    println!("\n3. Results in completion order:");
    for job in pool.results() {
        let id = job.id().unwrap_or("-").to_string();
        let worker = job.worker_id().unwrap_or_default();
        match job.into_result() {
            Ok(square) => println!("   {} (worker {}): {}", id, worker, square),
            Err(e) => println!("   {} (worker {}): error: {}", id, worker, e),
        }
    }

    println!("\n4. Pool statistics:");
    let stats = pool.stats();
    println!("   Submitted: {}", stats.submitted);
    println!("   Completed: {}", stats.completed);
    println!("   Failed:    {}", stats.failed);
    println!("   As JSON:   {}", stats.to_json().map_err(|e| PoolError::other(e.to_string()))?);

    println!("\n5. Per-worker statistics:");
    for (i, worker) in pool.worker_stats().iter().enumerate() {
        println!(
            "   Worker {}: {} jobs, {} failed, avg {:.1}us",
            i,
            worker.get_jobs_processed(),
            worker.get_jobs_failed(),
            worker.get_average_processing_time_us()
        );
    }

    println!("\n6. Shutting down");
    pool.shutdown()?;
    println!("   Running: {}", pool.is_running());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
