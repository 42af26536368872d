//! Drive a slow service through the pool
//!
//! Sends a batch of requests to an in-process mock service where every third
//! request is delayed. Results are printed as they complete, so fast requests
//! overtake slow ones.
//!
//! Run with: RUST_LOG=debug cargo run --example latency_driver -- [requests] [workers]

use rand::Rng;
use rust_job_pool::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Mock service: every third request sleeps a random while
struct MockService {
    counter: AtomicU64,
}

impl MockService {
    fn handle(&self, path: &str) -> std::result::Result<String, BoxError> {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("Received request {}: {}", seq, path);

        let delay = if seq % 3 == 0 {
            Duration::from_millis(rand::thread_rng().gen_range(0..150))
        } else {
            Duration::from_nanos(1)
        };
        thread::sleep(delay);

        if path.ends_with("/13") {
            return Err(format!("request {} to {} rejected", seq, path).into());
        }
        Ok(format!("mock OK {} {:?}", path, delay))
    }
}

fn arg_or(index: usize, default: usize) -> usize {
    std::env::args()
        .nth(index)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let requests = arg_or(1, 30);
    let workers = arg_or(2, 5);

    let service = Arc::new(MockService {
        counter: AtomicU64::new(0),
    });
    let config = PoolConfig::new(workers)
        .with_name("latency-driver")
        .with_thread_name_prefix("driver")
        .with_id_generator(id::sequential_with_prefix("req"));
    let pool: Pool<String, String> = Pool::with_config(config)?;

    log::info!("Sending {} requests to pool", requests);
    let started = Instant::now();
    for i in 1..=requests {
        let service = Arc::clone(&service);
        pool.add(move |path: &String| service.handle(path), format!("/{}", i))?;
    }

    log::info!("Reading results from pool");
    for _ in 0..requests {
        let job = pool.result()?;
        let id = job.id().unwrap_or("-").to_string();
        let elapsed = job.elapsed().unwrap_or_default();
        match job.error() {
            Some(e) => log::warn!("{} failed after {:?}: {}", id, elapsed, e),
            None => log::info!("{} -> {}", id, job.result().map_or("", String::as_str)),
        }
        log::debug!("Pool stats: {:?}", pool.stats());
    }

    let stats = pool.stats();
    log::info!(
        "Done in {:?}: {} completed, {} failed",
        started.elapsed(),
        stats.completed,
        stats.failed
    );

    pool.shutdown()
}
