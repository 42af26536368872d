//! Dynamically typed arguments example
//!
//! Work functions receive positional arguments of mixed types and read them
//! back with checked downcasts. A wrong type comes back as a job error.
//!
//! Run with: cargo run --example dynamic_args

use rust_job_pool::{args, prelude::*};

fn repeat(a: &Args) -> std::result::Result<DynValue, BoxError> {
    let text: &String = a.get(0)?;
    let times: &usize = a.get(1)?;
    Ok(Box::new(text.repeat(*times)))
}

fn main() -> Result<()> {
    println!("=== Rust Job Pool - Dynamic Arguments Example ===\n");

    let pool = DynPool::new(2)?;
    pool.set_id_generator(id::random_numeric(1_000_000));

    pool.add(repeat, args!["ab".to_string(), 3usize])?;
    pool.add(repeat, args!["xyz".to_string(), 2usize])?;
    // Second argument has the wrong type
    pool.add(repeat, args!["oops".to_string(), "twice"])?;
    // Second argument is missing
    pool.add(repeat, args!["short".to_string()])?;

    for job in pool.results() {
        let id = job.id().unwrap_or("-").to_string();
        let bound = job.args().len();
        match job.into_result() {
            Ok(value) => match value.downcast_ref::<String>() {
                Some(text) => println!("Job {} ({} args): {}", id, bound, text),
                None => println!("Job {} ({} args): unexpected value type", id, bound),
            },
            Err(e) => println!("Job {} ({} args): error: {}", id, bound, e),
        }
    }

    pool.shutdown()?;
    println!("\n=== Example completed successfully ===");
    Ok(())
}
