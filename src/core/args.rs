//! Heterogeneous argument lists for dynamically typed jobs
//!
//! Most pools bind a concrete argument type (`Pool<String, _, _>`,
//! `Pool<(u32, u32), _, _>`). When one pool has to run unrelated kinds of work,
//! [`Args`] holds an ordered list of arbitrary values instead. Reading an argument
//! with the wrong type or position is an ordinary [`ArgError`], which the work can
//! propagate with `?` so it ends up as that job's error.
//!
//! ```rust
//! use rust_job_pool::{args, Args, BoxError};
//!
//! fn area(args: &Args) -> Result<u64, BoxError> {
//!     let w: &u64 = args.get(0)?;
//!     let h: &u64 = args.get(1)?;
//!     Ok(w * h)
//! }
//!
//! assert_eq!(area(&args![3u64, 4u64]).unwrap(), 12);
//! assert!(area(&args![3u64]).is_err());
//! assert!(area(&args![3u64, "four"]).is_err());
//! ```

use crate::core::error::ArgError;
use std::any::{type_name, Any};
use std::fmt;

/// Ordered, type-erased argument list
#[derive(Default)]
pub struct Args {
    values: Vec<Box<dyn Any + Send>>,
}

impl Args {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument
    pub fn push<V: Any + Send>(&mut self, value: V) {
        self.values.push(Box::new(value));
    }

    /// Append an argument, builder style
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with<V: Any + Send>(mut self, value: V) -> Self {
        self.push(value);
        self
    }

    /// Borrow the argument at `index` as a `V`
    ///
    /// # Errors
    ///
    /// [`ArgError::Missing`] when fewer arguments are bound,
    /// [`ArgError::TypeMismatch`] when the value is not a `V`.
    pub fn get<V: Any>(&self, index: usize) -> Result<&V, ArgError> {
        let value = self.values.get(index).ok_or(ArgError::Missing {
            index,
            len: self.values.len(),
        })?;
        value.downcast_ref::<V>().ok_or(ArgError::TypeMismatch {
            index,
            expected: type_name::<V>(),
        })
    }

    /// Whether the argument at `index` exists and is a `V`
    pub fn is<V: Any>(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|v| v.is::<V>())
    }

    /// Number of bound arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.values.len()).finish()
    }
}

/// Build an [`Args`] list from a sequence of values
#[macro_export]
macro_rules! args {
    () => {
        $crate::core::Args::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::core::Args::new();
        $(args.push($value);)+
        args
    }};
}
