//! Type aliases for commonly used complex types.
//!
//! The editor runs on a single UI thread, so shared state is `Rc<RefCell<T>>`
//! and host callbacks are plain boxed `FnMut` closures.
//!
//! ```rust,ignore
//! use odontokit_core::types::*;
//!
//! let log: Shared<Vec<String>> = shared(Vec::new());
//! let sink = log.clone();
//! let callback: DataCallback<String> = Box::new(move |msg| sink.borrow_mut().push(msg));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A host callback receiving one value per invocation.
pub type DataCallback<T> = Box<dyn FnMut(T)>;

/// Wraps a value in a [`Shared`] cell.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
