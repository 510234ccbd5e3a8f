//! Aligns per-backend benchmark results into one comparable table.
//!
//! Each backend's result document is loaded into a [`load::RawDocument`].
//! [`align::aggregate`] then keeps, per benchmark, the datasets every backend
//! measured, orders them by the parameter that varies between datasets, and
//! computes mean runtimes and speedups over a baseline backend.

pub mod align;
pub mod backend;
pub mod ext;
pub mod format;
pub mod key;
pub mod load;
pub mod result;
pub mod stats;
pub mod variation;
