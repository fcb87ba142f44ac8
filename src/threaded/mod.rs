//! Multi-threaded multiplication.
//!
//! Output rows are split across threads. A cell is always computed by a
//! single thread, so the per-cell summation order and the result are the
//! same as the single-threaded kernel. Thread count adapts to matrix
//! size - small matrices use fewer threads to avoid overhead.

pub mod naive_ikj_mt;
