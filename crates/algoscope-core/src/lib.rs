//! Algoscope Core Types and Definitions
//!
//! This crate provides the value types shared by every algoscope engine. It
//! includes:
//!
//! - **Grid**: The square cell grid searched by the pathfinding engine ([`grid`] module)
//! - **Trace**: Records emitted by the engines, such as sort frames, search
//!   probes and traversal results ([`trace`] module)
//! - **Cancellation**: A cooperative stop flag shared with step-wise engines
//!   ([`cancel::CancelToken`])

pub mod cancel;
pub mod grid;
pub mod trace;
