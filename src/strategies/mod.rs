//! Search-strategy implementations for the traversal contract.
//!
//! Each module provides one conforming type for
//! [`DfsStrategy`](crate::traits::DfsStrategy). Only the local-alignment
//! strategy exists today; further strategies (e.g. exact seed enumeration)
//! slot in as additional conforming types.

pub mod local;
