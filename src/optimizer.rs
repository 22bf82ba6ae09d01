//! Implementations of decomposition based optimizers.

pub mod moead;
