pub mod probability;
pub mod rms;
pub mod sets;

pub use rms::{nan_rms, rms, rms_scalar, rms_slice, scalar, SquaredMagnitude};
pub use sets::{combine_sets, SetMoments};
