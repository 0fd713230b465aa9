mod delta;
mod equal;
mod error;
mod options;

pub use delta::{changes, compute_delta, compute_delta_with, ChangeKind, Delta};
pub use equal::values_equal;
pub use error::{DeltaError, Side, ValueKind};
pub use options::{DeltaOptions, KeyOrder};
