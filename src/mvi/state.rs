//! Base trait for slice state.

use serde::Serialize;

/// Marker trait for state slices.
///
/// States should be:
/// - Cloneable (snapshots are handed to readers)
/// - Comparable (no-op transitions must be observable as equality)
/// - Defaultable (the default is the fixed initial value of the slice)
/// - Serializable (snapshots are printed and compared as JSON)
pub trait SliceState: Clone + PartialEq + Default + Serialize + Send + Sync + 'static {}
