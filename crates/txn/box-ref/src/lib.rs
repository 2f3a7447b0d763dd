//! Box references for application call transactions.
//!
//! An app call names the boxes it will touch as `(app id, name)` pairs.  The
//! app id is not sent as is: it is translated into a position in the
//! transaction's foreign app array (with `0` meaning the called app) by
//! [`ResolveConfig`], and the result is encoded as a sparse, canonically
//! ordered map by [`to_wire_map`].
//!
//! ```rust
//! use algo_box_ref::{BoxReference, ResolveConfig, from_wire_map, to_wire_map};
//!
//! let foreign_apps = [10, 20, 30];
//! let config = ResolveConfig::new(&foreign_apps, 99);
//!
//! let refs = config.resolve_all([(20, "alpha"), (99, "beta")]).unwrap();
//! assert_eq!(refs[0], BoxReference::new(2, b"alpha".to_vec()));
//! assert!(refs[1].is_self_ref());
//!
//! // The self reference has no index on the wire.
//! let fields = from_wire_map(&to_wire_map(&refs[1])).unwrap();
//! assert_eq!(fields.index, None);
//! assert_eq!(fields.into_reference(), refs[1]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for [`BoxReference`] using the wire map layout
//! - `borsh`: dense Borsh encoding for [`BoxReference`]
//! - `arbitrary`: `Arbitrary` for [`BoxReference`]
//!
//! Tests for each format are gated on its feature as well, so run the suite
//! with `cargo test --all-features` to cover them.

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
mod bytes;
mod error;
mod reference;
mod resolve;
#[cfg(feature = "serde")]
mod serde;
mod types;
mod wire;

pub use bytes::ToBytes;
pub use error::{BoxRefError, BoxRefResult};
pub use reference::BoxReference;
pub use resolve::{ResolveConfig, resolve, resolve_all};
pub use types::{AppId, ForeignIndex, INDEX_TAG, NAME_TAG};
pub use wire::{WireFields, WireMap, WireValue, from_wire_map, to_wire_map};

// Only used by some test configurations.
#[cfg(test)]
use {bincode as _, proptest as _, serde_json as _};
