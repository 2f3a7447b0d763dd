//! Sparse key-value form of a box reference.
//!
//! This is the intermediate structure handed to the transaction's outer
//! codec.  Zero indexes and empty names are left out entirely and keys are
//! kept in lexicographic order, so the same reference always encodes to the
//! same bytes.  Signatures are computed over that encoding.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::error::{BoxRefError, BoxRefResult};
use crate::reference::BoxReference;
use crate::types::{ForeignIndex, INDEX_TAG, NAME_TAG};

/// Value stored under a wire tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireValue {
    /// Unsigned integer.
    Uint(u64),

    /// Raw bytes.
    Bytes(Vec<u8>),
}

/// Canonically ordered wire map.
pub type WireMap = BTreeMap<&'static str, WireValue>;

/// Fields read back from a wire map.
///
/// No foreign app validation happens when decoding, an index here still has
/// to be matched against the foreign app array it was resolved with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireFields {
    /// Foreign index, if the tag was present.
    pub index: Option<ForeignIndex>,

    /// Box name, if the tag was present.
    pub name: Option<Vec<u8>>,
}

impl WireFields {
    /// Builds a reference, filling absent fields with the values that were
    /// omitted when encoding.
    pub fn into_reference(self) -> BoxReference {
        BoxReference::new(self.index.unwrap_or(0), self.name.unwrap_or_default())
    }
}

impl From<&BoxReference> for WireFields {
    fn from(r: &BoxReference) -> Self {
        Self {
            index: (r.app_index() != 0).then_some(r.app_index()),
            name: (!r.name().is_empty()).then(|| r.name().to_vec()),
        }
    }
}

/// Encodes a reference into its sparse wire map.
pub fn to_wire_map(r: &BoxReference) -> WireMap {
    let mut map = WireMap::new();
    if r.app_index() != 0 {
        map.insert(INDEX_TAG, WireValue::Uint(r.app_index()));
    }
    if !r.name().is_empty() {
        map.insert(NAME_TAG, WireValue::Bytes(r.name().to_vec()));
    }
    map
}

/// Reads the fields out of a wire map.
///
/// Missing tags decode to `None`.  Unknown keys are ignored.  Works on
/// [`WireMap`] as well as maps with owned keys, as produced by decoding.
pub fn from_wire_map<K>(map: &BTreeMap<K, WireValue>) -> BoxRefResult<WireFields>
where
    K: Borrow<str> + Ord,
{
    let index = match map.get(INDEX_TAG) {
        None => None,
        Some(WireValue::Uint(i)) => Some(*i),
        Some(_) => return Err(BoxRefError::WireTypeMismatch(INDEX_TAG)),
    };

    let name = match map.get(NAME_TAG) {
        None => None,
        Some(WireValue::Bytes(n)) => Some(n.clone()),
        Some(_) => return Err(BoxRefError::WireTypeMismatch(NAME_TAG)),
    };

    Ok(WireFields { index, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ref() {
        let r = BoxReference::new(2, b"alpha".to_vec());
        let map = to_wire_map(&r);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![INDEX_TAG, NAME_TAG]);
        assert_eq!(map[INDEX_TAG], WireValue::Uint(2));
        assert_eq!(map[NAME_TAG], WireValue::Bytes(b"alpha".to_vec()));
    }

    #[test]
    fn test_self_ref_omits_index() {
        let map = to_wire_map(&BoxReference::self_ref(b"beta".to_vec()));
        assert!(!map.contains_key(INDEX_TAG));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_name_omitted() {
        let map = to_wire_map(&BoxReference::new(1, Vec::new()));
        assert!(!map.contains_key(NAME_TAG));
        assert_eq!(map.len(), 1);

        assert!(to_wire_map(&BoxReference::default()).is_empty());
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let mut map = WireMap::new();
        map.insert(NAME_TAG, WireValue::Bytes(b"n".to_vec()));
        map.insert(INDEX_TAG, WireValue::Uint(1));
        assert_eq!(map, to_wire_map(&BoxReference::new(1, b"n".to_vec())));
        assert_eq!(map.keys().next(), Some(&INDEX_TAG));
    }

    #[test]
    fn test_decode_missing_tags() {
        let fields = from_wire_map(&WireMap::new()).expect("test: decode empty");
        assert_eq!(fields, WireFields::default());
        assert_eq!(fields.into_reference(), BoxReference::default());
    }

    #[test]
    fn test_decode_zero_and_empty_to_none() {
        let r = BoxReference::default();
        let fields = from_wire_map(&to_wire_map(&r)).unwrap();
        assert_eq!(fields.index, None);
        assert_eq!(fields.name, None);
        assert_eq!(fields, WireFields::from(&r));
    }

    #[test]
    fn test_decode_ignores_unknown() {
        let mut map = to_wire_map(&BoxReference::new(3, b"x".to_vec()));
        map.insert("z", WireValue::Uint(7));
        let fields = from_wire_map(&map).unwrap();
        assert_eq!(fields.into_reference(), BoxReference::new(3, b"x".to_vec()));
    }

    #[test]
    fn test_decode_type_mismatch() {
        let mut map = WireMap::new();
        map.insert(INDEX_TAG, WireValue::Bytes(vec![1]));
        assert_eq!(from_wire_map(&map), Err(BoxRefError::WireTypeMismatch(INDEX_TAG)));

        let mut map = WireMap::new();
        map.insert(NAME_TAG, WireValue::Uint(1));
        assert_eq!(from_wire_map(&map), Err(BoxRefError::WireTypeMismatch(NAME_TAG)));
    }

    #[test]
    fn test_decode_owned_keys() {
        let mut map: BTreeMap<String, WireValue> = BTreeMap::new();
        map.insert("n".to_owned(), WireValue::Bytes(b"owned".to_vec()));
        map.insert("i".to_owned(), WireValue::Uint(5));
        map.insert("x".to_owned(), WireValue::Uint(1));

        let fields = from_wire_map(&map).expect("test: decode owned keys");
        assert_eq!(fields.into_reference(), BoxReference::new(5, b"owned".to_vec()));

        let mut map: BTreeMap<String, WireValue> = BTreeMap::new();
        map.insert("i".to_owned(), WireValue::Bytes(Vec::new()));
        assert_eq!(from_wire_map(&map), Err(BoxRefError::WireTypeMismatch(INDEX_TAG)));
    }

    #[test]
    fn test_stored_zero_index_kept() {
        // A non-canonical map with an explicit zero still decodes the raw value.
        let mut map = WireMap::new();
        map.insert(INDEX_TAG, WireValue::Uint(0));
        assert_eq!(from_wire_map(&map).unwrap().index, Some(0));
    }
}
