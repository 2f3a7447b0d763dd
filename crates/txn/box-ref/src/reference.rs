use std::any::Any;

use crate::types::ForeignIndex;

/// A box reference whose owning app has been translated into a foreign app
/// index.
///
/// The index and name are always present. An index of `0` refers to the
/// calling app and an empty name is a valid (if unusual) box name; these are
/// only dropped when encoding to the wire, see [`crate::to_wire_map`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxReference {
    /// Index into the foreign app array, with `0` reserved for the calling app.
    app_index: ForeignIndex,

    /// Name of the box.
    name: Vec<u8>,
}

impl BoxReference {
    /// Constructs a new instance from an already resolved index.
    pub fn new(app_index: ForeignIndex, name: Vec<u8>) -> Self {
        Self { app_index, name }
    }

    /// Constructs a reference to a box owned by the calling app.
    pub fn self_ref(name: Vec<u8>) -> Self {
        Self::new(0, name)
    }

    /// Gets the foreign app index.
    pub fn app_index(&self) -> ForeignIndex {
        self.app_index
    }

    /// Gets the box name.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Returns if this refers to a box of the calling app.
    pub fn is_self_ref(&self) -> bool {
        self.app_index == 0
    }

    /// Splits into the index and name.
    pub fn into_parts(self) -> (ForeignIndex, Vec<u8>) {
        (self.app_index, self.name)
    }

    /// Compares against an arbitrary value.  Anything that isn't a
    /// `BoxReference` is never equal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<BoxReference>()
            .is_some_and(|other| self == other)
    }
}

impl From<(ForeignIndex, Vec<u8>)> for BoxReference {
    fn from((app_index, name): (ForeignIndex, Vec<u8>)) -> Self {
        Self::new(app_index, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_by_fields() {
        let a = BoxReference::new(1, b"box".to_vec());
        assert_eq!(a, BoxReference::new(1, b"box".to_vec()));
        assert_ne!(a, BoxReference::new(2, b"box".to_vec()));
        assert_ne!(a, BoxReference::new(1, b"bot".to_vec()));
    }

    #[test]
    fn test_eq_any_other_type() {
        let r = BoxReference::new(0, Vec::new());
        assert!(!r.eq_any(&42u64));
        assert!(!r.eq_any(&(0u64, Vec::<u8>::new())));
        assert!(r.eq_any(&BoxReference::default()));
    }

    #[test]
    fn test_self_ref() {
        let r = BoxReference::self_ref(b"mine".to_vec());
        assert!(r.is_self_ref());
        assert_eq!(r.app_index(), 0);
        assert_eq!(r.name(), b"mine");
        assert!(!BoxReference::new(3, Vec::new()).is_self_ref());
    }

    #[test]
    fn test_parts_roundtrip() {
        let r = BoxReference::from((4, b"x".to_vec()));
        assert_eq!(r.clone().into_parts(), (4, b"x".to_vec()));
        assert_eq!(BoxReference::from(r.clone().into_parts()), r);
    }
}
