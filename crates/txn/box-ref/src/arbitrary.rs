use arbitrary::{Arbitrary, Unstructured};

use crate::reference::BoxReference;
use crate::types::ForeignIndex;

/// Largest foreign app array a transaction may carry.
const MAX_FOREIGN_APPS: ForeignIndex = 8;

/// Longest box name the ledger accepts.
const MAX_NAME_LEN: usize = 64;

impl<'a> Arbitrary<'a> for BoxReference {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Keep refs within what a real transaction could produce.
        let app_index = u.int_in_range(0..=MAX_FOREIGN_APPS)?;
        let len = u.int_in_range(0..=MAX_NAME_LEN)?;
        let name = u.bytes(len)?.to_vec();
        Ok(BoxReference::new(app_index, name))
    }
}
