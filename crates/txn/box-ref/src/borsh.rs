use borsh::{BorshDeserialize, BorshSerialize};

use crate::reference::BoxReference;
use crate::types::ForeignIndex;

// Dense layout for storing resolved refs locally.  Not the signed wire form.

impl BorshSerialize for BoxReference {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.app_index().serialize(writer)?;
        self.name().serialize(writer)
    }
}

impl BorshDeserialize for BoxReference {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let app_index = ForeignIndex::deserialize_reader(reader)?;
        let name = Vec::<u8>::deserialize_reader(reader)?;
        Ok(BoxReference::new(app_index, name))
    }
}
