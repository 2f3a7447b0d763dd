/// Application id as assigned by the ledger.
pub type AppId = u64;

/// Position of an app in a transaction's foreign app array, shifted by one.
///
/// `0` is the calling app itself, `k` is `foreign_apps[k - 1]`.
pub type ForeignIndex = u64;

/// Wire tag for [`ForeignIndex`].
pub const INDEX_TAG: &str = "i";

/// Wire tag for the box name.
pub const NAME_TAG: &str = "n";
