//! Translation of raw `(app id, name)` box references into foreign app
//! indexes.
//!
//! A transaction can only touch boxes of apps it declares.  On the wire the
//! owning app is given as a position in the transaction's foreign app array,
//! shifted by one:
//!
//! ```text
//! 0        the called app itself (or an app being created)
//! k >= 1   foreign_apps[k - 1]
//! ```

use tracing::*;

use crate::bytes::ToBytes;
use crate::error::{BoxRefError, BoxRefResult};
use crate::reference::BoxReference;
use crate::types::{AppId, ForeignIndex};

/// Transaction context needed to resolve box references.
#[derive(Clone, Copy, Debug)]
pub struct ResolveConfig<'a> {
    /// Foreign app array of the transaction, not including its own app.
    foreign_apps: &'a [AppId],

    /// Id of the called app, `0` if the app is being created.
    this_app_id: AppId,
}

impl<'a> ResolveConfig<'a> {
    /// Constructs a new instance.
    pub fn new(foreign_apps: &'a [AppId], this_app_id: AppId) -> Self {
        Self {
            foreign_apps,
            this_app_id,
        }
    }

    /// Gets the foreign app array.
    pub fn foreign_apps(&self) -> &'a [AppId] {
        self.foreign_apps
    }

    /// Gets the called app id.
    pub fn this_app_id(&self) -> AppId {
        self.this_app_id
    }

    /// Translates an app id into its foreign index.
    ///
    /// The foreign array is searched first, so an app that lists itself as
    /// foreign gets that position.  The leftmost match wins.
    pub fn resolve_index(&self, app_id: AppId) -> BoxRefResult<ForeignIndex> {
        if let Some(pos) = self.foreign_apps.iter().position(|id| *id == app_id) {
            return Ok(pos as ForeignIndex + 1);
        }

        if app_id == 0 || app_id == self.this_app_id {
            return Ok(0);
        }

        debug!(
            %app_id,
            this_app_id = %self.this_app_id,
            foreign_apps = self.foreign_apps.len(),
            "rejecting box ref to undeclared app"
        );
        Err(BoxRefError::InvalidForeignApp(app_id))
    }

    /// Resolves a single box reference.
    pub fn resolve(&self, app_id: AppId, name: impl ToBytes) -> BoxRefResult<BoxReference> {
        let app_index = self.resolve_index(app_id)?;
        Ok(BoxReference::new(app_index, name.to_bytes()))
    }

    /// Resolves a single box reference given as an `(app id, name)` pair.
    pub fn resolve_pair<N: ToBytes>(&self, raw: &(AppId, N)) -> BoxRefResult<BoxReference> {
        self.resolve(raw.0, &raw.1)
    }

    /// Resolves a batch of box references, preserving order.
    ///
    /// Stops at the first reference that can't be resolved and returns its
    /// error, discarding anything resolved before it.
    pub fn resolve_all<I, N>(&self, refs: I) -> BoxRefResult<Vec<BoxReference>>
    where
        I: IntoIterator<Item = (AppId, N)>,
        N: ToBytes,
    {
        let refs = refs.into_iter();
        trace!(hint = refs.size_hint().0, "resolving box refs");
        refs.map(|(app_id, name)| self.resolve(app_id, name)).collect()
    }
}

/// Resolves a single box reference against a transaction's foreign apps.
///
/// See [`ResolveConfig::resolve`].
pub fn resolve(
    app_id: AppId,
    name: impl ToBytes,
    foreign_apps: &[AppId],
    this_app_id: AppId,
) -> BoxRefResult<BoxReference> {
    ResolveConfig::new(foreign_apps, this_app_id).resolve(app_id, name)
}

/// Resolves a batch of box references against a transaction's foreign apps.
///
/// See [`ResolveConfig::resolve_all`].
pub fn resolve_all<I, N>(
    refs: I,
    foreign_apps: &[AppId],
    this_app_id: AppId,
) -> BoxRefResult<Vec<BoxReference>>
where
    I: IntoIterator<Item = (AppId, N)>,
    N: ToBytes,
{
    ResolveConfig::new(foreign_apps, this_app_id).resolve_all(refs)
}
