//! # Selection State
//!
//! The single source of truth for which regions an alert rule targets.
//! [`RegionSelection`] is an immutable-update set: every operation takes
//! `&self` and returns a new set, so readers (the merge and presentation
//! stages) always hold consistent snapshots. [`SelectionController`] owns the
//! authoritative set, applies operations in caller order, and notifies its
//! [`SelectionObserver`] with the ordered id list after every operation so
//! the containing alert form can stage the value for submission.
//!
//! ## Scoped Bulk Operations
//!
//! `select_all` and `deselect_all` take the *eligible* ids — the rows the
//! user is currently shown — and touch only those. Ids selected earlier but
//! hidden by an active search or service filter survive both operations.
//! Replacing the whole set instead would silently drop selections the user
//! cannot currently see; the scoped semantics are deliberate and match how
//! bulk checkboxes behave in filtered tables.
//!
//! ## Totality
//!
//! Operations accept any well-formed [`RegionId`], including ids no catalog
//! entry matches. Selections may be restored from a saved alert before the
//! region list finishes loading, and optimistic updates must not fail.
//! Dangling ids never surface as checked rows (the merge stage only emits
//! cataloged regions); [`RegionSelection::prune_dangling`] drops them
//! explicitly once a catalog is available.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use pulse_core::{RegionCatalog, RegionId};

/// The set of selected region ids.
///
/// Backed by an ordered set: membership is duplicate-free and
/// order-independent, and [`RegionSelection::to_ids`] emits ids in a
/// deterministic (lexicographic) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSelection {
    selected: BTreeSet<RegionId>,
}

impl RegionSelection {
    /// The empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from saved ids (an existing alert's region scope).
    /// Duplicates collapse.
    pub fn from_ids(ids: impl IntoIterator<Item = RegionId>) -> Self {
        Self {
            selected: ids.into_iter().collect(),
        }
    }

    /// Selection with `id` added. No-op if already present.
    pub fn select(&self, id: RegionId) -> Self {
        let mut selected = self.selected.clone();
        selected.insert(id);
        Self { selected }
    }

    /// Selection with `id` removed. No-op if absent.
    pub fn deselect(&self, id: &RegionId) -> Self {
        let mut selected = self.selected.clone();
        selected.remove(id);
        Self { selected }
    }

    /// Selection with every eligible id added.
    ///
    /// Ids already selected but not in `eligible` are left untouched: with
    /// an active filter, "select all" affects only the visible rows.
    pub fn select_all(&self, eligible: &[RegionId]) -> Self {
        let mut selected = self.selected.clone();
        selected.extend(eligible.iter().cloned());
        Self { selected }
    }

    /// Selection with every eligible id removed.
    ///
    /// Symmetric to [`RegionSelection::select_all`]: out-of-scope selections
    /// (ids hidden by the current filter) survive.
    pub fn deselect_all(&self, eligible: &[RegionId]) -> Self {
        let mut selected = self.selected.clone();
        for id in eligible {
            selected.remove(id);
        }
        Self { selected }
    }

    /// Selection restricted to ids the catalog knows.
    ///
    /// Dropped ids are logged; they are tolerated in the set but pointless
    /// once the catalog is authoritative (a saved alert may reference a
    /// retired region).
    pub fn prune_dangling(&self, catalog: &RegionCatalog) -> Self {
        let mut selected = BTreeSet::new();
        for id in &self.selected {
            if catalog.contains(id) {
                selected.insert(id.clone());
            } else {
                tracing::warn!(region = %id, "selected region missing from catalog, dropping");
            }
        }
        Self { selected }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RegionId) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate selected ids in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionId> {
        self.selected.iter()
    }

    /// The selected ids as an ordered list — the shape consumers stage for
    /// submission.
    pub fn to_ids(&self) -> Vec<RegionId> {
        self.selected.iter().cloned().collect()
    }
}

/// Receiver for selection changes.
///
/// Implemented for any `FnMut(&[RegionId])` closure, so a containing form
/// can stage the list without a named type.
pub trait SelectionObserver {
    /// Called with the full ordered id list after every controller
    /// operation.
    fn selection_changed(&mut self, selected: &[RegionId]);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&[RegionId]),
{
    fn selection_changed(&mut self, selected: &[RegionId]) {
        self(selected)
    }
}

/// Owner of the authoritative selection.
///
/// All mutation flows through the controller, which replaces the owned set
/// (never edits it in place) and then notifies the observer — including for
/// operations that turn out to be no-ops, so the staged value is always the
/// current one.
pub struct SelectionController<O: SelectionObserver> {
    selection: RegionSelection,
    observer: O,
}

impl<O: SelectionObserver> SelectionController<O> {
    /// Start from an initial selection (empty, or a saved alert's scope).
    ///
    /// Construction does not notify; only operations do.
    pub fn new(initial: RegionSelection, observer: O) -> Self {
        Self {
            selection: initial,
            observer,
        }
    }

    /// The current selection snapshot.
    pub fn selection(&self) -> &RegionSelection {
        &self.selection
    }

    /// Select one region.
    pub fn select(&mut self, id: RegionId) {
        let next = self.selection.select(id);
        self.replace(next, "select");
    }

    /// Deselect one region.
    pub fn deselect(&mut self, id: &RegionId) {
        let next = self.selection.deselect(id);
        self.replace(next, "deselect");
    }

    /// Select every currently eligible region.
    pub fn select_all(&mut self, eligible: &[RegionId]) {
        let next = self.selection.select_all(eligible);
        self.replace(next, "select_all");
    }

    /// Deselect every currently eligible region.
    pub fn deselect_all(&mut self, eligible: &[RegionId]) {
        let next = self.selection.deselect_all(eligible);
        self.replace(next, "deselect_all");
    }

    /// Drop selected ids the catalog does not know.
    pub fn prune_dangling(&mut self, catalog: &RegionCatalog) {
        let next = self.selection.prune_dangling(catalog);
        self.replace(next, "prune_dangling");
    }

    fn replace(&mut self, next: RegionSelection, op: &'static str) {
        self.selection = next;
        tracing::trace!(op, selected = self.selection.len(), "selection updated");
        let ids = self.selection.to_ids();
        self.observer.selection_changed(&ids);
    }
}

impl<O: SelectionObserver> fmt::Debug for SelectionController<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
