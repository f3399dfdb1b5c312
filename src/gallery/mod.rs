//! Gallery load-more state
//!
//! Each infinite-scroll region of the site tracks its own incremental
//! loading progress: how many items should be visible, how many have
//! actually been fetched, and whether a fetch is in flight. The store
//! holds one record per region and offers a read/patch/update/subscribe
//! contract so consumers stay decoupled from any rendering layer.
//!
//! The store serializes individual mutations but does not arbitrate
//! between callers: `is_loading` is an advisory flag for preventing
//! duplicate fetches, not a lock.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

/// The closed set of UI regions with independent load-more progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryRegion {
    PhotosRoot,
    PhotosGrid,
}

impl GalleryRegion {
    pub const ALL: [Self; 2] = [Self::PhotosRoot, Self::PhotosGrid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhotosRoot => "photos-root",
            Self::PhotosGrid => "photos-grid",
        }
    }
}

impl FromStr for GalleryRegion {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "photos-root" => Ok(Self::PhotosRoot),
            "photos-grid" => Ok(Self::PhotosGrid),
            _ => Err(()),
        }
    }
}

/// Load-more progress for a single region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionState {
    /// How many items are currently meant to be rendered.
    pub index_to_view: usize,
    /// How many items have actually been fetched so far.
    pub index_loaded: usize,
    /// Whether a fetch is in flight. Advisory only.
    pub is_loading: bool,
    /// Upper bound on loadable items, once known.
    pub last_index_to_load: Option<usize>,
    /// One-way latch: set by a caller when its per-request retry
    /// budget runs out, never cleared by the store.
    pub attempts_exceeded: bool,
    /// Ordered handles of the items rendered so far.
    pub component_ids: Vec<String>,
}

/// Shallow partial update for a region: only present fields replace.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegionPatch {
    pub index_to_view: Option<usize>,
    pub index_loaded: Option<usize>,
    pub is_loading: Option<bool>,
    pub last_index_to_load: Option<usize>,
    pub attempts_exceeded: Option<bool>,
    pub component_ids: Option<Vec<String>>,
}

impl RegionPatch {
    fn apply_to(&self, state: &mut RegionState) {
        if let Some(index_to_view) = self.index_to_view {
            state.index_to_view = index_to_view;
        }
        if let Some(index_loaded) = self.index_loaded {
            state.index_loaded = index_loaded;
        }
        if let Some(is_loading) = self.is_loading {
            state.is_loading = is_loading;
        }
        if let Some(last_index_to_load) = self.last_index_to_load {
            state.last_index_to_load = Some(last_index_to_load);
        }
        if let Some(attempts_exceeded) = self.attempts_exceeded {
            // One-way latch: a patch can set it, never clear it.
            state.attempts_exceeded = state.attempts_exceeded || attempts_exceeded;
        }
        if let Some(ref component_ids) = self.component_ids {
            state.component_ids = component_ids.clone();
        }
    }
}

/// Snapshot of every region's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryState {
    pub photos_root: RegionState,
    pub photos_grid: RegionState,
}

impl GalleryState {
    pub fn region(&self, region: GalleryRegion) -> &RegionState {
        match region {
            GalleryRegion::PhotosRoot => &self.photos_root,
            GalleryRegion::PhotosGrid => &self.photos_grid,
        }
    }

    fn region_mut(&mut self, region: GalleryRegion) -> &mut RegionState {
        match region {
            GalleryRegion::PhotosRoot => &mut self.photos_root,
            GalleryRegion::PhotosGrid => &mut self.photos_grid,
        }
    }
}

type Listener = Box<dyn Fn(&GalleryState) + Send + Sync>;

/// Shared store of per-region load-more state.
///
/// Every region starts zeroed. Mutations replace exactly the named
/// region's record; registered listeners are notified with the full
/// post-update state after every mutation.
#[derive(Default)]
pub struct GalleryStore {
    state: RwLock<GalleryState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all regions.
    pub fn read(&self) -> GalleryState {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of a single region.
    pub fn read_region(&self, region: GalleryRegion) -> RegionState {
        self.read().region(region).clone()
    }

    /// Shallow-merge a patch onto the named region's record. Other
    /// regions are untouched.
    pub fn apply(&self, region: GalleryRegion, patch: &RegionPatch) -> RegionState {
        let snapshot = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            patch.apply_to(state.region_mut(region));
            state.clone()
        };
        let updated = snapshot.region(region).clone();
        self.notify(&snapshot);
        updated
    }

    /// Replace the named region's record with the result of `f`.
    ///
    /// The attempts latch survives replacement: once set it stays set.
    pub fn update<F>(&self, region: GalleryRegion, f: F) -> RegionState
    where
        F: FnOnce(&RegionState) -> RegionState,
    {
        let snapshot = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let current = state.region_mut(region);
            let latched = current.attempts_exceeded;
            let mut next = f(&*current);
            next.attempts_exceeded = next.attempts_exceeded || latched;
            *current = next;
            state.clone()
        };
        let updated = snapshot.region(region).clone();
        self.notify(&snapshot);
        updated
    }

    /// Register a listener invoked with the full state after every
    /// mutation. The returned subscription unregisters on drop or via
    /// [`Subscription::unsubscribe`].
    pub fn subscribe<F>(self: &Arc<Self>, listener: F) -> Subscription
    where
        F: Fn(&GalleryState) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((id, Box::new(listener)));
        Subscription {
            id,
            store: Arc::downgrade(self),
        }
    }

    fn notify(&self, state: &GalleryState) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for (_, listener) in listeners.iter() {
            listener(state);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Handle to a registered listener; dropping it unregisters.
pub struct Subscription {
    id: u64,
    store: Weak<GalleryStore>,
}

impl Subscription {
    /// Unregister explicitly. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}
