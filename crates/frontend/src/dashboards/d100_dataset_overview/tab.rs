use contracts::dashboards::d100_dataset_overview::ResourceKind;
use std::collections::HashSet;

/// Tabs of the overview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    General,
    Statistics,
    Distributions,
    Correlations,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::General,
        TabId::Statistics,
        TabId::Distributions,
        TabId::Correlations,
    ];

    /// Stable key, also used in element ids (`tab-{key}`)
    pub fn key(self) -> &'static str {
        match self {
            TabId::General => "general",
            TabId::Statistics => "statistics",
            TabId::Distributions => "distributions",
            TabId::Correlations => "correlations",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabId::General => "Vue générale",
            TabId::Statistics => "Statistiques",
            TabId::Distributions => "Distributions",
            TabId::Correlations => "Corrélations",
        }
    }

    /// Backend resource behind the tab; the general tab is static
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            TabId::General => None,
            TabId::Statistics => Some(ResourceKind::Statistics),
            TabId::Distributions => Some(ResourceKind::Distributions),
            TabId::Correlations => Some(ResourceKind::Correlations),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TabId::General => 0,
            TabId::Statistics => 1,
            TabId::Distributions => 2,
            TabId::Correlations => 3,
        }
    }
}

/// Active tab, loaded tabs and the load cycle counter of each tab.
///
/// A tab is loaded at most once; only [`TabState::invalidate`] takes it out again.
#[derive(Debug, Clone)]
pub struct TabState {
    active: TabId,
    loaded: HashSet<TabId>,
    generations: [u64; 4],
}

impl TabState {
    /// General tab active and already loaded (its content ships with the page)
    pub fn new() -> Self {
        Self {
            active: TabId::General,
            loaded: HashSet::from([TabId::General]),
            generations: [0; 4],
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Make `tab` active; `false` when it already was
    pub fn activate(&mut self, tab: TabId) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn is_loaded(&self, tab: TabId) -> bool {
        self.loaded.contains(&tab)
    }

    pub fn mark_loaded(&mut self, tab: TabId) {
        self.loaded.insert(tab);
    }

    /// Start a load cycle and return its generation
    pub fn begin_load(&mut self, tab: TabId) -> u64 {
        let slot = &mut self.generations[tab.index()];
        *slot += 1;
        *slot
    }

    /// Evict `tab` and supersede any cycle still in flight for it
    pub fn invalidate(&mut self, tab: TabId) {
        self.loaded.remove(&tab);
        self.generations[tab.index()] += 1;
    }

    /// Whether `generation` is still the newest cycle started for `tab`
    pub fn is_current(&self, tab: TabId, generation: u64) -> bool {
        self.generations[tab.index()] == generation
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}
