//! Tab controller: switches tabs and runs load-then-render cycles
//!
//! Shared through `Rc` on the UI thread. `RefCell` borrows are never held
//! across an `.await`, so overlapping cycles cannot panic; the newest cycle
//! of a tab wins and older responses are dropped.

use super::api::{RequestError, ResourceClient};
use super::render::{render_correlations, render_distributions, render_statistics};
use super::tab::{TabId, TabState};
use super::view_binding::ViewBinding;
use contracts::dashboards::d100_dataset_overview::{DatasetRef, ResourceKind};
use std::cell::RefCell;

/// Outcome of a load cycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    Failed(RequestError),
    /// A newer cycle for the same tab started while this one was in flight
    Superseded,
}

pub struct TabController<C, V> {
    client: C,
    view: V,
    dataset: DatasetRef,
    state: RefCell<TabState>,
    selected_column: RefCell<Option<String>>,
}

impl<C: ResourceClient, V: ViewBinding> TabController<C, V> {
    pub fn new(client: C, view: V, dataset: DatasetRef) -> Self {
        Self {
            client,
            view,
            dataset,
            state: RefCell::new(TabState::new()),
            selected_column: RefCell::new(None),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn active_tab(&self) -> TabId {
        self.state.borrow().active()
    }

    pub fn is_loaded(&self, tab: TabId) -> bool {
        self.state.borrow().is_loaded(tab)
    }

    pub fn selected_column(&self) -> Option<String> {
        self.selected_column.borrow().clone()
    }

    /// Switch to `tab`. No-op when it is already active; loads it on first visit.
    pub async fn show_tab(&self, tab: TabId) {
        if !self.state.borrow_mut().activate(tab) {
            return;
        }
        log::debug!("Switching to tab {}", tab.key());

        self.view.hide_all_panels();
        self.view.deactivate_all_buttons();
        self.view.activate_button(tab);
        self.view.show_panel(tab);

        if !self.is_loaded(tab) {
            self.load_tab(tab).await;
        }
    }

    /// Remember the statistics column and refetch statistics for it.
    ///
    /// An empty string clears the selection. The refetch happens right away
    /// when the statistics tab is active, otherwise on its next visit.
    pub async fn select_column(&self, column: Option<String>) {
        let column = column.filter(|c| !c.is_empty());
        if *self.selected_column.borrow() == column {
            return;
        }
        log::debug!("Statistics column changed to {:?}", column);
        *self.selected_column.borrow_mut() = column;

        self.state.borrow_mut().invalidate(TabId::Statistics);
        if self.active_tab() == TabId::Statistics {
            self.load_tab(TabId::Statistics).await;
        }
    }

    /// One load-then-render cycle for `tab`, regardless of its loaded flag
    pub async fn load_tab(&self, tab: TabId) -> LoadOutcome {
        let Some(kind) = tab.resource() else {
            self.state.borrow_mut().mark_loaded(tab);
            return LoadOutcome::Loaded;
        };

        let generation = self.state.borrow_mut().begin_load(tab);
        self.view.show_loader(tab);

        let result = self.fetch_and_render(kind).await;

        if !self.state.borrow().is_current(tab, generation) {
            log::warn!(
                "Dropping stale {} response (cycle {})",
                kind.path_segment(),
                generation
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(html) => {
                self.view.set_content(tab, html);
                self.view.hide_loader(tab);
                self.state.borrow_mut().mark_loaded(tab);
                log::info!(
                    "Tab {} loaded for dataset {}",
                    tab.key(),
                    self.dataset.id
                );
                LoadOutcome::Loaded
            }
            Err(e) => {
                log::error!("Failed to load tab {}: {}", tab.key(), e);
                self.view.show_error(tab, &e.to_string());
                LoadOutcome::Failed(e)
            }
        }
    }

    async fn fetch_and_render(&self, kind: ResourceKind) -> Result<String, RequestError> {
        match kind {
            ResourceKind::Statistics => {
                let column = self.selected_column();
                let payload = self
                    .client
                    .load_statistics(&self.dataset, column.as_deref())
                    .await?;
                Ok(render_statistics(&payload))
            }
            ResourceKind::Distributions => {
                let payload = self.client.load_distributions(&self.dataset).await?;
                Ok(render_distributions(&payload))
            }
            ResourceKind::Correlations => {
                let payload = self.client.load_correlations(&self.dataset).await?;
                Ok(render_correlations(&payload))
            }
        }
    }
}
