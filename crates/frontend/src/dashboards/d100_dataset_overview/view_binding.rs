//! UI surface driven by the tab controller
//!
//! The controller never looks up DOM nodes; it calls [`ViewBinding`].
//! [`SignalView`] is the Leptos implementation: every call writes a signal
//! and the components in `ui` re-render from it.

use super::tab::TabId;
use leptos::prelude::*;

pub trait ViewBinding {
    /// Hide the content block of every tab
    fn hide_all_panels(&self);
    /// Put every tab button in its inactive style
    fn deactivate_all_buttons(&self);
    fn activate_button(&self, tab: TabId);
    fn show_panel(&self, tab: TabId);
    /// Show the loading indicator of `tab` and hide its content area
    fn show_loader(&self, tab: TabId);
    /// Hide the loading indicator of `tab` and reveal its content area
    fn hide_loader(&self, tab: TabId);
    /// Replace the loading indicator area with an error block
    fn show_error(&self, tab: TabId, message: &str);
    /// Replace the content area with a rendered HTML fragment
    fn set_content(&self, tab: TabId, html: String);
}

/// Reactive state of one tab panel
#[derive(Clone, Copy)]
pub struct PaneSignals {
    pub visible: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub content_visible: RwSignal<bool>,
    pub html: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl PaneSignals {
    fn new(visible: bool) -> Self {
        Self {
            visible: RwSignal::new(visible),
            loading: RwSignal::new(false),
            content_visible: RwSignal::new(visible),
            html: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }
}

/// [`ViewBinding`] backed by Leptos signals
#[derive(Clone, Copy)]
pub struct SignalView {
    panes: [PaneSignals; 4],
    active_button: RwSignal<Option<TabId>>,
}

impl SignalView {
    /// Only `initial` starts visible, with its button active
    pub fn new(initial: TabId) -> Self {
        Self {
            panes: TabId::ALL.map(|tab| PaneSignals::new(tab == initial)),
            active_button: RwSignal::new(Some(initial)),
        }
    }

    pub fn pane(&self, tab: TabId) -> PaneSignals {
        self.panes[tab.index()]
    }

    /// Tab whose button is highlighted
    pub fn active_button(&self) -> Signal<Option<TabId>> {
        self.active_button.into()
    }
}

impl ViewBinding for SignalView {
    fn hide_all_panels(&self) {
        for pane in &self.panes {
            pane.visible.set(false);
        }
    }

    fn deactivate_all_buttons(&self) {
        self.active_button.set(None);
    }

    fn activate_button(&self, tab: TabId) {
        self.active_button.set(Some(tab));
    }

    fn show_panel(&self, tab: TabId) {
        self.pane(tab).visible.set(true);
    }

    fn show_loader(&self, tab: TabId) {
        let pane = self.pane(tab);
        pane.error.set(None);
        pane.loading.set(true);
        pane.content_visible.set(false);
    }

    fn hide_loader(&self, tab: TabId) {
        let pane = self.pane(tab);
        pane.loading.set(false);
        pane.content_visible.set(true);
    }

    fn show_error(&self, tab: TabId, message: &str) {
        let pane = self.pane(tab);
        pane.loading.set(false);
        pane.error.set(Some(message.to_string()));
    }

    fn set_content(&self, tab: TabId, html: String) {
        self.pane(tab).html.set(html);
    }
}
