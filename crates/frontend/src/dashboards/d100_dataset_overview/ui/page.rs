//! Page component: owns the controller and wires clicks to it
//!
//! The controller is not `Send` (RefCell state, browser fetch client), so it
//! lives in a local `StoredValue` and handlers clone the `Rc` out of it.

use super::general::GeneralSummary;
use super::panel::TabPanel;
use super::tab_bar::TabBar;
use crate::dashboards::d100_dataset_overview::api::HttpResourceClient;
use crate::dashboards::d100_dataset_overview::controller::TabController;
use crate::dashboards::d100_dataset_overview::tab::TabId;
use crate::dashboards::d100_dataset_overview::view_binding::SignalView;
use crate::shared::components::ui::Select;
use crate::shared::config::HostConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

type OverviewController = TabController<HttpResourceClient, SignalView>;

/// Dataset overview dashboard
#[component]
pub fn DatasetOverview(config: HostConfig) -> impl IntoView {
    let binding = SignalView::new(TabId::General);
    let controller: Rc<OverviewController> = Rc::new(TabController::new(
        HttpResourceClient::new(config.api_base.clone()),
        binding,
        config.dataset.clone(),
    ));
    let controller = StoredValue::new_local(controller);

    let on_select = Callback::new(move |tab: TabId| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.show_tab(tab).await;
        });
    });

    let selected_column = RwSignal::new(String::new());
    let on_column_change = Callback::new(move |value: String| {
        selected_column.set(value.clone());
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.select_column(Some(value)).await;
        });
    });

    let column_options: Vec<(String, String)> = config
        .columns
        .iter()
        .map(|c| (c.clone(), c.clone()))
        .collect();
    let has_columns = !column_options.is_empty();

    view! {
        <div class="dataset-overview">
            <TabBar binding=binding on_select=on_select />

            <div class="dataset-overview__panels">
                <TabPanel tab=TabId::General pane=binding.pane(TabId::General)>
                    <GeneralSummary dataset=config.dataset.clone() columns=config.columns.clone() />
                </TabPanel>

                <TabPanel tab=TabId::Statistics pane=binding.pane(TabId::Statistics)>
                    {has_columns.then(|| view! {
                        <Select
                            id="column-selector"
                            label="Colonne analysée"
                            placeholder="Toutes les colonnes"
                            value=selected_column
                            options=column_options
                            on_change=on_column_change
                        />
                    })}
                </TabPanel>

                <TabPanel tab=TabId::Distributions pane=binding.pane(TabId::Distributions) />
                <TabPanel tab=TabId::Correlations pane=binding.pane(TabId::Correlations) />
            </div>
        </div>
    }
}
