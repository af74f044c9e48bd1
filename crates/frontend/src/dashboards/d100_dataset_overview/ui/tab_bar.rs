use crate::dashboards::d100_dataset_overview::tab::TabId;
use crate::dashboards::d100_dataset_overview::view_binding::SignalView;
use leptos::prelude::*;
use thaw::*;

fn tab_icon(tab: TabId) -> &'static str {
    match tab {
        TabId::General => "fas fa-info-circle",
        TabId::Statistics => "fas fa-calculator",
        TabId::Distributions => "fas fa-chart-bar",
        TabId::Correlations => "fas fa-project-diagram",
    }
}

/// One button per tab; the highlighted one follows the view binding
#[component]
pub fn TabBar(binding: SignalView, on_select: Callback<TabId>) -> impl IntoView {
    let active = binding.active_button();

    view! {
        <Flex gap=FlexGap::Small class="tab-bar">
            {TabId::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active.get() == Some(tab) {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| on_select.run(tab)
                        >
                            <i class=tab_icon(tab) style="margin-right: 6px;"></i>
                            {tab.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}
