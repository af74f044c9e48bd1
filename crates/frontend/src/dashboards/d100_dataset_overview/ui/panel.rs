use crate::dashboards::d100_dataset_overview::tab::TabId;
use crate::dashboards::d100_dataset_overview::view_binding::PaneSignals;
use crate::shared::api_utils::reload_page;
use leptos::prelude::*;
use thaw::*;

/// Content block of a tab: optional static header, loader/error area, rendered body
#[component]
pub fn TabPanel(
    tab: TabId,
    pane: PaneSignals,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            id=format!("tab-{}", tab.key())
            class="tab-content"
            class:hidden=move || !pane.visible.get()
        >
            {children.map(|children| children())}

            <div id=format!("{}-loader", tab.key())>
                {move || {
                    if let Some(message) = pane.error.get() {
                        view! { <LoadError message=message /> }.into_any()
                    } else if pane.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                <Spinner />
                                <span>"Veuillez patienter, chargement..."</span>
                            </Flex>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div
                id=format!("{}-content", tab.key())
                class="tab-content__body"
                class:hidden=move || !pane.content_visible.get()
                inner_html=move || pane.html.get()
            ></div>
        </div>
    }
}

/// Inline error with a full page reload as the way out
#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <i class="fas fa-exclamation-triangle text-4xl text-red-500 mb-4"></i>
            <h3 class="text-lg font-semibold text-gray-800 mb-2">"Erreur de chargement"</h3>
            <p class="text-gray-600">{message}</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| reload_page()>
                "Réessayer"
            </Button>
        </div>
    }
}
