use crate::dashboards::DatasetOverview;
use crate::shared::config::{mount_element, ConfigError, HostConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;
use wasm_bindgen::JsCast;

#[component]
pub fn App(config: HostConfig) -> impl IntoView {
    view! {
        <ConfigProvider>
            <DatasetOverview config=config />
        </ConfigProvider>
    }
}

/// Mount the dashboard into the host page's `#dataset-overview` element.
///
/// Configuration problems are logged and leave the page untouched.
pub fn mount() {
    match read_host() {
        Ok((element, config)) => {
            log::info!(
                "Dataset overview initialised for dataset {} ({})",
                config.dataset.id,
                config.dataset.display_name()
            );
            leptos::mount::mount_to(element, move || view! { <App config=config /> }).forget();
        }
        Err(e) => log::error!("Dataset overview not mounted: {}", e),
    }
}

fn read_host() -> Result<(web_sys::HtmlElement, HostConfig), ConfigError> {
    let element = mount_element()?;
    let config = HostConfig::from_element(&element)?;
    Ok((element.unchecked_into(), config))
}
