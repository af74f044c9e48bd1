use contracts::dashboards::d100_dataset_overview::DatasetRef;
use leptos::prelude::*;
use thaw::*;

/// Static content of the general tab, available without any request
#[component]
pub fn GeneralSummary(dataset: DatasetRef, columns: Vec<String>) -> impl IntoView {
    let title = dataset.display_name().to_string();
    let column_count = columns.len();

    view! {
        <Card>
            <h4 class="details-section__title">{title}</h4>
            <div class="form__group">
                <label class="form__label">"Identifiant"</label>
                <span>{dataset.id}</span>
            </div>
            <div class="form__group">
                <label class="form__label">"Colonnes"</label>
                <span>{column_count}</span>
            </div>
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                {columns
                    .into_iter()
                    .map(|column| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {column}
                        </Badge>
                    })
                    .collect_view()}
            </Flex>
        </Card>
    }
}
