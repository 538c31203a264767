//! Dataset cards with persisted per-file download counters.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::site::{DATASETS, Dataset};
use crate::state::downloads::{DownloadCounts, counter_key, dataset_href};
use crate::util::dom;
use crate::util::storage::LocalStorage;

#[cfg(feature = "hydrate")]
fn dataset_files() -> impl Iterator<Item = &'static str> {
    DATASETS.iter().map(|d| d.file)
}

#[component]
pub fn DatasetsSection() -> impl IntoView {
    // Same zeros as the server render until storage is read after hydration.
    let counts = RwSignal::new(DownloadCounts::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || counts.set(DownloadCounts::load(&LocalStorage, dataset_files())));
    }

    view! {
        <section id="datasets" class="section">
            <h2 class="section-title">"Datasets"</h2>
            <div class="datasets-grid">
                {DATASETS
                    .iter()
                    .map(|dataset| view! { <DatasetCard dataset=*dataset counts=counts/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn DatasetCard(dataset: Dataset, counts: RwSignal<DownloadCounts>) -> impl IntoView {
    let file = dataset.file;
    let on_download = move |_| {
        counts.update(|c| {
            c.record(&LocalStorage, file);
        });
        dom::trigger_download(&dataset_href(file), file);
    };

    view! {
        <Reveal class="dataset-card">
            <h3>{dataset.title}</h3>
            <p>{dataset.summary}</p>
            <button class="btn download-btn" data-file=file on:click=on_download>
                "Download"
            </button>
            <span id=counter_key(file) class="download-count">
                {move || counts.with(|c| c.label(file))}
            </span>
        </Reveal>
    }
}
