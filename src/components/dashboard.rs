//! Sales dashboard page.
//!
//! Levels: regions → cities → stores → store detail. Each level fetches its
//! own scope through [`use_fetch`], keyed by the breadcrumb trail, so
//! drilling back up is answered from the session cache.

use drillboard_core::{DrillClickAdapter, DrillItem, DrillNavigator, FetchOptions, LevelView};
use leptos::prelude::*;

use crate::components::charts::{SegmentBars, SelectionSlot, StoreTable};
use crate::components::data::{DataStatus, use_fetch};
use crate::components::drill::{DrillDown, DrillHandle, use_drill};
use crate::config::{APP_NAME, SALES_PANEL_TITLE, cache};
use crate::core::{fetch_segments, fetch_stores};
use crate::models::{SalesScope, StoreRow, replace_hash, trail_hash};

stylance::import_crate_style!(css, "src/components/dashboard.module.css");

type SalesLevelView = LevelView<Callback<DrillItem>>;

/// Dashboard page.
#[component]
pub fn Dashboard() -> impl IntoView {
    let navigator = DrillNavigator::new()
        .on_drill_down(|item, level| tracing::info!(key = %item.key, level, "sales drill down"))
        .on_drill_up(|level| tracing::info!(level, "sales drill up"));
    let drill = use_drill(navigator);

    // Mirror the trail into the URL hash
    Effect::new(move |_| replace_hash(&trail_hash(&drill.trail())));

    view! {
        <main class=css::dashboard>
            <header class=css::header>
                <h1 class=css::brand>{APP_NAME}</h1>
            </header>
            <DrillDown
                drill=drill
                title=SALES_PANEL_TITLE
                render=move |level: SalesLevelView| view! { <SalesLevel drill=drill level=level /> }
            />
        </main>
    }
}

/// Content for one drill level.
#[component]
fn SalesLevel(drill: DrillHandle, level: SalesLevelView) -> impl IntoView {
    let scope = SalesScope::from_trail(&untrack(|| drill.trail()));

    let selection = SelectionSlot::new();
    let on_drill_down = level.on_drill_down;
    DrillClickAdapter::new(move |item| on_drill_down.run(item)).attach(&selection);

    match scope {
        Some(scope @ SalesScope::Stores { .. }) => {
            view! { <StoreLevel scope=scope selection=selection /> }.into_any()
        }
        Some(scope) => view! { <SegmentLevel scope=scope selection=selection /> }.into_any(),
        None => view! { <StoreDetail item=level.data /> }.into_any(),
    }
}

/// Region or city breakdown.
#[component]
fn SegmentLevel(scope: SalesScope, selection: SelectionSlot) -> impl IntoView {
    let options = FetchOptions::new(Vec::new())
        .cache_key(scope.cache_key(cache::SALES_KEY_PREFIX))
        .ttl(cache::SALES_TTL);
    let sales = use_fetch(move || scope.clone(), fetch_segments, options);

    view! {
        <DataStatus
            loading=Signal::derive(move || sales.loading())
            error=Signal::derive(move || sales.error())
            on_retry=Callback::new(move |_| sales.refetch())
        />
        <SegmentBars segments=Signal::derive(move || sales.data()) selection=selection />
    }
}

/// Store listing of a city.
#[component]
fn StoreLevel(scope: SalesScope, selection: SelectionSlot) -> impl IntoView {
    let options = FetchOptions::new(Vec::new())
        .cache_key(scope.cache_key(cache::SALES_KEY_PREFIX))
        .ttl(cache::SALES_TTL);
    let stores = use_fetch(move || scope.clone(), fetch_stores, options);

    view! {
        <DataStatus
            loading=Signal::derive(move || stores.loading())
            error=Signal::derive(move || stores.error())
            on_retry=Callback::new(move |_| stores.refetch())
        />
        <StoreTable rows=Signal::derive(move || stores.data()) selection=selection />
    }
}

/// Leaf level: the selected store, straight from the drill context.
#[component]
fn StoreDetail(item: Option<DrillItem>) -> impl IntoView {
    let row = item
        .as_ref()
        .and_then(|item| serde_json::from_value::<StoreRow>(item.data.clone()).ok());

    match row {
        Some(row) => view! {
            <dl class=css::detail>
                <dt>"Store"</dt>
                <dd>{row.name}</dd>
                <dt>"Format"</dt>
                <dd>{row.kind}</dd>
                <dt>"Revenue"</dt>
                <dd>{format!("{:.2}", row.revenue)}</dd>
                <dt>"Store ID"</dt>
                <dd>{row.id}</dd>
            </dl>
        }
        .into_any(),
        None => view! { <p class=css::empty>"No details for this selection."</p> }.into_any(),
    }
}
