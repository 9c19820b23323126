//! Store listing table.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::SelectionSlot;
use crate::components::icons as ic;
use crate::models::StoreRow;

stylance::import_crate_style!(css, "src/components/charts/table.module.css");

/// Table of stores; activating a row selects the whole row
/// (`{id, name, type, revenue}`).
#[component]
pub fn StoreTable(
    #[prop(into)] rows: Signal<Vec<StoreRow>>,
    selection: SelectionSlot,
) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Store"</th>
                    <th>"Format"</th>
                    <th class=css::numeric>"Revenue"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            let payload = serde_json::to_value(&row).unwrap_or_default();
                            view! {
                                <tr class=css::row on:click=move |_| selection.select(&payload)>
                                    <td>
                                        <span class=css::icon><Icon icon=ic::STORE /></span>
                                        {row.name}
                                    </td>
                                    <td>{row.kind}</td>
                                    <td class=css::numeric>{format!("{:.2}", row.revenue)}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
