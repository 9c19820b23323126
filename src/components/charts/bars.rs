//! Horizontal bar breakdown.

use leptos::prelude::*;
use serde_json::json;

use super::SelectionSlot;
use crate::models::Segment;

stylance::import_crate_style!(css, "src/components/charts/bars.module.css");

/// Bar width as a percentage of the largest value.
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// One bar per segment; clicking a bar selects `{name, value}`.
#[component]
pub fn SegmentBars(
    #[prop(into)] segments: Signal<Vec<Segment>>,
    selection: SelectionSlot,
) -> impl IntoView {
    view! {
        <ul class=css::bars>
            {move || {
                let segments = segments.get();
                let max = segments.iter().map(|s| s.value).fold(0.0, f64::max);

                segments
                    .into_iter()
                    .map(|segment| {
                        let width = format!("width: {:.1}%", bar_width(segment.value, max));
                        let payload = json!({"name": segment.name, "value": segment.value});
                        view! {
                            <li class=css::row on:click=move |_| selection.select(&payload)>
                                <span class=css::name>{segment.name}</span>
                                <span class=css::track>
                                    <span class=css::fill style=width></span>
                                </span>
                                <span class=css::value>{format!("{:.0}", segment.value)}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(200.0, 200.0), 100.0);
        assert_eq!(bar_width(5.0, 0.0), 0.0);
        assert_eq!(bar_width(-5.0, 10.0), 0.0);
    }
}
