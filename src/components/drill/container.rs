//! Drill-down panel.
//!
//! ## Rendering
//!
//! Content comes from a per-level render function receiving a
//! [`LevelView`]: the level, its drill context, and a callback to drill
//! further. The content is rebuilt only when the level changes, so
//! transient UI state in the child (hover, scroll) survives unrelated
//! re-renders of the panel.

use drillboard_core::{DrillItem, LevelView};
use leptos::prelude::*;

use super::breadcrumbs::Breadcrumbs;
use super::hooks::DrillHandle;

stylance::import_crate_style!(css, "src/components/drill/container.module.css");

/// Titled panel with breadcrumbs and level-indexed content.
#[component]
pub fn DrillDown<F, IV>(
    drill: DrillHandle,
    #[prop(into)] title: String,
    render: F,
) -> impl IntoView
where
    F: Fn(LevelView<Callback<DrillItem>>) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let level = Memo::new(move |_| drill.level());
    let on_drill_down = Callback::new(move |item: DrillItem| drill.drill_down(item));

    let panel_class = move || {
        if drill.is_fullscreen() {
            format!("{} {}", css::panel, css::panelFullscreen)
        } else {
            css::panel.to_string()
        }
    };

    view! {
        <section class=panel_class>
            <header class=css::header>
                <h2 class=css::title>{title}</h2>
            </header>
            <Breadcrumbs drill=drill />
            <div class=css::content>
                {move || {
                    // Only the level is tracked; the context is read as of
                    // this level's entry.
                    level.track();
                    drill.level_view(on_drill_down).map(&render)
                }}
            </div>
        </section>
    }
}
