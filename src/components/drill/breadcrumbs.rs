//! Breadcrumb bar for drill-down views.
//!
//! Every level above the current one is a clickable segment that jumps
//! straight back to it; the current level is shown disabled.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::DrillHandle;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/drill/breadcrumbs.module.css");

/// Breadcrumb trail with up and fullscreen controls.
#[component]
pub fn Breadcrumbs(drill: DrillHandle) -> impl IntoView {
    let level = Memo::new(move |_| drill.level());
    let fullscreen = Memo::new(move |_| drill.is_fullscreen());

    view! {
        <nav class=css::bar>
            <div class=css::trail>
                {move || {
                    let trail = drill.trail();
                    let current = trail.len() - 1;

                    trail
                        .into_iter()
                        .enumerate()
                        .map(|(idx, entry)| {
                            let icon = if entry.is_root() { ic::HOME } else { ic::CHART };
                            view! {
                                <>
                                    {(idx > 0).then(|| view! {
                                        <span class=css::separator>
                                            <Icon icon=ic::CHEVRON_RIGHT />
                                        </span>
                                    })}
                                    {if idx < current {
                                        view! {
                                            <SegmentLink
                                                icon=icon
                                                label=entry.label
                                                on_click=move || drill.jump_to_level(idx)
                                            />
                                        }.into_any()
                                    } else {
                                        view! {
                                            <SegmentCurrent icon=icon label=entry.label />
                                        }.into_any()
                                    }}
                                </>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class=css::actions>
                <Show when=move || { level.get() > 0 }>
                    <button
                        class=css::action
                        title="Up one level"
                        on:click=move |_| drill.drill_up()
                    >
                        <Icon icon=ic::UP />
                    </button>
                </Show>
                <button
                    class=css::action
                    title=move || if fullscreen.get() { "Exit fullscreen" } else { "Fullscreen" }
                    on:click=move |_| drill.toggle_fullscreen()
                >
                    {move || if fullscreen.get() {
                        view! { <Icon icon=ic::EXIT_FULLSCREEN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::FULLSCREEN /> }.into_any()
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Clickable breadcrumb segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::segment
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) breadcrumb segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
