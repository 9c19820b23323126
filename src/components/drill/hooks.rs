//! Drill-down navigation hook.

use drillboard_core::{BreadcrumbEntry, DrillItem, DrillNavigator, LevelView, NavigationState};
use leptos::prelude::*;

/// Navigation state and transitions for one drill-down view.
///
/// The navigator is the source of truth; every transition copies its new
/// state into `state` so views re-render. Illegal transitions change
/// nothing and notify nobody.
#[derive(Clone, Copy)]
pub struct DrillHandle {
    state: RwSignal<NavigationState>,
    navigator: StoredValue<DrillNavigator, LocalStorage>,
}

impl DrillHandle {
    /// Current depth (tracked).
    pub fn level(&self) -> usize {
        self.state.with(|s| s.level())
    }

    pub fn trail(&self) -> Vec<BreadcrumbEntry> {
        self.state.with(|s| s.trail().to_vec())
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state.with(|s| s.is_fullscreen())
    }

    pub fn drill_down(&self, item: DrillItem) {
        self.transition(|nav| {
            nav.drill_down(item);
        });
    }

    pub fn drill_up(&self) {
        self.transition(|nav| {
            nav.drill_up();
        });
    }

    pub fn jump_to_level(&self, index: usize) {
        self.transition(|nav| {
            nav.jump_to_level(index);
        });
    }

    pub fn toggle_fullscreen(&self) {
        self.transition(|nav| {
            nav.toggle_fullscreen();
        });
    }

    /// Render arguments for the current level (untracked).
    pub fn level_view(
        &self,
        on_drill_down: Callback<DrillItem>,
    ) -> Option<LevelView<Callback<DrillItem>>> {
        self.navigator.try_with_value(|nav| nav.level_view(on_drill_down))
    }

    fn transition(&self, f: impl FnOnce(&mut DrillNavigator)) {
        let Some(next) = self.navigator.try_update_value(|nav| {
            f(nav);
            nav.state().clone()
        }) else {
            return;
        };

        if self.state.with_untracked(|current| current != &next) {
            self.state.set(next);
        }
    }
}

/// Create navigation state for a drill-down view.
///
/// Transition hooks registered on `navigator` (analytics, URL sync, ...)
/// fire from inside the transition.
pub fn use_drill(navigator: DrillNavigator) -> DrillHandle {
    DrillHandle {
        state: RwSignal::new(navigator.state().clone()),
        navigator: StoredValue::new_local(navigator),
    }
}
