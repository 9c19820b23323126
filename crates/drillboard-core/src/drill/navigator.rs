//! Breadcrumb navigation state machine.
//!
//! Levels are indexed by trail depth: level 0 is the root, level N is N
//! drill-downs deep. The only edges are one level down ([`drill_down`]) and
//! any number of levels up ([`drill_up`], [`jump_to_level`]). Upward moves
//! that are not legal from the current state are silent no-ops so click
//! handlers can be wired without guards.
//!
//! [`drill_down`]: DrillNavigator::drill_down
//! [`drill_up`]: DrillNavigator::drill_up
//! [`jump_to_level`]: DrillNavigator::jump_to_level

use std::rc::Rc;

use super::item::{BreadcrumbEntry, DrillItem};

/// Snapshot of the navigation state.
///
/// The trail always starts with the root entry, and the drill context is
/// only set below the root.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    trail: Vec<BreadcrumbEntry>,
    drill_context: Option<DrillItem>,
    fullscreen: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            trail: vec![BreadcrumbEntry::root()],
            drill_context: None,
            fullscreen: false,
        }
    }

    /// Current depth (`trail.len() - 1`).
    #[inline]
    pub fn level(&self) -> usize {
        self.trail.len() - 1
    }

    pub fn trail(&self) -> &[BreadcrumbEntry] {
        &self.trail
    }

    /// Item selected by the most recent drill-down, if below the root.
    pub fn drill_context(&self) -> Option<&DrillItem> {
        self.drill_context.as_ref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// The entry for the current level.
    pub fn current(&self) -> &BreadcrumbEntry {
        // trail is never empty
        &self.trail[self.trail.len() - 1]
    }

    pub fn can_drill_up(&self) -> bool {
        self.trail.len() > 1
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for rendering the content of one level.
#[derive(Debug, Clone)]
pub struct LevelView<F> {
    pub level: usize,
    /// The drill context at this level.
    pub data: Option<DrillItem>,
    /// Handler the content calls to drill further down.
    pub on_drill_down: F,
}

type DrillDownHook = Rc<dyn Fn(&DrillItem, usize)>;
type DrillUpHook = Rc<dyn Fn(usize)>;

/// Drill-down navigator owned by a single view.
#[derive(Clone, Default)]
pub struct DrillNavigator {
    state: NavigationState,
    on_drill_down: Option<DrillDownHook>,
    on_drill_up: Option<DrillUpHook>,
}

impl DrillNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the item and the new level after every drill-down.
    pub fn on_drill_down(mut self, hook: impl Fn(&DrillItem, usize) + 'static) -> Self {
        self.on_drill_down = Some(Rc::new(hook));
        self
    }

    /// Called with the new level after every upward transition.
    pub fn on_drill_up(mut self, hook: impl Fn(usize) + 'static) -> Self {
        self.on_drill_up = Some(Rc::new(hook));
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn level(&self) -> usize {
        self.state.level()
    }

    pub fn breadcrumbs(&self) -> &[BreadcrumbEntry] {
        self.state.trail()
    }

    /// Descend into `item`. Always legal; returns the new level.
    pub fn drill_down(&mut self, item: DrillItem) -> usize {
        self.state
            .trail
            .push(BreadcrumbEntry::new(item.key.clone(), item.label.clone()));
        let level = self.state.level();
        tracing::debug!(key = %item.key, level, "drill down");

        let item = self.state.drill_context.insert(item);
        if let Some(hook) = &self.on_drill_down {
            hook(item, level);
        }
        level
    }

    /// Go up one level. Returns `false` (and does nothing) at the root.
    pub fn drill_up(&mut self) -> bool {
        if !self.state.can_drill_up() {
            return false;
        }
        self.state.trail.pop();
        self.state.drill_context = None;
        self.notify_up();
        true
    }

    /// Truncate the trail to `index + 1` entries in one step.
    ///
    /// Only indices strictly above the current level are accepted; anything
    /// else leaves the state untouched and returns `false`.
    pub fn jump_to_level(&mut self, index: usize) -> bool {
        if index >= self.state.level() {
            return false;
        }
        self.state.trail.truncate(index + 1);
        self.state.drill_context = None;
        self.notify_up();
        true
    }

    /// Return to the root level.
    pub fn reset(&mut self) -> bool {
        self.jump_to_level(0)
    }

    /// Flip fullscreen mode, returning the new value.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.state.fullscreen = !self.state.fullscreen;
        self.state.fullscreen
    }

    /// Render arguments for the current level.
    pub fn level_view<F>(&self, on_drill_down: F) -> LevelView<F> {
        LevelView {
            level: self.state.level(),
            data: self.state.drill_context.clone(),
            on_drill_down,
        }
    }

    fn notify_up(&self) {
        let level = self.state.level();
        tracing::debug!(level, "drill up");
        if let Some(hook) = &self.on_drill_up {
            hook(level);
        }
    }
}

impl std::fmt::Debug for DrillNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrillNavigator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
