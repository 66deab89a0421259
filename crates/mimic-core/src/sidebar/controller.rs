//! Sidebar controller composing selection, grouping, and drag and drop.
//!
//! This module provides `SidebarController`, which routes user gestures to the
//! engines, keeps the local view state (filters, expanded groups, width), and
//! re-renders one tick after every store notification.

use crate::config::settings::SidebarConfig;
use crate::error::StoreError;
use crate::sidebar::drag_drop::{
    DragDropCoordinator, DragState, DropOutcome, DropTarget, DropTargetId, GroupDropTarget,
    SidebarDropTarget,
};
use crate::sidebar::flatten::{FlattenedOrder, SidebarFilter};
use crate::sidebar::grouping::create_group_from_selection;
use crate::sidebar::notify::{Notice, Notifications};
use crate::sidebar::scheduler::RenderScheduler;
use crate::sidebar::selection::{ClickButton, ClickIntent, Modifiers, SelectionEngine, SelectionList};
use crate::sidebar::view::{ExpansionState, SidebarView};
use crate::store::{EventKind, MockCollectionStore, SubscriptionId};
use crate::types::entry::SidebarEntry;
use crate::types::group::{Group, GroupId};
use crate::types::mock::{Mock, MockId};
use tracing::{debug, trace};

/// Controller behind the mocks sidebar.
///
/// The store is not owned: every operation that reads or mutates it takes it
/// by reference. Call [`activate`](Self::activate) once the sidebar is shown
/// and [`deactivate`](Self::deactivate) before it is torn down.
#[derive(Debug)]
pub struct SidebarController {
    config: SidebarConfig,
    selection: SelectionEngine,
    expansion: ExpansionState,
    filter: SidebarFilter,
    drag: DragDropCoordinator,
    scheduler: RenderScheduler,
    notifications: Notifications,
    subscriptions: Vec<SubscriptionId>,
    active: bool,
    width: u32,
    view: SidebarView,
    render_count: u64,
}

impl SidebarController {
    /// Create an inactive controller
    pub fn new(config: SidebarConfig) -> Self {
        let width = config.clamp_width(config.sidebar_width);
        Self {
            config,
            selection: SelectionEngine::new(),
            expansion: ExpansionState::default(),
            filter: SidebarFilter::new(),
            drag: DragDropCoordinator::new(),
            scheduler: RenderScheduler::new(),
            notifications: Notifications::default(),
            subscriptions: Vec::new(),
            active: false,
            width,
            view: SidebarView::default(),
            render_count: 0,
        }
    }

    /// Settings the controller was created with
    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    // Lifecycle

    /// Subscribe to store changes and render once.
    pub fn activate(&mut self, store: &mut MockCollectionStore) {
        if self.active {
            return;
        }
        for kind in [EventKind::UpdateMock, EventKind::UpdateGroup] {
            let handle = self.scheduler.handle();
            let id = store.on(kind, move |event| handle.schedule(event.kind()));
            self.subscriptions.push(id);
        }
        self.active = true;
        debug!("Sidebar activated");
        self.render(store);
    }

    /// Unsubscribe from the store and drop renders still queued.
    pub fn deactivate(&mut self, store: &mut MockCollectionStore) {
        for id in self.subscriptions.drain(..) {
            store.off(id);
        }
        let dropped = self.scheduler.take_due().len();
        self.active = false;
        trace!(dropped, "Dropped queued renders");
        debug!("Sidebar deactivated");
    }

    /// Check if the controller is subscribed to the store
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run the renders queued since the last tick. Returns how many ran.
    pub fn run_tick(&mut self, store: &MockCollectionStore) -> usize {
        let mut rendered = 0;
        for request in self.scheduler.take_due() {
            if !self.active {
                trace!(cause = %request.cause, "Skipping render: sidebar inactive");
                continue;
            }
            self.render(store);
            rendered += 1;
        }
        rendered
    }

    fn render(&mut self, store: &MockCollectionStore) {
        self.view = self.build_view(store);
        self.render_count += 1;
    }

    /// Last rendered view
    pub fn view(&self) -> &SidebarView {
        &self.view
    }

    /// Number of renders performed so far
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// View of the current store state, without recording a render
    pub fn build_view(&self, store: &MockCollectionStore) -> SidebarView {
        SidebarView::build(
            store,
            &self.filter,
            self.selection.selection(),
            &self.expansion,
            self.width,
        )
    }

    // Filters

    /// Current search term
    pub fn search_term(&self) -> &str {
        self.filter.search_term()
    }

    /// Set the url search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    /// Install a predicate every shown mock must pass
    pub fn set_custom_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&Mock) -> bool + Send + 'static,
    {
        self.filter.set_custom(predicate);
    }

    /// Remove the custom predicate
    pub fn clear_custom_filter(&mut self) {
        self.filter.clear_custom();
    }

    /// Order used for range selection under the current filters
    pub fn flattened_order(&self, store: &MockCollectionStore) -> FlattenedOrder {
        FlattenedOrder::build(store, &self.filter)
    }

    // Selection

    /// Current selection
    pub fn selection(&self) -> &SelectionList {
        self.selection.selection()
    }

    /// First selected group, if any
    pub fn selected_group(&self) -> Option<&GroupId> {
        self.selection.selected_group()
    }

    /// Apply a click on a mock or group row.
    pub fn click(
        &mut self,
        store: &MockCollectionStore,
        entry: SidebarEntry,
        button: ClickButton,
        modifiers: Modifiers,
    ) -> ClickIntent {
        let filter = &self.filter;
        let intent = self
            .selection
            .click(entry, button, modifiers, || FlattenedOrder::build(store, filter));
        trace!(?intent, selected = self.selection.selection().len(), "Click");
        intent
    }

    /// Deselect everything
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // Groups

    /// Check if a group is expanded
    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expansion.is_open(group_id)
    }

    /// Flip a group's expanded flag. Local state only; the store is not touched.
    pub fn toggle_expanded(&mut self, group_id: &str) -> bool {
        self.expansion.toggle(group_id)
    }

    /// Expand a group
    pub fn expand_group(&mut self, group_id: impl Into<GroupId>) {
        self.expansion.expand(group_id);
    }

    /// Group the selected mocks under a new group named from the config.
    ///
    /// The new group is expanded and the selection becomes its first member.
    /// A rejected mutation is returned and also raised as a notice.
    pub fn group_selection(&mut self, store: &mut MockCollectionStore) -> Result<Group, StoreError> {
        let selection = self.selection.selection().clone();
        let outcome =
            create_group_from_selection(store, &selection, &self.config.default_group_name)
                .map_err(|err| self.fail("Could not group mocks", err))?;

        let group = outcome.group;
        self.notifications.info(format!(
            "Created group \"{}\" with {} mocks",
            group.name,
            group.mocks.len()
        ));
        self.expansion.expand(group.id.clone());
        match group.first_mock() {
            Some(first) => self
                .selection
                .select_single(SidebarEntry::Mock(first.clone()), false),
            None => self.selection.clear(),
        }
        Ok(group)
    }

    // Store toggles

    /// Flip a mock's active flag, raising a notice on failure
    pub fn toggle_mock(
        &mut self,
        store: &mut MockCollectionStore,
        mock_id: &str,
    ) -> Result<bool, StoreError> {
        store
            .toggle_mock(mock_id)
            .map_err(|err| self.fail("Could not toggle mock", err))
    }

    /// Flip a group's active flag, raising a notice on failure
    pub fn toggle_group(
        &mut self,
        store: &mut MockCollectionStore,
        group_id: &str,
    ) -> Result<bool, StoreError> {
        store
            .toggle_group(group_id)
            .map_err(|err| self.fail("Could not toggle group", err))
    }

    // Drag and drop

    /// Current drag state
    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Start dragging a mock
    pub fn begin_drag(&mut self, mock_id: impl Into<MockId>) {
        self.drag.begin_drag(mock_id);
    }

    /// Record the drop target under the pointer
    pub fn hover(&mut self, target: Option<DropTargetId>) {
        self.drag.hover(target);
    }

    /// Check if the pointer is over a target
    pub fn is_over(&self, target: &DropTargetId) -> bool {
        self.drag.is_over(target)
    }

    /// Abandon the current drag
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drop onto a group header nested inside the sidebar.
    pub fn drop_on_group(
        &mut self,
        store: &mut MockCollectionStore,
        group_id: &str,
    ) -> Result<DropOutcome, StoreError> {
        let group = GroupDropTarget::new(group_id);
        let targets: [&dyn DropTarget; 2] = [&group, &SidebarDropTarget];
        self.drag
            .drop_on(store, &targets)
            .map_err(|err| self.fail("Could not move mock", err))
    }

    /// Drop onto the bare sidebar surface.
    pub fn drop_on_sidebar(
        &mut self,
        store: &mut MockCollectionStore,
    ) -> Result<DropOutcome, StoreError> {
        let targets: [&dyn DropTarget; 1] = [&SidebarDropTarget];
        self.drag
            .drop_on(store, &targets)
            .map_err(|err| self.fail("Could not ungroup mock", err))
    }

    // Width

    /// Sidebar width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the sidebar width, clamped to the configured minimum
    pub fn set_width(&mut self, width: u32) -> u32 {
        self.width = self.config.clamp_width(width);
        self.width
    }

    // Notices

    /// Pending notices
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Remove and return pending notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notifications.drain()
    }

    fn fail(&mut self, action: &str, err: StoreError) -> StoreError {
        self.notifications.error(format!("{}: {}", action, err));
        err
    }
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new(SidebarConfig::default())
    }
}
