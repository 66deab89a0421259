//! NAPI bindings for the sidebar controller and its store.

use crate::types::{
    ClickEvent, ClickIntent, DropResult, Group, HttpMethod, Mock, Notice, SidebarEntry,
    SidebarView,
};
use mimic_core::config::parser::parse_config;
use mimic_core::config::{SidebarConfig, Snapshot};
use mimic_core::matching::MockRequest;
use mimic_core::sidebar::{ClickButton, DropTargetId, Modifiers, SidebarController};
use mimic_core::store::MockCollectionStore;
use mimic_core::Error as CoreError;
use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

struct SidebarState {
    store: MockCollectionStore,
    controller: SidebarController,
}

/// Convert a core failure into a JS error
fn core_error(err: impl Into<CoreError>) -> Error {
    Error::from_reason(err.into().to_string())
}

/// Read a snapshot file (YAML, JSON or JSONC) and return it as JSON text
/// accepted by the `Sidebar` constructor.
#[napi]
pub async fn load_snapshot(path: String) -> Result<String> {
    let snapshot = Snapshot::load(&path)
        .await
        .map_err(core_error)?;
    serde_json::to_string(&snapshot).map_err(|e| Error::from_reason(e.to_string()))
}

/// Mocks sidebar class
#[napi]
pub struct Sidebar {
    inner: Arc<Mutex<SidebarState>>,
}

#[napi]
impl Sidebar {
    /// Create a sidebar over a new store
    ///
    /// @param snapshot - Optional store snapshot as JSON
    /// @param config - Optional sidebar settings as JSON or JSONC
    #[napi(constructor)]
    pub fn new(snapshot: Option<String>, config: Option<String>) -> Result<Self> {
        let store = match snapshot {
            Some(content) => {
                let snapshot = Snapshot::parse(&content, "snapshot.json")
                    .map_err(core_error)?;
                MockCollectionStore::from_snapshot(snapshot)
                    .map_err(core_error)?
            }
            None => MockCollectionStore::new(),
        };
        let config: SidebarConfig = match config {
            Some(content) => parse_config(&content, "sidebar.jsonc")
                .map_err(core_error)?,
            None => SidebarConfig::default(),
        };
        debug!(
            mocks = store.mocks().len(),
            groups = store.groups().len(),
            "Sidebar created"
        );

        Ok(Self {
            inner: Arc::new(Mutex::new(SidebarState {
                store,
                controller: SidebarController::new(config),
            })),
        })
    }

    fn state(&self) -> Result<MutexGuard<'_, SidebarState>> {
        self.inner
            .lock()
            .map_err(|_| Error::from_reason("Sidebar state is poisoned"))
    }

    /// Subscribe to store changes and render once
    #[napi]
    pub fn activate(&self) -> Result<()> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        controller.activate(store);
        Ok(())
    }

    #[napi]
    pub fn deactivate(&self) -> Result<()> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        controller.deactivate(store);
        Ok(())
    }

    #[napi]
    pub fn is_active(&self) -> Result<bool> {
        Ok(self.state()?.controller.is_active())
    }

    /// Run renders queued by store changes. Call once per event-loop tick.
    #[napi]
    pub fn run_tick(&self) -> Result<u32> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        Ok(controller.run_tick(store) as u32)
    }

    /// Last rendered view
    #[napi]
    pub fn view(&self) -> Result<SidebarView> {
        Ok(SidebarView::from(self.state()?.controller.view()))
    }

    #[napi]
    pub fn mocks(&self) -> Result<Vec<Mock>> {
        Ok(self.state()?.store.mocks().iter().map(Mock::from).collect())
    }

    #[napi]
    pub fn groups(&self) -> Result<Vec<Group>> {
        Ok(self.state()?.store.groups().iter().map(Group::from).collect())
    }

    /// Active mocks answering a request, in store order
    #[napi]
    pub fn match_request(&self, method: HttpMethod, url: String) -> Result<Vec<Mock>> {
        let state = self.state()?;
        let request = MockRequest::new(method.into(), url);
        Ok(state
            .store
            .get_matching_mocks(&request)
            .into_iter()
            .map(Mock::from)
            .collect())
    }

    #[napi]
    pub fn set_search_term(&self, term: String) -> Result<()> {
        self.state()?.controller.set_search_term(term);
        Ok(())
    }

    /// Hide inactive mocks from the sidebar
    #[napi]
    pub fn set_hide_inactive(&self, hide: bool) -> Result<()> {
        let mut state = self.state()?;
        if hide {
            state.controller.set_custom_filter(|mock| mock.is_active);
        } else {
            state.controller.clear_custom_filter();
        }
        Ok(())
    }

    #[napi]
    pub fn click(&self, event: ClickEvent) -> Result<ClickIntent> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        let button = if event.secondary.unwrap_or(false) {
            ClickButton::Secondary
        } else {
            ClickButton::Primary
        };
        let modifiers = Modifiers {
            shift: event.shift_key.unwrap_or(false),
            meta: event.meta_key.unwrap_or(false),
            ctrl: event.ctrl_key.unwrap_or(false),
        };
        let intent = controller.click(store, event.entry.into(), button, modifiers);
        Ok(intent.into())
    }

    #[napi]
    pub fn selection(&self) -> Result<Vec<SidebarEntry>> {
        Ok(self
            .state()?
            .controller
            .selection()
            .entries()
            .iter()
            .map(SidebarEntry::from)
            .collect())
    }

    #[napi]
    pub fn clear_selection(&self) -> Result<()> {
        self.state()?.controller.clear_selection();
        Ok(())
    }

    /// Group the selected mocks under a new group
    #[napi]
    pub fn group_selection(&self) -> Result<Group> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        let group = controller
            .group_selection(store)
            .map_err(core_error)?;
        Ok(Group::from(&group))
    }

    #[napi]
    pub fn toggle_mock(&self, mock_id: String) -> Result<bool> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        controller
            .toggle_mock(store, &mock_id)
            .map_err(core_error)
    }

    #[napi]
    pub fn toggle_group(&self, group_id: String) -> Result<bool> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        controller
            .toggle_group(store, &group_id)
            .map_err(core_error)
    }

    /// Expand or collapse a group, returning whether it is now open
    #[napi]
    pub fn toggle_expanded(&self, group_id: String) -> Result<bool> {
        Ok(self.state()?.controller.toggle_expanded(&group_id))
    }

    #[napi]
    pub fn begin_drag(&self, mock_id: String) -> Result<()> {
        self.state()?.controller.begin_drag(mock_id);
        Ok(())
    }

    /// Record the group under the pointer; `None` means the bare sidebar
    #[napi]
    pub fn hover(&self, group_id: Option<String>) -> Result<()> {
        let target = match group_id {
            Some(id) => DropTargetId::Group(id),
            None => DropTargetId::Sidebar,
        };
        self.state()?.controller.hover(Some(target));
        Ok(())
    }

    #[napi]
    pub fn cancel_drag(&self) -> Result<()> {
        self.state()?.controller.cancel_drag();
        Ok(())
    }

    #[napi]
    pub fn drop_on_group(&self, group_id: String) -> Result<DropResult> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        let outcome = controller
            .drop_on_group(store, &group_id)
            .map_err(core_error)?;
        Ok(outcome.into())
    }

    #[napi]
    pub fn drop_on_sidebar(&self) -> Result<DropResult> {
        let mut state = self.state()?;
        let SidebarState { store, controller } = &mut *state;
        let outcome = controller
            .drop_on_sidebar(store)
            .map_err(core_error)?;
        Ok(outcome.into())
    }

    #[napi]
    pub fn set_width(&self, width: u32) -> Result<u32> {
        Ok(self.state()?.controller.set_width(width))
    }

    /// Notices raised since the last call
    #[napi]
    pub fn take_notices(&self) -> Result<Vec<Notice>> {
        Ok(self
            .state()?
            .controller
            .take_notices()
            .into_iter()
            .map(Notice::from)
            .collect())
    }
}
