//! Ordered multi-selection over sidebar entries.
//!
//! The selection keeps insertion order; its first entry is the anchor for
//! shift-click range selection.

use crate::sidebar::flatten::FlattenedOrder;
use crate::types::entry::SidebarEntry;
use crate::types::group::GroupId;
use crate::types::mock::MockId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered, duplicate-free list of selected entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionList {
    entries: Vec<SidebarEntry>,
}

impl SelectionList {
    /// Selected entries in selection order
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Number of selected entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry is selected
    pub fn contains(&self, entry: &SidebarEntry) -> bool {
        self.entries.contains(entry)
    }

    /// First entry added
    pub fn anchor(&self) -> Option<&SidebarEntry> {
        self.entries.first()
    }

    /// Selected mock ids, in selection order
    pub fn mock_ids(&self) -> impl Iterator<Item = &MockId> {
        self.entries.iter().filter_map(SidebarEntry::as_mock_id)
    }

    /// Selected group ids, in selection order
    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> {
        self.entries.iter().filter_map(SidebarEntry::as_group_id)
    }

    /// Append unless already present. Returns whether the entry was added.
    fn push(&mut self, entry: SidebarEntry) -> bool {
        if self.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    fn replace(&mut self, entry: SidebarEntry) {
        self.entries.clear();
        self.entries.push(entry);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Mouse button of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickButton {
    #[default]
    Primary,
    /// Context-menu click
    Secondary,
}

/// Keyboard modifiers held during a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub meta: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        meta: false,
        ctrl: false,
    };

    /// Only shift held
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Cmd on macOS
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    /// Only ctrl held
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    fn additive(&self) -> bool {
        self.meta || self.ctrl
    }
}

/// What a click does to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickIntent {
    /// Selection becomes the clicked entry alone
    Replace,
    /// Clicked entry is appended if absent
    Additive,
    /// Range from the anchor to the clicked entry is added
    Range,
    /// Selection is left as is
    Preserve,
}

/// Decide how a click changes a selection of `selected` entries.
///
/// A context-menu click keeps a multi-selection (more than one entry) intact
/// and otherwise replaces the selection with the clicked entry.
pub fn resolve_click(selected: usize, button: ClickButton, modifiers: Modifiers) -> ClickIntent {
    match button {
        ClickButton::Secondary if selected > 1 => ClickIntent::Preserve,
        ClickButton::Secondary => ClickIntent::Replace,
        ClickButton::Primary if modifiers.shift && selected > 0 => ClickIntent::Range,
        ClickButton::Primary if modifiers.additive() => ClickIntent::Additive,
        ClickButton::Primary => ClickIntent::Replace,
    }
}

/// Result of a range selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Number of entries appended (0 if the whole range was already selected)
    Extended(usize),
    /// Nothing selected, so there is no anchor
    NoAnchor,
    /// The anchor is not in the flattened order (filtered out, or a group)
    AnchorMissing,
    /// The clicked entry is not in the flattened order
    TargetMissing,
}

/// Holds the selection and applies selection gestures to it.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    selection: SelectionList,
}

impl SelectionEngine {
    /// Create an engine with an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection
    pub fn selection(&self) -> &SelectionList {
        &self.selection
    }

    /// Select one entry, alone or in addition to the current selection.
    pub fn select_single(&mut self, entry: SidebarEntry, additive: bool) {
        if additive {
            self.selection.push(entry);
        } else {
            self.selection.replace(entry);
        }
    }

    /// Add every entry between the anchor and `target` (inclusive) to the selection.
    ///
    /// Entries already selected are left where they are; new ones are appended
    /// in flattened order. Misses are reported, not treated as errors.
    pub fn select_range(&mut self, target: &SidebarEntry, order: &FlattenedOrder) -> RangeOutcome {
        let Some(anchor) = self.selection.anchor() else {
            return RangeOutcome::NoAnchor;
        };
        let Some(anchor_index) = order.position(anchor) else {
            debug!(%anchor, "Range selection skipped: anchor not in view");
            return RangeOutcome::AnchorMissing;
        };
        let Some(target_index) = order.position(target) else {
            debug!(%target, "Range selection skipped: target not in view");
            return RangeOutcome::TargetMissing;
        };

        let added = order
            .between(anchor_index, target_index)
            .iter()
            .filter(|entry| self.selection.push((*entry).clone()))
            .count();
        RangeOutcome::Extended(added)
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Apply a click on `entry`.
    ///
    /// `order` is only consulted for range clicks.
    pub fn click<F>(
        &mut self,
        entry: SidebarEntry,
        button: ClickButton,
        modifiers: Modifiers,
        order: F,
    ) -> ClickIntent
    where
        F: FnOnce() -> FlattenedOrder,
    {
        let intent = resolve_click(self.selection.len(), button, modifiers);
        match intent {
            ClickIntent::Replace => self.select_single(entry, false),
            ClickIntent::Additive => self.select_single(entry, true),
            ClickIntent::Range => {
                let outcome = self.select_range(&entry, &order());
                debug!(?outcome, "Range selection");
            }
            ClickIntent::Preserve => {}
        }
        intent
    }

    /// First selected group, if any
    pub fn selected_group(&self) -> Option<&GroupId> {
        self.selection.group_ids().next()
    }
}
