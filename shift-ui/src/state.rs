//! Wizard session state.
//!
//! This module holds the in-memory state shared by every handler of one
//! wizard session: the time-card model, the bulk defaults for new cards,
//! which card's time picker is open, and which blocking dialog (if any) is
//! on screen. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use shift_core::{BulkDefaults, TimeCardModel};

/// Kinds of picker modal that can target a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    /// The per-card start/end time picker.
    Card,
}

/// Identifies the open picker and the card it is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalDescriptor {
    pub kind: ModalKind,
    pub index: usize,
}

impl ModalDescriptor {
    pub fn card(index: usize) -> Self {
        Self {
            kind: ModalKind::Card,
            index,
        }
    }
}

/// The blocking dialog currently shown. At most one exists at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    None,
    /// A user-facing alert awaiting dismissal.
    Alert,
    /// The submission confirmation dialog.
    Confirmation,
}

/// Session-wide state passed to every wizard handler.
#[derive(Debug, Clone, Default)]
pub struct WizardContext {
    pub model: TimeCardModel,
    /// Start/end given to each newly generated card.
    pub bulk_defaults: BulkDefaults,
    pub current_modal: Option<ModalDescriptor>,
    pub dialog: DialogState,
}

impl WizardContext {
    pub fn new(bulk_defaults: BulkDefaults) -> Self {
        Self {
            bulk_defaults,
            ..Default::default()
        }
    }

    /// Whether a blocking dialog is open and mutations must wait.
    pub fn is_blocked(&self) -> bool {
        self.dialog != DialogState::None
    }

    /// The card whose picker is open, if the open modal targets a card.
    pub fn modal_card(&self) -> Option<usize> {
        match self.current_modal {
            Some(ModalDescriptor {
                kind: ModalKind::Card,
                index,
            }) => Some(index),
            None => None,
        }
    }
}
