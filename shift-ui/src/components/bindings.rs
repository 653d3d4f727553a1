//! Button-to-action bindings.
//!
//! Each bound element triggers exactly one [`WizardAction`]. Binding an
//! element again replaces its previous action, and the [`Subscription`]
//! returned for the old binding goes stale: unbinding with it does nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ids;

/// What a wizard button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardAction {
    NextToTime,
    BackToCalendar,
    Submit,
    FinalSubmit,
    CancelSubmit,
}

/// Handle for one binding, used to remove it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    element: String,
    id: u64,
}

impl Subscription {
    pub fn element(&self) -> &str {
        &self.element
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionBindings {
    next_id: u64,
    bindings: HashMap<String, (u64, WizardAction)>,
}

impl ActionBindings {
    /// An empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard wizard buttons bound to their actions.
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();
        for (element, action) in [
            (ids::NEXT_TO_TIME_BTN, WizardAction::NextToTime),
            (ids::BACK_TO_CALENDAR_BTN, WizardAction::BackToCalendar),
            (ids::SUBMIT_BTN, WizardAction::Submit),
            (ids::FINAL_SUBMIT, WizardAction::FinalSubmit),
            (ids::CANCEL_SUBMIT, WizardAction::CancelSubmit),
        ] {
            bindings.bind(element, action);
        }
        bindings
    }

    /// Binds `element` to `action`, replacing any earlier binding.
    pub fn bind(
        &mut self,
        element: &str,
        action: WizardAction,
    ) -> Subscription {
        self.next_id += 1;
        let id = self.next_id;
        self.bindings.insert(element.to_string(), (id, action));
        Subscription {
            element: element.to_string(),
            id,
        }
    }

    /// Removes the binding made by `subscription`. Returns `false` if it
    /// was already removed or has since been replaced.
    pub fn unbind(
        &mut self,
        subscription: &Subscription,
    ) -> bool {
        match self.bindings.get(&subscription.element) {
            Some((id, _)) if *id == subscription.id => {
                self.bindings.remove(&subscription.element);
                true
            }
            _ => false,
        }
    }

    pub fn resolve(
        &self,
        element: &str,
    ) -> Option<WizardAction> {
        self.bindings.get(element).map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
