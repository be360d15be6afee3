/// In-call DTMF control menu for noise suppression
use super::dtmf::DtmfDigit;

/// Which leg a control digit acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegTarget {
    /// The leg that pressed the digit
    Own,
    /// The opposite leg of the bridge
    Other,
}

/// Action to take when a control digit is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Set VoiceFocus on the target leg
    SetVoiceFocus { target: LegTarget, enable: bool },
}

/// Control menu item
#[derive(Debug, Clone)]
pub struct ControlMenuItem {
    pub digit: DtmfDigit,
    pub label: String,
    pub action: ControlAction,
}

impl ControlMenuItem {
    pub fn new(digit: DtmfDigit, label: String, action: ControlAction) -> Self {
        Self {
            digit,
            label,
            action,
        }
    }
}

/// Digit-to-action table consulted on every DIGITS_RECEIVED event
#[derive(Debug, Clone, Default)]
pub struct ControlMenu {
    pub items: Vec<ControlMenuItem>,
}

impl ControlMenu {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add menu item, replacing any existing binding for the same digit
    pub fn add_item(&mut self, item: ControlMenuItem) {
        self.items.retain(|existing| existing.digit != item.digit);
        self.items.push(item);
    }

    /// Get menu item by digit
    pub fn get_item(&self, digit: DtmfDigit) -> Option<&ControlMenuItem> {
        self.items.iter().find(|item| item.digit == digit)
    }

    /// Get all bound digits
    pub fn get_available_digits(&self) -> Vec<char> {
        self.items.iter().map(|item| item.digit.to_char()).collect()
    }

    /// 0/1 toggle the caller's own leg, 8/9 the other leg.
    pub fn voice_focus() -> Self {
        ControlMenuBuilder::new()
            .add_item(DtmfDigit::Zero, "Disable own VoiceFocus", LegTarget::Own, false)
            .add_item(DtmfDigit::One, "Enable own VoiceFocus", LegTarget::Own, true)
            .add_item(DtmfDigit::Eight, "Disable other VoiceFocus", LegTarget::Other, false)
            .add_item(DtmfDigit::Nine, "Enable other VoiceFocus", LegTarget::Other, true)
            .build()
    }
}

/// Control menu builder for easy construction
pub struct ControlMenuBuilder {
    menu: ControlMenu,
}

impl ControlMenuBuilder {
    pub fn new() -> Self {
        Self {
            menu: ControlMenu::new(),
        }
    }

    pub fn add_item(mut self, digit: DtmfDigit, label: &str, target: LegTarget, enable: bool) -> Self {
        self.menu.add_item(ControlMenuItem::new(
            digit,
            label.to_string(),
            ControlAction::SetVoiceFocus { target, enable },
        ));
        self
    }

    pub fn build(self) -> ControlMenu {
        self.menu
    }
}

impl Default for ControlMenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}
