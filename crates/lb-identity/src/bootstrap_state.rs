use lb_core::IdentityRecord;

/// States of the identity bootstrap workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    Start,
    Reconciling,
    NeedProvision,
    Menu,
    Creating,
    Binding,
    Ready(IdentityRecord),
    Quit,
}

impl BootstrapState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Quit)
    }
}

/// How a bootstrap run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Identity resolved and backed by an existing table.
    Ready(IdentityRecord),
    /// The user chose to quit from the menu.
    Quit,
}
