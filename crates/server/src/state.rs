use multisubs_core::Addon;

/// Shared application state
pub struct AppState {
    addon: Addon,
}

impl AppState {
    pub fn new(addon: Addon) -> Self {
        Self { addon }
    }

    pub fn addon(&self) -> &Addon {
        &self.addon
    }
}
