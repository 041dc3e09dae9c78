use std::sync::Arc;

use portal_core::repositories::{AccountRepository, MenuDisplaySettingsRepository};
use portal_core::services::{MenuDisplayService, NavigationService, SessionService};

pub type SharedSessions = Arc<SessionService<dyn AccountRepository>>;
pub type SharedNavigation = Arc<NavigationService<dyn MenuDisplaySettingsRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SharedSessions,
    pub navigation: SharedNavigation,
}

impl AppState {
    pub fn new(sessions: SharedSessions, navigation: SharedNavigation) -> Self {
        Self {
            sessions,
            navigation,
        }
    }

    pub fn display(&self) -> &Arc<MenuDisplayService<dyn MenuDisplaySettingsRepository>> {
        self.navigation.display()
    }
}
