//! Dashboard shell
//!
//! Owns the active view, the sidebar overlay flag and the one mounted panel.

use super::header::HeaderView;
use super::view::DashboardView;
use crate::auth::User;
use crate::i18n::LocalizationStore;
use crate::location::LocationData;
use crate::panels::{PanelContext, PanelState, ScopeGuard};
use std::rc::Rc;

/// Screen class the shell is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Sidebar is an overlay toggled from the header
    Mobile,
    /// Sidebar is always visible
    #[default]
    Desktop,
}

/// Panel currently on screen, with the guard bounding its deferred work
struct Mounted {
    state: PanelState,
    _guard: ScopeGuard,
}

pub struct DashboardShell {
    active_view: DashboardView,
    sidebar_open: bool,
    layout: Layout,
    context: PanelContext,
    mounted: Mounted,
}

impl DashboardShell {
    /// A shell showing the overview panel
    pub fn new(user: Option<User>, i18n: Rc<LocalizationStore>) -> Self {
        let context = PanelContext::new(i18n).with_user(user);
        let mounted = Self::mount(DashboardView::default(), &context);
        Self {
            active_view: DashboardView::default(),
            sidebar_open: false,
            layout: Layout::default(),
            context,
            mounted,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    fn mount(view: DashboardView, context: &PanelContext) -> Mounted {
        let guard = ScopeGuard::new();
        Mounted {
            state: PanelState::mount(view, context, guard.scope()),
            _guard: guard,
        }
    }

    pub fn active_view(&self) -> DashboardView {
        self.active_view
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Whether the sidebar is on screen
    pub fn sidebar_visible(&self) -> bool {
        match self.layout {
            Layout::Desktop => true,
            Layout::Mobile => self.sidebar_open,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn user(&self) -> Option<&User> {
        self.context.user.as_ref()
    }

    pub fn header(&self) -> Option<HeaderView> {
        self.context.user.as_ref().map(HeaderView::for_user)
    }

    pub fn i18n(&self) -> &Rc<LocalizationStore> {
        &self.context.i18n
    }

    pub fn panel(&self) -> &PanelState {
        &self.mounted.state
    }

    pub fn panel_mut(&mut self) -> &mut PanelState {
        &mut self.mounted.state
    }

    /// Record the signed-in user
    ///
    /// When the user actually changes, an identity-aware panel on screen is
    /// remounted so it picks up the new identity. Returns whether it changed.
    pub fn set_user(&mut self, user: Option<User>) -> bool {
        if self.context.user == user {
            return false;
        }
        self.context.user = user;
        if self.active_view.needs_identity() {
            self.mounted = Self::mount(self.active_view, &self.context);
        }
        true
    }

    /// Remember a resolved location for panels that can use it
    pub fn set_location(&mut self, location: Option<LocationData>) {
        self.context.location = location;
    }

    /// Show `view`, discarding the previous panel and all its state
    ///
    /// Selecting the active view again also remounts it.
    pub fn set_active_view(&mut self, view: DashboardView) {
        tracing::debug!(from = %self.active_view, to = %view, "Switching dashboard view");
        self.mounted = Self::mount(view, &self.context);
        self.active_view = view;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Navigation entry clicked: switch and close the overlay in one step
    pub fn select_from_sidebar(&mut self, view: DashboardView) {
        self.set_active_view(view);
        self.sidebar_open = false;
    }

    /// Header "Profile" menu entry
    pub fn open_profile(&mut self) {
        self.set_active_view(DashboardView::Profile);
    }

    /// Header "Settings" menu entry
    pub fn open_settings(&mut self) {
        self.set_active_view(DashboardView::Profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Immediate;
    use crate::storage::MemoryPreferences;

    fn shell() -> DashboardShell {
        let i18n = Rc::new(LocalizationStore::restore(Rc::new(MemoryPreferences::new())));
        DashboardShell::new(Some(User::new("u1", "asha@example.com")), i18n)
    }

    #[test]
    fn test_starts_on_overview() {
        let shell = shell();
        assert_eq!(shell.active_view(), DashboardView::Overview);
        assert!(matches!(shell.panel(), PanelState::Overview(_)));
        assert!(!shell.sidebar_open());
    }

    #[test]
    fn test_every_view_mounts_its_panel() {
        let mut shell = shell();
        for view in DashboardView::ALL {
            shell.set_active_view(view);
            assert_eq!(shell.active_view(), view);
            assert_eq!(shell.panel().view(), view);
        }
    }

    #[test]
    fn test_switching_away_resets_panel_state() {
        let mut shell = shell();
        shell.set_active_view(DashboardView::DiseaseLookup);
        if let PanelState::DiseaseLookup(panel) = shell.panel_mut() {
            panel.set_query("asthma");
        }

        shell.set_active_view(DashboardView::Overview);
        shell.set_active_view(DashboardView::DiseaseLookup);
        match shell.panel() {
            PanelState::DiseaseLookup(panel) => assert_eq!(panel.query(), ""),
            _ => panic!("expected disease lookup"),
        }
    }

    #[tokio::test]
    async fn test_switch_kills_pending_analysis() {
        let mut shell = shell();
        shell.set_active_view(DashboardView::NutritionTracker);
        let pending = match shell.panel_mut() {
            PanelState::NutritionTracker(panel) => panel.upload_image("meal.jpg"),
            _ => panic!("expected nutrition tracker"),
        };

        shell.set_active_view(DashboardView::Community);
        assert!(!pending.run(&Immediate).await);
    }

    #[test]
    fn test_sidebar_selection_is_atomic() {
        let mut shell = shell().with_layout(Layout::Mobile);
        shell.toggle_sidebar();
        assert!(shell.sidebar_visible());

        shell.select_from_sidebar(DashboardView::Community);
        assert_eq!(shell.active_view(), DashboardView::Community);
        assert!(!shell.sidebar_open());
        assert!(!shell.sidebar_visible());
    }

    #[test]
    fn test_desktop_sidebar_always_visible() {
        let mut shell = shell();
        assert!(shell.sidebar_visible());
        shell.close_sidebar();
        assert!(shell.sidebar_visible());
    }

    #[test]
    fn test_same_user_keeps_profile_edits() {
        let mut shell = shell();
        shell.open_profile();
        if let PanelState::Profile(panel) = shell.panel_mut() {
            panel.data_mut().phone = "+91 98765 43210".into();
        }

        assert!(!shell.set_user(Some(User::new("u1", "asha@example.com"))));
        match shell.panel() {
            PanelState::Profile(panel) => assert_eq!(panel.data().phone, "+91 98765 43210"),
            _ => panic!("expected profile"),
        }
    }

    #[test]
    fn test_new_user_remounts_profile() {
        let mut shell = shell();
        shell.open_profile();
        if let PanelState::Profile(panel) = shell.panel_mut() {
            panel.data_mut().phone = "+91 98765 43210".into();
        }

        assert!(shell.set_user(Some(User::new("u2", "ravi@example.com"))));
        match shell.panel() {
            PanelState::Profile(panel) => {
                assert_eq!(panel.email(), "ravi@example.com");
                assert_eq!(panel.data().phone, "");
            }
            _ => panic!("expected profile"),
        }
    }

    #[test]
    fn test_header_menu_routes_to_profile() {
        let mut shell = shell();
        shell.open_settings();
        assert_eq!(shell.active_view(), DashboardView::Profile);

        shell.set_active_view(DashboardView::Overview);
        shell.open_profile();
        assert!(matches!(shell.panel(), PanelState::Profile(_)));
        assert_eq!(shell.header().unwrap().initials, "AS");
    }
}
