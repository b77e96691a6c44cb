//! Window creation and web view setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use kiosk_webview::{
    BrowsingProfile, ContentProvider, OverlayController, PermissionPolicy, WryPanel,
    WryViewFactory,
};

use super::core::KioskShell;
use super::state::ShellState;

/// Relative path to the bundled assets served over `kiosk://`.
const ASSETS_DIR: &str = "assets";

impl KioskShell {
    /// Create the window, the main view and the keyboard panel.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let cfg = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_transparent(cfg.transparent)
            .with_decorations(cfg.decorations)
            .with_inner_size(LogicalSize::new(f64::from(cfg.width), f64::from(cfg.height)));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut state = ShellState::new(self.build_factory(&window), None);

        let main = &self.config.main_view;
        if let Err(e) = state.open_main_view(&main.start_url, main.width, main.height) {
            tracing::error!("Failed to create main view: {e}");
            return false;
        }

        // The panel is built after the main view so it starts above it.
        if self.config.keyboard.enabled {
            self.attach_keyboard(&mut state, &window);
        }

        self.state = Some(state);
        self.window = Some(window);
        tracing::info!("Window created and web views initialized");
        true
    }

    fn build_factory(&self, window: &Arc<Window>) -> WryViewFactory<Window> {
        let profile_cfg = &self.config.profile;
        let data_dir = profile_cfg
            .data_dir
            .clone()
            .or_else(|| kiosk_platform::profile_dir().ok());
        let profile = BrowsingProfile::new(
            data_dir,
            profile_cfg.devtools,
            profile_cfg.user_agent.clone(),
        );

        let mut factory = WryViewFactory::new(
            Arc::clone(window),
            profile,
            self.sink.clone(),
            PermissionPolicy::new(&self.config.permissions.allowed_hosts),
        );

        let assets_path = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);
        if !assets_path.is_dir() {
            tracing::warn!(
                path = %assets_path.display(),
                "Assets directory not found, kiosk:// URLs will not resolve"
            );
        }
        factory.set_content_provider(ContentProvider::new(assets_path));
        factory
    }

    fn attach_keyboard(&self, state: &mut super::core::WryShellState, window: &Arc<Window>) {
        let kb = &self.config.keyboard;
        let factory = state.factory_mut();
        let content = factory.content_provider().cloned();
        let panel = match WryPanel::new(
            window.as_ref(),
            factory.profile_mut(),
            &kb.panel_url,
            &self.sink,
            content.as_ref(),
        ) {
            Ok(panel) => panel,
            Err(e) => {
                tracing::warn!("Keyboard panel unavailable: {e}");
                return;
            }
        };

        let (width, height) = logical_size(window);
        let initial_height = i32::try_from(kb.initial_height).unwrap_or(i32::MAX);
        state.attach_overlay(OverlayController::new(panel, initial_height, width, height));
    }
}

/// Inner size of the window in logical pixels.
pub(super) fn logical_size(window: &Window) -> (u32, u32) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width.max(0.0) as u32, size.height.max(0.0) as u32)
}
