//! Helix Drawer - slide-in drawer overlays for Dioxus.
//!
//! A drawer is a panel that slides in from one edge of the window over a
//! dimming mask. While open it traps keyboard focus between two sentinels,
//! locks page scrolling, and pushes the drawer it is nested in aside.
//!
//! ## Quick Start
//!
//! ```no_run
//! use helix_drawer::DrawerAppConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = DrawerAppConfig::load_default()?;
//!     helix_drawer::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! All drawer behavior lives in the headless [`drawer`] module: a
//! [`drawer::DrawerController`] per instance, driven by option changes, key
//! and pointer events, and animation completion reports, and answering with
//! a render layout plus a list of effects. The [`components::Drawer`]
//! component only translates between Dioxus and the controller:
//!
//! 1. Props are fed to the controller from an effect
//! 2. The controller's layout is rendered verbatim
//! 3. Effects become callbacks and focus scripts
//! 4. Nested drawers find their parent through Dioxus context

use anyhow::Result;

// Public library modules
pub mod components;
pub mod config;
pub mod drawer;
pub mod hooks;
pub mod keybindings;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use app::DemoSettings;
pub use components::{CloseEvent, Drawer};
pub use config::DrawerAppConfig;
pub use drawer::{DrawerController, DrawerOptions, Placement, PushConfig};

/// Stylesheet for drawers and the demo page.
pub const DRAWER_CSS: &str = include_str!("../assets/drawer.css");

/// Launch the demo application.
///
/// Every drawer of the demo starts from the `[drawer]` section of `config`.
pub fn launch(config: DrawerAppConfig) -> Result<()> {
    let settings = DemoSettings {
        base: config.drawer.to_options(),
    };
    log::info!(
        "launching drawer demo (placement={}, mask={})",
        settings.base.placement,
        settings.base.mask
    );

    let custom_head = format!("<style>{DRAWER_CSS}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(settings)
        .launch(app::App);

    Ok(())
}
