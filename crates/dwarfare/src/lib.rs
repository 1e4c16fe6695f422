mod app;

use anyhow::Result;
use dwarven::Lifecycle;
use dwarven_sdl2::{SdlContext, SdlInitInfo};

pub use app::DwarfareApp;

/// Default integer scaling factor for the SDL window.
pub const SCREEN_SCALE: u32 = 4;
/// Largest scale accepted on the command line.
pub const MAX_SCALE: u32 = 16;

pub fn run(scale: u32) -> Result<()> {
    let mut lifecycle = Lifecycle::with_app(DwarfareApp::default());
    let init_info = SdlInitInfo::builder()
        .scale(scale)
        .title(lifecycle.title())
        .build();
    SdlContext::run(init_info, &mut lifecycle)?;
    Ok(())
}

/// Parse the optional scale argument. `None` means it was not an integer
/// in `1..=MAX_SCALE`.
pub fn parse_scale(arg: Option<&str>) -> Option<u32> {
    match arg {
        None => Some(SCREEN_SCALE),
        Some(s) => s.parse().ok().filter(|scale| (1..=MAX_SCALE).contains(scale)),
    }
}
