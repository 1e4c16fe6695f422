use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::{Event as SdlEvent, WindowEvent};
use sdl2::keyboard::Keycode;
use typed_builder::TypedBuilder;

pub use dwarven;
pub use sdl2;

use dwarven::dwarven_common::Color;
use dwarven::{Event, Key, Lifecycle, UpdateResult, WindowHandle};

/// ~60 FPS.
pub const DEFAULT_FRAME_TIME: Duration = Duration::from_micros(16_667);

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    #[builder(default = 320)]
    pub width: u32,
    #[builder(default = 180)]
    pub height: u32,
    #[builder(default = 4)]
    pub scale: u32,
    pub title: String,
    #[builder(default)]
    pub clear_color: Color,
    #[builder(default = DEFAULT_FRAME_TIME)]
    pub frame_time: Duration,
}

/// Sleeps away whatever is left of the frame budget.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        FramePacer {
            target,
            last_frame: Instant::now(),
        }
    }

    /// Time still to wait at `now` for the current frame to last `target`.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.target.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_frame = now;
    }

    pub fn wait(&mut self) {
        if let Some(rest) = self.remaining(Instant::now()) {
            std::thread::sleep(rest);
        }
        self.mark(Instant::now());
    }
}

pub struct SdlContext;

/// Window size in screen pixels, or an error when scaling overflows.
pub fn window_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(anyhow!(
            "window {}x{} at scale {} is too large",
            width,
            height,
            scale
        )),
    }
}

impl SdlContext {
    /// Open a window and drive `lifecycle` until it answers
    /// [`UpdateResult::StopRunning`], then tear it down.
    ///
    /// Once `init` has succeeded, `kill` runs even when the loop fails.
    pub fn run(sdl_init_info: SdlInitInfo, lifecycle: &mut Lifecycle) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            clear_color,
            frame_time,
        } = sdl_init_info;
        let (window_width, window_height) = window_size(width, height, scale)?;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, window_width, window_height)
            .position_centered()
            .build()?;
        let window_handle = WindowHandle::from(window.id());
        let mut canvas = window.into_canvas().present_vsync().build()?;
        let (r, g, b) = clear_color.rgb();
        canvas.set_draw_color(sdl2::pixels::Color::RGB(r, g, b));

        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut pacer = FramePacer::new(frame_time);

        log::info!("Window '{}' open ({}x{} @{}x)", title, width, height, scale);
        drive(lifecycle, |lifecycle| loop {
            dispatch(lifecycle, event_pump.poll_iter(), window_handle)?;

            if lifecycle.update()? == UpdateResult::StopRunning {
                return Ok(());
            }

            canvas.clear();
            canvas.present();
            pacer.wait();
        })
    }
}

/// `init`, run `body`, then `kill` whether or not `body` failed.
pub fn drive<F>(lifecycle: &mut Lifecycle, body: F) -> Result<()>
where
    F: FnOnce(&mut Lifecycle) -> Result<()>,
{
    lifecycle.init()?;
    let result = body(lifecycle);
    let killed = lifecycle.kill();
    result?;
    killed?;
    Ok(())
}

/// Forward one batch of SDL events to the lifecycle.
pub fn dispatch(
    lifecycle: &mut Lifecycle,
    events: impl IntoIterator<Item = SdlEvent>,
    main_window: WindowHandle,
) -> Result<()> {
    for event in events {
        match event {
            SdlEvent::Quit { .. } => lifecycle.on_window_close(main_window)?,
            SdlEvent::Window {
                window_id,
                win_event: WindowEvent::Close,
                ..
            } => lifecycle.on_window_close(WindowHandle::from(window_id))?,
            SdlEvent::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => lifecycle.receive_event(&Event::key_down(map_keycode(keycode)))?,
            _ => {}
        }
    }
    Ok(())
}

pub fn map_keycode(keycode: Keycode) -> Key {
    Key(keycode as i32 as u32)
}
