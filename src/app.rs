use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Fullscreen, WindowBuilder};

use crate::driver::{MouseWatch, SaverConfig, SaverDriver};
use crate::error::{BackendError, Result};

/// Opens a borderless full-screen window and runs the saver until the
/// user moves the mouse or closes the window.
///
/// The driver paces itself: each step returns the pause to observe
/// before the next quantum, and the event loop waits until that
/// deadline before requesting the next redraw. Input events are
/// observed between quanta, never mid-segment.
///
/// # Errors
///
/// Returns an error if the window, the event loop, or the framebuffer
/// cannot be created, or if presenting a frame fails.
pub fn run() -> Result<()> {
    let event_loop = EventLoop::new().map_err(BackendError::from)?;
    let window = WindowBuilder::new()
        .with_title("girandola")
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .build(&event_loop)
        .map_err(BackendError::from)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels =
        Pixels::new(size.width, size.height, surface_texture).map_err(BackendError::from)?;

    let config = SaverConfig::for_display(size.width, size.height);
    let mut driver = SaverDriver::new(config, StdRng::from_os_rng())?;
    let mut watch = MouseWatch::new();
    let mut next_step = Instant::now();
    let mut failure: Option<BackendError> = None;

    info!(width = size.width, height = size.height, "entering event loop");

    {
        let failure = &mut failure;
        event_loop
            .run(move |event, window_target| {
                window_target.set_control_flow(ControlFlow::WaitUntil(next_step));
                match event {
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => {
                            info!("close requested, leaving");
                            window_target.exit();
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            if watch.moved((position.x, position.y)) {
                                info!("cursor moved, leaving");
                                window_target.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            if Instant::now() >= next_step {
                                let pause = driver.step();
                                next_step = Instant::now() + pause;
                                window_target.set_control_flow(ControlFlow::WaitUntil(next_step));
                            }
                            pixels.frame_mut().copy_from_slice(driver.frame().data());
                            if let Err(err) = pixels.render() {
                                error!(%err, "presenting the frame failed");
                                *failure = Some(err.into());
                                window_target.exit();
                            }
                        }
                        _ => {}
                    },
                    Event::AboutToWait => {
                        if Instant::now() >= next_step {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .map_err(BackendError::from)?;
    }

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
