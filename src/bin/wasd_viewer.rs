//! WASD Viewer
//!
//! Run with: `cargo run --bin wasd_viewer [config.json]`
//!
//! Opens an empty window and drives a virtual entity with the keyboard.
//! The entity position, rotation and velocity are shown in the title bar.
//!
//! Controls:
//! - WASD / Arrow keys: Move
//! - Mouse move: Turn (yaw) and look up/down (pitch, used in fly mode)
//! - F: Toggle fly mode
//! - ESC: Exit
//!
//! Set `RUST_LOG=debug` to see controller logging.

use std::error::Error;
use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use wasd_motion_engine::{EntityTransform, SimpleTransform, WasdConfig, WasdControls};

/// Degrees of rotation per pixel of mouse motion
const MOUSE_SENSITIVITY: f32 = 0.15;

/// Pitch limit in degrees
const PITCH_LIMIT: f32 = 89.0;

struct ViewerApp {
    window: Option<Window>,
    controls: WasdControls,
    entity: SimpleTransform,
    start: Instant,
    last_title_update: Instant,
}

impl ViewerApp {
    fn new(config: WasdConfig) -> Self {
        let mut controls = WasdControls::new(config);
        controls.play();
        Self {
            window: None,
            controls,
            entity: SimpleTransform::new().rotated(Vec3::ZERO),
            start: Instant::now(),
            last_title_update: Instant::now(),
        }
    }

    fn toggle_fly(&mut self) {
        let mut config = *self.controls.config();
        config.fly = !config.fly;
        log::info!("fly mode {}", if config.fly { "on" } else { "off" });
        self.controls.update_config(config);
    }

    fn frame(&mut self) {
        let now = self.start.elapsed().as_secs_f64();
        self.controls.tick(now, &mut self.entity);

        if self.last_title_update.elapsed().as_secs_f32() < 0.1 {
            return;
        }
        self.last_title_update = Instant::now();

        if let Some(window) = &self.window {
            let p = self.entity.position();
            let r = self.entity.rotation_degrees().unwrap_or(Vec3::ZERO);
            let v = self.controls.velocity();
            window.set_title(&format!(
                "WASD Viewer | pos ({:.2}, {:.2}, {:.2}) | yaw {:.0} pitch {:.0} | speed {:.2}{}",
                p.x,
                p.y,
                p.z,
                r.y,
                r.x,
                v.length(),
                if self.controls.config().fly { " | FLY" } else { "" }
            ));
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("WASD Viewer")
            .with_inner_size(PhysicalSize::new(960, 540));
        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::KeyboardInput { event: key, .. } = &event {
            if key.state == ElementState::Pressed && !key.repeat {
                match key.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => {
                        event_loop.exit();
                        return;
                    }
                    PhysicalKey::Code(KeyCode::KeyF) => self.toggle_fly(),
                    _ => {}
                }
            }
        }

        if self.controls.handle_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            let rotation = self.entity.rotation.get_or_insert(Vec3::ZERO);
            rotation.y -= delta.0 as f32 * MOUSE_SENSITIVITY;
            rotation.x = (rotation.x - delta.1 as f32 * MOUSE_SENSITIVITY)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WasdConfig::load(&path)?,
        None => WasdConfig::default(),
    };
    log::info!("starting with config:\n{}", config.to_json_string()?);

    println!("===========================================");
    println!("   WASD Viewer");
    println!("===========================================");
    println!("Controls: WASD/Arrows Move, Mouse Look, F Toggle Fly, ESC Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = ViewerApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
