use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::animation::{AnimationClock, LightRig};
use crate::config::AppConfig;
use crate::gfx::{
    camera::{CameraController, CameraManager, OrbitCamera},
    rendering::{FrameOutcome, RenderEngine},
    scene::DrawList,
};
use crate::world::Scene;

const WINDOW_TITLE: &str = "Pasture";
const ROTATE_SPEED: f32 = 0.005;
const ZOOM_SPEED: f32 = 1.0;

/// Fixed-interval timer that never fires twice to catch up.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    next: Instant,
    interval: Duration,
}

impl TickSchedule {
    /// First tick fires `initial_delay` after `start`.
    pub fn new(start: Instant, initial_delay: Duration, interval: Duration) -> Self {
        Self {
            next: start + initial_delay,
            interval,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns `true` when a tick is due at `now`; the following deadline is
    /// measured from `now`, however late it is.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }
}

/// Seed of the star jitter for the current frame.
///
/// Reseeded once per tick, so extra redraws between ticks (camera drags,
/// resizes) reproduce the same star field instead of twinkling faster than
/// the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameJitter {
    seed: u64,
}

impl FrameJitter {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { seed: rng.random() }
    }

    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.seed = rng.random();
    }

    /// Fresh generator replaying this frame's jitter.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

pub struct PastureApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    clock: AnimationClock,
    camera_manager: CameraManager,
    ticks: TickSchedule,
    rng: ThreadRng,
    jitter: FrameJitter,
    draw_list: DrawList,
    failure: Option<anyhow::Error>,
}

impl PastureApp {
    /// Builds the scene up front so invalid tables are reported before any
    /// window opens.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let mut rng = rand::rng();
        let scene = Scene::new(config.stars, &mut rng).context("failed to build the scene")?;
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        let camera = OrbitCamera::new(config.window_size.0 as f32 / config.window_size.1 as f32);
        let controller = CameraController::new(ROTATE_SPEED, ZOOM_SPEED);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene,
                clock: AnimationClock::new(),
                camera_manager: CameraManager::new(camera, controller),
                ticks: TickSchedule::new(Instant::now(), config.initial_delay, config.tick),
                jitter: FrameJitter::new(&mut rng),
                rng,
                draw_list: DrawList::new(),
                failure: None,
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;

        self.app_state.ticks = TickSchedule::new(
            Instant::now(),
            self.app_state.config.initial_delay,
            self.app_state.config.tick,
        );
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.app_state.ticks.deadline()));

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated with an error")?;

        match self.app_state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let now = self.clock.now();
        self.camera_manager.begin_frame(now);
        let lights = LightRig::at(now);

        self.draw_list.clear();
        self.scene.draw(now, &mut self.jitter.rng(), &mut self.draw_list);
        log::trace!("frame {}: {:?}", now.frame(), self.draw_list.stats());

        let result = render_engine.render(
            &self.draw_list,
            &self.camera_manager.camera.uniform,
            &lights,
        );
        match result {
            Ok(FrameOutcome::Presented) => {}
            Ok(outcome) => log::debug!("frame {} not presented: {:?}", now.frame(), outcome),
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                let err = anyhow::Error::new(err).context("failed to create window");
                return self.fail(event_loop, err);
            }
        };

        let PhysicalSize { width, height } = window.inner_size();
        let renderer = pollster::block_on(RenderEngine::new(window.clone(), width, height));
        match renderer {
            Ok(renderer) => {
                self.camera_manager.camera.resize_projection(width, height);
                self.render_engine = Some(renderer);
                self.window = Some(window);
                log::info!("window open at {width}x{height}");
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera_manager.camera.resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.camera_manager.process_event(&event) {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.ticks.poll(Instant::now()) {
            self.clock.tick();
            self.jitter.reseed(&mut self.rng);
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticks.deadline()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameTime;
    use crate::world::StarFieldMode;

    #[test]
    fn first_tick_waits_for_initial_delay() {
        let start = Instant::now();
        let mut ticks = TickSchedule::new(start, Duration::from_millis(500), Duration::from_millis(30));
        assert!(!ticks.poll(start + Duration::from_millis(499)));
        assert!(ticks.poll(start + Duration::from_millis(500)));
        assert_eq!(ticks.deadline(), start + Duration::from_millis(530));
    }

    #[test]
    fn late_ticks_do_not_catch_up() {
        let start = Instant::now();
        let mut ticks = TickSchedule::new(start, Duration::ZERO, Duration::from_millis(30));
        let late = start + Duration::from_millis(200);
        assert!(ticks.poll(late));
        // one tick for the whole gap, the next one is a full interval away
        assert!(!ticks.poll(late + Duration::from_millis(29)));
        assert!(ticks.poll(late + Duration::from_millis(30)));
    }

    #[test]
    fn redraws_between_ticks_repeat_the_star_field() {
        let mut rng = StdRng::seed_from_u64(3);
        let scene = Scene::new(StarFieldMode::PerFrame, &mut rng).unwrap();
        let mut jitter = FrameJitter::new(&mut rng);

        let draw = |jitter: &FrameJitter| {
            let mut list = DrawList::new();
            scene.draw(FrameTime::new(42), &mut jitter.rng(), &mut list);
            list.labeled("star")
                .map(|c| c.transform().origin())
                .collect::<Vec<_>>()
        };

        let first = draw(&jitter);
        assert_eq!(first, draw(&jitter));

        jitter.reseed(&mut rng);
        assert_ne!(first, draw(&jitter));
    }
}
