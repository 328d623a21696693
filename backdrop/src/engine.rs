use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{ACCENT_COLOR, ACCENT_SURFACE_INDEX, BASE_COLOR};
use crate::field::ParticleField;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Fill colour for the surface at `index`.
#[must_use]
pub fn fill_color(index: usize) -> &'static str {
    if index == ACCENT_SURFACE_INDEX { ACCENT_COLOR } else { BASE_COLOR }
}

/// Core backdrop state: one particle field per surface plus the RNG that
/// seeds them.
///
/// Separated from `Backdrop` so it can be tested without WASM/browser dependencies.
pub struct BackdropCore {
    fields: Vec<ParticleField>,
    rng: SmallRng,
}

impl BackdropCore {
    /// Create `surfaces` empty fields. Nothing is spawned until the first resize.
    #[must_use]
    pub fn new(surfaces: usize, seed: u64) -> Self {
        Self { fields: vec![ParticleField::new(); surfaces], rng: SmallRng::seed_from_u64(seed) }
    }

    /// Rebuild the field at `index` for new bounds. Unknown indices are ignored.
    pub fn resize(&mut self, index: usize, width: f64, height: f64) {
        if let Some(field) = self.fields.get_mut(index) {
            field.resize(width, height, &mut self.rng);
        }
    }

    /// Advance every field by one frame.
    pub fn tick(&mut self) {
        for field in &mut self.fields {
            field.step();
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[ParticleField] {
        &self.fields
    }

    #[must_use]
    pub fn particle_total(&self) -> usize {
        self.fields.iter().map(ParticleField::len).sum()
    }
}

/// A canvas paired with its 2D drawing context.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    /// Acquire the 2D context of `canvas`. Returns `None` if the browser
    /// refuses to hand one out.
    #[must_use]
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => return None,
            },
            Ok(None) => return None,
            Err(err) => {
                log::warn!("canvas {}: 2d context unavailable: {err:?}", canvas.id());
                return None;
            }
        };
        Some(Self { canvas, ctx })
    }

    /// Match the backing store to the rendered CSS size and return it.
    fn fit_to_layout(&self) -> (f64, f64) {
        let width = self.canvas.offset_width().max(0);
        let height = self.canvas.offset_height().max(0);
        self.canvas.set_width(width.unsigned_abs());
        self.canvas.set_height(height.unsigned_abs());
        (f64::from(width), f64::from(height))
    }
}

/// The full backdrop. Wraps `BackdropCore` and owns the browser canvases.
pub struct Backdrop {
    surfaces: Vec<Surface>,
    pub core: BackdropCore,
}

impl Backdrop {
    /// Create a backdrop over `surfaces`, seeded from `Math.random()`.
    #[must_use]
    pub fn new(surfaces: Vec<Surface>) -> Self {
        let seed = js_sys::Math::random().to_bits();
        let core = BackdropCore::new(surfaces.len(), seed);
        Self { surfaces, core }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Re-measure every canvas and respawn its particles.
    pub fn resize(&mut self) {
        for (index, surface) in self.surfaces.iter().enumerate() {
            let (width, height) = surface.fit_to_layout();
            self.core.resize(index, width, height);
        }
    }

    /// Advance the simulation one step and repaint every surface.
    pub fn frame(&mut self) {
        self.core.tick();
        for (index, (surface, field)) in self
            .surfaces
            .iter()
            .zip(self.core.fields())
            .enumerate()
        {
            if let Err(err) = render::draw(&surface.ctx, field, fill_color(index)) {
                log::warn!("canvas {}: draw failed: {err:?}", surface.canvas.id());
            }
        }
    }

    /// Start the `requestAnimationFrame` loop. It runs until
    /// [`BackdropHandle::stop`] is called or the page goes away.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window or the first frame cannot be scheduled.
    pub fn start(self) -> Result<BackdropHandle, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle = BackdropHandle {
            backdrop: Rc::new(RefCell::new(self)),
            running: Rc::new(Cell::new(true)),
            frame_id: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
            window,
        };

        let backdrop = Rc::clone(&handle.backdrop);
        let running = Rc::clone(&handle.running);
        let frame_id = Rc::clone(&handle.frame_id);
        let callback = Rc::clone(&handle.callback);
        let window = handle.window.clone();
        let tick = Closure::wrap(Box::new(move |_ts: f64| {
            frame_id.set(None);
            if !running.get() {
                return;
            }
            backdrop.borrow_mut().frame();
            if let Some(cb) = callback.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(err) => {
                        log::error!("backdrop frame loop halted: {err:?}");
                        running.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let first = handle
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())?;
        handle.frame_id.set(Some(first));
        *handle.callback.borrow_mut() = Some(tick);
        Ok(handle)
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Control handle for a running backdrop.
#[derive(Clone)]
pub struct BackdropHandle {
    backdrop: Rc<RefCell<Backdrop>>,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    window: web_sys::Window,
}

impl BackdropHandle {
    /// Re-measure the canvases and respawn particles.
    pub fn resize(&self) {
        self.backdrop.borrow_mut().resize();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Halt the frame loop and release the frame callback. Idempotent.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {err:?}");
            }
        }
        self.callback.borrow_mut().take();
    }
}
