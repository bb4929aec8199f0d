//! Falling letters animation.
//!
//! [`RainGrid`] holds the per-column fall positions and decides what to draw
//! each frame. [`RainAnimation`] binds a grid to a drawing surface and a
//! [`Scheduler`]; dropping it stops the frame timer and the resize listener.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::rain::{FONT_SIZE, GLYPHS, TICK_MS, WRAP_PROBABILITY};
use crate::core::schedule::Scheduler;

/// Column fall positions, in rows of `FONT_SIZE` pixels.
#[derive(Clone, Debug)]
pub struct RainGrid {
    drops: Vec<u32>,
    height: f64,
    glyphs: Vec<char>,
}

impl RainGrid {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            drops: vec![1; column_count(width)],
            height,
            glyphs: GLYPHS.chars().collect(),
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Track a new surface size.
    ///
    /// Surviving columns keep their position; added columns start at the top.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.drops.resize(column_count(width), 1);
        self.height = height;
    }

    /// Advance one frame, calling `draw(glyph, x, y)` once per column.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, mut draw: impl FnMut(char, f64, f64)) {
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs.choose(rng).copied().unwrap_or(' ');
            let y = f64::from(*drop) * FONT_SIZE;
            draw(glyph, column as f64 * FONT_SIZE, y);

            // Randomized restart keeps columns from resetting in lockstep.
            if y > self.height && rng.gen_bool(WRAP_PROBABILITY) {
                *drop = 0;
            }
            *drop += 1;
        }
    }
}

fn column_count(width: f64) -> usize {
    if width.is_finite() && width > 0.0 {
        (width / FONT_SIZE).floor() as usize
    } else {
        0
    }
}

/// Where the animation paints.
pub trait RainSurface {
    /// Current viewport size in CSS pixels.
    fn viewport(&self) -> (f64, f64);
    /// Resize the drawing buffer.
    fn resize(&self, width: f64, height: f64);
    /// Paint the translucent overlay that fades previous frames.
    fn fade(&self);
    fn draw_glyph(&self, glyph: char, x: f64, y: f64);
}

/// A running animation. Dropping it releases the timer and the listener.
pub struct RainAnimation<S: Scheduler> {
    _tick: S::Tick,
    _resize: Option<S::Listener>,
}

impl<S: Scheduler> RainAnimation<S> {
    pub fn start<D: RainSurface + 'static>(scheduler: &S, surface: D) -> Self {
        let surface = Rc::new(surface);
        let (width, height) = surface.viewport();
        surface.resize(width, height);
        let grid = Rc::new(RefCell::new(RainGrid::new(width, height)));

        let tick = {
            let surface = Rc::clone(&surface);
            let grid = Rc::clone(&grid);
            scheduler.every(TICK_MS, move || {
                surface.fade();
                let mut rng = rand::thread_rng();
                grid.borrow_mut()
                    .tick(&mut rng, |glyph, x, y| surface.draw_glyph(glyph, x, y));
            })
        };

        let resize = scheduler.on_resize(move || {
            let (width, height) = surface.viewport();
            surface.resize(width, height);
            grid.borrow_mut().resize(width, height);
        });

        log::debug!("falling letters started ({}x{})", width, height);
        Self {
            _tick: tick,
            _resize: resize,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::schedule::testing::MockScheduler;

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(RainGrid::new(180.0, 100.0).columns(), 10);
        assert_eq!(RainGrid::new(17.0, 100.0).columns(), 0);
        assert_eq!(RainGrid::new(f64::NAN, 100.0).columns(), 0);
    }

    #[test]
    fn test_first_frame_draws_row_one() {
        let mut grid = RainGrid::new(54.0, 500.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut drawn = Vec::new();

        grid.tick(&mut rng, |glyph, x, y| drawn.push((glyph, x, y)));

        assert_eq!(drawn.len(), 3);
        for (column, (glyph, x, y)) in drawn.into_iter().enumerate() {
            assert!(GLYPHS.contains(glyph));
            assert_eq!(x, column as f64 * FONT_SIZE);
            assert_eq!(y, FONT_SIZE);
        }
        assert_eq!(grid.drops(), &[2, 2, 2]);
    }

    #[test]
    fn test_columns_only_wrap_after_leaving_screen() {
        let height = 3.0 * FONT_SIZE;
        let mut grid = RainGrid::new(10.0 * FONT_SIZE, height);
        let mut rng = StdRng::seed_from_u64(42);
        let mut last_y = vec![0.0; grid.columns()];
        let mut wrapped = vec![false; grid.columns()];

        for _ in 0..3000 {
            let mut frame = Vec::new();
            grid.tick(&mut rng, |_, x, y| frame.push((x, y)));
            for (x, y) in frame {
                let column = (x / FONT_SIZE) as usize;
                if y < last_y[column] {
                    assert!(last_y[column] > height, "column {} wrapped on screen", column);
                    assert_eq!(y, FONT_SIZE);
                    wrapped[column] = true;
                }
                last_y[column] = y;
            }
        }

        assert!(wrapped.iter().all(|w| *w), "every column should eventually wrap");
    }

    #[test]
    fn test_resize_keeps_existing_columns() {
        let mut grid = RainGrid::new(2.0 * FONT_SIZE, 100.0);
        let mut rng = StdRng::seed_from_u64(1);
        grid.tick(&mut rng, |_, _, _| {});
        grid.tick(&mut rng, |_, _, _| {});

        grid.resize(4.0 * FONT_SIZE, 100.0);
        assert_eq!(grid.drops(), &[3, 3, 1, 1]);

        grid.resize(1.0 * FONT_SIZE, 100.0);
        assert_eq!(grid.drops(), &[3]);
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        size: Rc<Cell<(f64, f64)>>,
        resizes: Rc<Cell<usize>>,
        fades: Rc<Cell<usize>>,
        glyphs: Rc<Cell<usize>>,
    }

    impl RainSurface for RecordingSurface {
        fn viewport(&self) -> (f64, f64) {
            self.size.get()
        }

        fn resize(&self, _width: f64, _height: f64) {
            self.resizes.set(self.resizes.get() + 1);
        }

        fn fade(&self) {
            self.fades.set(self.fades.get() + 1);
        }

        fn draw_glyph(&self, _glyph: char, _x: f64, _y: f64) {
            self.glyphs.set(self.glyphs.get() + 1);
        }
    }

    #[test]
    fn test_animation_draws_on_tick_and_tracks_resize() {
        let scheduler = MockScheduler::new();
        let surface = RecordingSurface::default();
        surface.size.set((5.0 * FONT_SIZE, 200.0));

        let animation = RainAnimation::start(&scheduler, surface.clone());
        assert_eq!(scheduler.periods(), vec![TICK_MS]);
        assert_eq!(surface.resizes.get(), 1);

        scheduler.fire_ticks();
        assert_eq!(surface.fades.get(), 1);
        assert_eq!(surface.glyphs.get(), 5);

        surface.size.set((8.0 * FONT_SIZE, 200.0));
        scheduler.fire_resize();
        assert_eq!(surface.resizes.get(), 2);

        scheduler.fire_ticks();
        assert_eq!(surface.glyphs.get(), 5 + 8);

        drop(animation);
    }

    #[test]
    fn test_teardown_leaves_no_timers_or_listeners() {
        let scheduler = MockScheduler::new();
        let surface = RecordingSurface::default();
        surface.size.set((100.0, 100.0));

        let animation = RainAnimation::start(&scheduler, surface.clone());
        assert_eq!(scheduler.pending_ticks(), 1);
        assert_eq!(scheduler.resize_listeners(), 1);

        drop(animation);
        assert_eq!(scheduler.pending_ticks(), 0);
        assert_eq!(scheduler.resize_listeners(), 0);

        // Nothing runs once torn down.
        scheduler.fire_ticks();
        scheduler.fire_resize();
        assert_eq!(surface.fades.get(), 0);
        assert_eq!(surface.resizes.get(), 1);
    }
}
