// viz.rs — the owned animation-loop object behind one comparison canvas.
//
// One `Visualization` owns one `AnimationClock`; replacing it drops the old
// instance, so a stale loop can never keep ticking after teardown. The clock
// advances exactly once per painted frame, and the repaint request only ever
// comes from a live instance.

use egui::{Response, Sense, Ui, Vec2};
use thiserror::Error;

use crate::clock::{tick_interval, AnimationClock};
use crate::focus::FocusSet;
use crate::scene::{Scene, LOGICAL_SIZE};
use crate::sport::Sport;

/// Smallest canvas worth animating on; below this the caller gets an error
/// and should degrade to a placeholder instead of starting the loop.
pub const MIN_SURFACE: Vec2 = Vec2::new(240.0, 150.0);

#[derive(Debug, Error)]
pub enum VizError {
    #[error("drawing surface too small: {width:.0}×{height:.0}, need at least {min_w:.0}×{min_h:.0}")]
    SurfaceTooSmall {
        width: f32,
        height: f32,
        min_w: f32,
        min_h: f32,
    },
}

/// A running side-by-side comparison. Owns all of its animation state;
/// nothing is shared across instances.
pub struct Visualization {
    sport: Sport,
    focus: FocusSet,
    clock: AnimationClock,
}

impl Visualization {
    pub fn new(sport: Sport, focus: FocusSet) -> Self {
        tracing::info!(%sport, "starting form visualization");
        Self {
            sport,
            focus,
            clock: AnimationClock::new(),
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    /// Swap in a new focus set; it takes effect on the next tick, never
    /// mid-frame, because each frame builds its scene from a single snapshot.
    pub fn set_focus(&mut self, focus: FocusSet) {
        self.focus = focus;
    }

    /// Advance one frame and paint it. Fails without ticking when the
    /// available surface is unusably small.
    pub fn show(&mut self, ui: &mut Ui) -> Result<Response, VizError> {
        let avail = ui.available_size();
        if avail.x < MIN_SURFACE.x || avail.y < MIN_SURFACE.y {
            return Err(VizError::SurfaceTooSmall {
                width: avail.x,
                height: avail.y,
                min_w: MIN_SURFACE.x,
                min_h: MIN_SURFACE.y,
            });
        }

        // Keep the 800×500 aspect, capped by whatever space the panel gives us.
        let scale = (avail.x / LOGICAL_SIZE.x).min(avail.y / LOGICAL_SIZE.y);
        let (response, painter) = ui.allocate_painter(LOGICAL_SIZE * scale, Sense::hover());

        let frame = self.clock.tick();
        let scene = Scene::build(frame, self.sport, &self.focus);
        scene.paint(&painter, response.rect);

        ui.ctx().request_repaint_after(tick_interval());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instance_starts_at_frame_zero() {
        let viz = Visualization::new(Sport::Soccer, FocusSet::default());
        assert_eq!(viz.clock.frame(), 0);
    }

    #[test]
    fn replacing_resets_the_clock() {
        let mut viz = Visualization::new(Sport::Generic, FocusSet::default());
        viz.clock.tick();
        viz.clock.tick();
        viz = Visualization::new(Sport::Generic, FocusSet::default());
        assert_eq!(viz.clock.frame(), 0);
    }

    #[test]
    fn focus_swap_lands_on_next_scene() {
        let mut viz = Visualization::new(Sport::Basketball, FocusSet::default());
        let before = Scene::build(viz.clock.frame(), viz.sport, &viz.focus);
        assert!(!before.flawed.highlight.any());
        viz.set_focus(FocusSet::classify(&["bend your knee".to_string()]));
        let after = Scene::build(viz.clock.frame(), viz.sport, &viz.focus);
        assert!(after.flawed.highlight.legs);
    }
}
