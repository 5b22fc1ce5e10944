//! Navigation state machine.
//!
//! The [`Navigator`] owns the [`NavigationState`] and the [`Stage`] it
//! animates. It accepts one transition at a time: every request that
//! arrives while `transitioning` is set is dropped, never queued.
//! Transitions are advanced from [`Navigator::tick`] once per frame.

use std::time::Duration;

use glam::Vec3;

use super::camera_animator::animate_camera;
use super::fade;
use super::stage::Stage;
use super::state::{NavControls, NavigationState, View};
use super::transition::{OverviewExit, SectionEntry, Transition};
use crate::animation::{Join, ScalarTarget, Tween};
use crate::camera::OrbitBounds;
use crate::options::{LayoutOptions, TimingOptions};

#[derive(Debug)]
enum HintState {
    Showing,
    Dismissing(Join),
    Dismissed,
}

/// Owns the navigation state and sequences every transition.
#[derive(Debug)]
pub struct Navigator {
    state: NavigationState,
    transition: Option<Transition>,
    hint: HintState,
    stage: Stage,
    timing: TimingOptions,
    layout: LayoutOptions,
}

impl Navigator {
    /// Navigator in the overview state. The stage is left untouched until
    /// the first [`enter_overview`](Self::enter_overview) or request.
    #[must_use]
    pub fn new(stage: Stage, timing: TimingOptions, layout: LayoutOptions) -> Self {
        Self {
            state: NavigationState::OVERVIEW,
            transition: None,
            hint: HintState::Showing,
            stage,
            timing,
            layout,
        }
    }

    /// Current state.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    /// Enablement of the previous/next controls for the current view.
    pub fn nav_controls(&self) -> NavControls {
        NavControls::for_view(self.state.view, self.stage.scene.len())
    }

    /// The animated world.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub(crate) fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Go one step left: to the previous section, or to the overview from
    /// the first section. Returns whether a transition started.
    pub fn request_previous(&mut self) -> bool {
        if self.drop_while_transitioning("previous") {
            return false;
        }
        self.dismiss_hint();
        match self.state.view {
            View::Overview => {
                log::debug!("previous ignored: overview is leftmost");
                false
            }
            View::Section(0) => self.enter_overview(false),
            View::Section(i) => self.enter_section(i - 1, false),
        }
    }

    /// Go one step right: to the first section from the overview, or to
    /// the next section. Returns whether a transition started.
    pub fn request_next(&mut self) -> bool {
        if self.drop_while_transitioning("next") {
            return false;
        }
        self.dismiss_hint();
        let target = match self.state.view {
            View::Overview => 0,
            View::Section(i) => i + 1,
        };
        if target >= self.stage.scene.len() {
            log::debug!("next ignored: no section {target}");
            return false;
        }
        self.enter_section(target, false)
    }

    /// Return to the overview. With `instant`, every end value is applied
    /// immediately and the transition completes before this returns.
    pub fn enter_overview(&mut self, instant: bool) -> bool {
        if self.drop_while_transitioning("overview") {
            return false;
        }

        let outgoing = self.state.section_index();
        self.state = NavigationState {
            view: View::Overview,
            transitioning: true,
        };
        self.stage.controls.set_enabled(false);

        let layout = &self.layout;
        let eye = layout.overview_camera();
        let look_at = layout.overview_target();
        // The outgoing section leaves toward the side it currently sits on.
        let exit_to = outgoing.and_then(|i| {
            let position = self.stage.scene.section(i)?.position();
            let side = if position.x > 0.0 { 1.0 } else { -1.0 };
            Some((
                i,
                Vec3::new(side * layout.slide_offset_x, position.y, layout.offstage_z()),
            ))
        });

        if instant {
            if let Some((i, to)) = exit_to {
                self.stage.place_section(i, to, false);
                self.stage.set_overlay_opacity(i, 0.0);
            }
            self.stage.snap_camera(eye, look_at);
            self.stage.controls.set_bounds(OrbitBounds::overview(&self.layout));
            self.stage.controls.set_enabled(true);
            self.state.transitioning = false;
            log::info!("overview (instant)");
            return true;
        }

        let timing = &self.timing;
        let mut join = Join::new();
        if let Some((i, to)) = exit_to {
            join.extend(self.stage.slide_section(i, to, timing.slide(), timing.easing));
            join.merge(fade::fade_out(&mut self.stage, i, timing.fade(), timing.easing));
        }
        join.merge(animate_camera(
            &mut self.stage,
            eye,
            look_at,
            timing.slide(),
            timing.easing,
        ));

        log::info!("leaving {outgoing:?} for overview");
        self.transition = Some(Transition::Overview(OverviewExit { outgoing, join }));
        true
    }

    /// Go to section `index`. Out-of-range indices and the section that is
    /// already current are ignored. With `instant`, every end value is
    /// applied immediately.
    pub fn enter_section(&mut self, index: usize, instant: bool) -> bool {
        if self.drop_while_transitioning("section") {
            return false;
        }
        if self.state.view == View::Section(index) {
            log::debug!("already at section {index}");
            return false;
        }
        let Some(incoming) = self.stage.scene.section(index) else {
            log::debug!("no section {index}");
            return false;
        };

        let layout = &self.layout;
        let slot = layout.active_slot();
        let eye = incoming.camera_position_at(slot);
        let look_at = incoming.look_at_from(slot);
        let radius = incoming.radius();

        let outgoing = self.state.section_index();
        let direction = match outgoing {
            Some(previous) if index < previous => -1.0,
            _ => 1.0,
        };
        let offstage_z = layout.offstage_z();
        let outgoing_to = outgoing.and_then(|i| {
            let y = self.stage.scene.section(i)?.position().y;
            Some((i, Vec3::new(-direction * layout.slide_offset_x, y, offstage_z)))
        });
        let incoming_from =
            Vec3::new(direction * layout.slide_offset_x, layout.section_y, offstage_z);

        self.state = NavigationState {
            view: View::Section(index),
            transitioning: true,
        };
        self.stage.controls.set_enabled(false);

        if instant {
            if let Some((i, to)) = outgoing_to {
                self.stage.place_section(i, to, false);
                self.stage.set_overlay_opacity(i, 0.0);
            }
            self.stage.place_section(index, slot, true);
            self.stage.set_overlay_opacity(index, 1.0);
            self.stage.snap_camera(eye, look_at);
            let bounds = OrbitBounds::section(radius, &self.layout);
            self.stage.controls.set_bounds(bounds);
            self.stage.controls.set_enabled(true);
            self.state.transitioning = false;
            log::info!("section {index} (instant)");
            return true;
        }

        let timing = &self.timing;
        let mut arriving = Join::new();
        if let Some((i, to)) = outgoing_to {
            arriving.extend(self.stage.slide_section(i, to, timing.slide(), timing.easing));
            arriving.merge(fade::fade_out(&mut self.stage, i, timing.fade(), timing.easing));
        }

        self.stage.place_section(index, incoming_from, true);
        self.stage.set_overlay_opacity(index, 0.0);
        arriving.extend(self.stage.slide_section(index, slot, timing.slide(), timing.easing));
        arriving.merge(animate_camera(
            &mut self.stage,
            eye,
            look_at,
            timing.slide(),
            timing.easing,
        ));

        log::info!("leaving {outgoing:?} for section {index}");
        self.transition = Some(Transition::Section(SectionEntry::new(
            index, outgoing, arriving,
        )));
        true
    }

    /// Advance tweens to `now` and run any transition step whose
    /// animations have all finished.
    pub fn tick(&mut self, now: Duration) {
        self.stage.advance_tweens(now);

        if let Some(transition) = self.transition.as_mut() {
            if transition.advance(&mut self.stage, &self.timing, &self.layout) {
                self.transition = None;
                self.state.transitioning = false;
            }
        }

        if let HintState::Dismissing(join) = &self.hint {
            if join.is_settled(&self.stage.tweens) {
                self.stage.scene.hint_mut().hide();
                self.hint = HintState::Dismissed;
            }
        }
    }

    fn drop_while_transitioning(&self, request: &str) -> bool {
        if self.state.transitioning {
            log::debug!("{request} request dropped: transition in flight");
        }
        self.state.transitioning
    }

    fn dismiss_hint(&mut self) {
        if !matches!(self.hint, HintState::Showing) {
            return;
        }
        let from = self.stage.scene.hint().opacity();
        let fade = self.stage.tweens.start(
            Tween::scalar(ScalarTarget::HintOpacity, from, 0.0, self.timing.hint_fade())
                .with_easing(self.timing.easing),
        );
        self.hint = HintState::Dismissing(Join::of(fade));
    }
}
