//! In-flight transitions as explicit phase machines.
//!
//! Each phase holds the [`Join`] it is waiting on. [`Transition::advance`]
//! is called once per frame after the tweens have been ticked; whenever the
//! current join has settled it runs that phase's continuation and moves on,
//! possibly through several phases in one call.

use super::fade;
use super::stage::Stage;
use crate::animation::Join;
use crate::camera::OrbitBounds;
use crate::options::{LayoutOptions, TimingOptions};

/// Return to the overview.
#[derive(Debug)]
pub(crate) struct OverviewExit {
    pub(crate) outgoing: Option<usize>,
    pub(crate) join: Join,
}

#[derive(Debug)]
enum EntryPhase {
    /// Slides and camera move.
    Arriving(Join),
    /// Incoming overlays fading in.
    Revealing(Join),
    /// Settle delay before control returns to the user.
    Settling(Join),
}

/// Move to a section.
#[derive(Debug)]
pub(crate) struct SectionEntry {
    incoming: usize,
    outgoing: Option<usize>,
    phase: EntryPhase,
}

impl SectionEntry {
    pub(crate) fn new(incoming: usize, outgoing: Option<usize>, arriving: Join) -> Self {
        Self {
            incoming,
            outgoing,
            phase: EntryPhase::Arriving(arriving),
        }
    }
}

/// A transition that has been accepted and not yet settled.
#[derive(Debug)]
pub(crate) enum Transition {
    Overview(OverviewExit),
    Section(SectionEntry),
}

impl Transition {
    /// Run every continuation whose join has settled. Returns `true` once
    /// the transition has fully completed and control belongs to the user
    /// again.
    pub(crate) fn advance(
        &mut self,
        stage: &mut Stage,
        timing: &TimingOptions,
        layout: &LayoutOptions,
    ) -> bool {
        match self {
            Self::Overview(exit) => {
                if !exit.join.is_settled(&stage.tweens) {
                    return false;
                }
                if let Some(outgoing) = exit.outgoing {
                    if let Some(section) = stage.scene.section_mut(outgoing) {
                        section.set_visible(false);
                    }
                }
                stage.controls.set_bounds(OrbitBounds::overview(layout));
                stage.controls.set_enabled(true);
                log::debug!("overview settled");
                true
            }
            Self::Section(entry) => entry.advance(stage, timing, layout),
        }
    }
}

impl SectionEntry {
    fn advance(
        &mut self,
        stage: &mut Stage,
        timing: &TimingOptions,
        layout: &LayoutOptions,
    ) -> bool {
        loop {
            match &self.phase {
                EntryPhase::Arriving(join) if join.is_settled(&stage.tweens) => {
                    if let Some(outgoing) = self.outgoing {
                        if let Some(section) = stage.scene.section_mut(outgoing) {
                            section.set_visible(false);
                        }
                    }
                    let reveal = fade::fade_in(
                        stage,
                        self.incoming,
                        timing.fade(),
                        timing.content_delay(),
                        timing.easing,
                    );
                    log::debug!("section {} arrived, revealing overlays", self.incoming);
                    self.phase = EntryPhase::Revealing(reveal);
                }
                EntryPhase::Revealing(join) if join.is_settled(&stage.tweens) => {
                    if let Some(section) = stage.scene.section(self.incoming) {
                        let bounds = OrbitBounds::section(section.radius(), layout);
                        stage.controls.set_bounds(bounds);
                    }
                    let settle = Join::of(stage.tweens.delay(timing.settle()));
                    self.phase = EntryPhase::Settling(settle);
                }
                EntryPhase::Settling(join) if join.is_settled(&stage.tweens) => {
                    stage.controls.set_enabled(true);
                    log::debug!("section {} settled", self.incoming);
                    return true;
                }
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::navigation::test_support::stage;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn section_entry_walks_every_phase() {
        let mut stage = stage(2);
        let timing = TimingOptions::default();
        let layout = LayoutOptions::default();
        stage.place_section(0, layout.active_slot(), true);

        let arriving = Join::of(stage.tweens.delay(ms(100)));
        let mut entry = Transition::Section(SectionEntry::new(0, None, arriving));

        assert!(!entry.advance(&mut stage, &timing, &layout));
        stage.advance_tweens(ms(100));
        // Arrival settled: the overlay fade has started.
        assert!(!entry.advance(&mut stage, &timing, &layout));
        assert!(!stage.tweens().is_idle());

        // Label and delayed content fade both finish at 100 + 100 + 500.
        stage.advance_tweens(ms(699));
        assert!(!entry.advance(&mut stage, &timing, &layout));
        stage.advance_tweens(ms(700));
        assert!(!entry.advance(&mut stage, &timing, &layout));
        let radius = stage.scene().section(0).unwrap().radius();
        assert_eq!(
            stage.controls().bounds(),
            OrbitBounds::section(radius, &layout)
        );
        assert!(!stage.controls().is_enabled());

        stage.advance_tweens(ms(1000));
        assert!(entry.advance(&mut stage, &timing, &layout));
        assert!(stage.controls().is_enabled());
        let section = stage.scene().section(0).unwrap();
        assert_eq!(section.label().opacity(), 1.0);
        assert_eq!(section.content().opacity(), 1.0);
    }

    #[test]
    fn overview_exit_hides_outgoing_and_restores_bounds() {
        let mut stage = stage(2);
        let layout = LayoutOptions::default();
        stage.place_section(1, layout.active_slot(), true);
        stage.controls.set_bounds(OrbitBounds::section(3.0, &layout));

        let join = Join::of(stage.tweens.delay(ms(50)));
        let mut exit = Transition::Overview(OverviewExit {
            outgoing: Some(1),
            join,
        });
        assert!(!exit.advance(&mut stage, &TimingOptions::default(), &layout));
        assert!(stage.scene().section(1).unwrap().is_visible());

        stage.advance_tweens(ms(50));
        assert!(exit.advance(&mut stage, &TimingOptions::default(), &layout));
        assert!(!stage.scene().section(1).unwrap().is_visible());
        assert_eq!(stage.controls().bounds(), OrbitBounds::overview(&layout));
        assert!(stage.controls().is_enabled());
    }
}
