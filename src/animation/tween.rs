//! Time-based tween engine.
//!
//! Tweens advance a single scalar or vector property from a start value to
//! an end value over a duration, shaped by an [`EasingFunction`]. The engine
//! does not own the animated properties: each [`tick`](TweenEngine::tick)
//! returns the sampled values and the caller writes them into the scene.
//!
//! All timing is expressed as [`Duration`] offsets on a monotonic clock
//! that the caller advances, so the engine runs identically under a real
//! frame loop and in tests.

use std::time::Duration;

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Handle to a started tween (or timer).
///
/// Ids are never reused, so a handle that is no longer active has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// Scalar properties a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTarget {
    /// Opacity of a section's label overlay.
    LabelOpacity(usize),
    /// Opacity of a section's content overlay.
    ContentOpacity(usize),
    /// Opacity of the introductory hint overlay.
    HintOpacity,
}

/// Vector properties a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorTarget {
    /// World position of the camera.
    CameraPosition,
    /// Orbit look-at target. Applying it also re-aims the camera.
    LookAt,
    /// World position of a section's group.
    SectionPosition(usize),
}

/// One interpolated value produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenSample {
    /// New value for a scalar property.
    Scalar(ScalarTarget, f32),
    /// New value for a vector property.
    Vector(VectorTarget, Vec3),
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Scalar {
        target: ScalarTarget,
        from: f32,
        to: f32,
    },
    Vector {
        target: VectorTarget,
        from: Vec3,
        to: Vec3,
    },
}

impl Motion {
    fn sample(&self, eased: f32) -> TweenSample {
        match *self {
            Self::Scalar { target, from, to } => {
                TweenSample::Scalar(target, from + (to - from) * eased)
            }
            Self::Vector { target, from, to } => {
                TweenSample::Vector(target, from.lerp(to, eased))
            }
        }
    }

    fn end(&self) -> TweenSample {
        match *self {
            Self::Scalar { target, to, .. } => TweenSample::Scalar(target, to),
            Self::Vector { target, to, .. } => TweenSample::Vector(target, to),
        }
    }
}

/// Description of a tween to start.
///
/// Build with [`scalar`](Self::scalar) or [`vector`](Self::vector), then
/// adjust with the builder methods before handing it to
/// [`TweenEngine::start`].
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    motion: Option<Motion>,
    duration: Duration,
    delay: Duration,
    easing: EasingFunction,
}

impl Tween {
    /// Tween a scalar property from `from` to `to`.
    #[must_use]
    pub fn scalar(
        target: ScalarTarget,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Self {
        Self {
            motion: Some(Motion::Scalar { target, from, to }),
            duration,
            delay: Duration::ZERO,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Tween a vector property from `from` to `to`.
    #[must_use]
    pub fn vector(
        target: VectorTarget,
        from: Vec3,
        to: Vec3,
        duration: Duration,
    ) -> Self {
        Self {
            motion: Some(Motion::Vector { target, from, to }),
            duration,
            delay: Duration::ZERO,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// A timer: drives nothing, completes after `duration`.
    #[must_use]
    pub fn timer(duration: Duration) -> Self {
        Self {
            motion: None,
            duration,
            delay: Duration::ZERO,
            easing: EasingFunction::Linear,
        }
    }

    /// Hold the start value for `delay` before progressing.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Use `easing` instead of the default curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Total time from start to completion, including the delay.
    #[must_use]
    pub fn span(&self) -> Duration {
        self.delay + self.duration
    }
}

#[derive(Debug)]
struct ActiveTween {
    id: TweenId,
    tween: Tween,
    /// Clock time at which progress begins (start + delay).
    begins_at: Duration,
}

impl ActiveTween {
    /// Sample at `now`. Returns the sample (if any) and whether the tween
    /// has finished.
    fn sample(&self, now: Duration) -> (Option<TweenSample>, bool) {
        if now < self.begins_at {
            return (None, false);
        }
        let elapsed = now - self.begins_at;
        if elapsed >= self.tween.duration {
            return (self.tween.motion.as_ref().map(Motion::end), true);
        }
        let raw_t = elapsed.as_secs_f32() / self.tween.duration.as_secs_f32();
        let eased = self.tween.easing.evaluate(raw_t);
        (self.tween.motion.as_ref().map(|m| m.sample(eased)), false)
    }
}

/// Multiplexes every in-flight tween over one clock.
///
/// There is no cancellation: a started tween always runs to its declared
/// duration.
#[derive(Debug, Default)]
pub struct TweenEngine {
    now: Duration,
    next_id: u64,
    active: Vec<ActiveTween>,
}

impl TweenEngine {
    /// Empty engine with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time (the timestamp of the last tick).
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Start a tween at the current clock time.
    pub fn start(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTween {
            id,
            tween,
            begins_at: self.now + tween.delay,
        });
        id
    }

    /// Start a timer that completes after `duration`.
    pub fn delay(&mut self, duration: Duration) -> TweenId {
        self.start(Tween::timer(duration))
    }

    /// Advance the clock to `now` and sample every active tween.
    ///
    /// Samples are returned in start order. Tweens that reach their end are
    /// sampled at exactly their end value and retired. The clock never runs
    /// backwards: an earlier `now` is treated as the current time.
    pub fn tick(&mut self, now: Duration) -> Vec<TweenSample> {
        self.now = self.now.max(now);
        let now = self.now;

        let mut samples = Vec::with_capacity(self.active.len());
        self.active.retain(|active| {
            let (sample, finished) = active.sample(now);
            samples.extend(sample);
            !finished
        });
        samples
    }

    /// Whether `id` is still running (or waiting out its delay).
    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|a| a.id == id)
    }

    /// Whether `id` has run to completion.
    pub fn is_finished(&self, id: TweenId) -> bool {
        id.0 < self.next_id && !self.is_active(id)
    }

    /// Number of tweens and timers in flight.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is in flight.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn scalar_value(samples: &[TweenSample]) -> f32 {
        match samples {
            [TweenSample::Scalar(_, v)] => *v,
            other => panic!("expected one scalar sample, got {other:?}"),
        }
    }

    #[test]
    fn linear_tween_progresses_with_clock() {
        let mut engine = TweenEngine::new();
        let id = engine.start(
            Tween::scalar(ScalarTarget::HintOpacity, 0.0, 1.0, ms(100))
                .with_easing(EasingFunction::Linear),
        );

        assert_eq!(scalar_value(&engine.tick(ms(0))), 0.0);
        assert!((scalar_value(&engine.tick(ms(25))) - 0.25).abs() < 1e-6);
        assert!((scalar_value(&engine.tick(ms(50))) - 0.5).abs() < 1e-6);
        assert!(engine.is_active(id));

        assert_eq!(scalar_value(&engine.tick(ms(100))), 1.0);
        assert!(engine.is_finished(id));
        assert!(engine.tick(ms(200)).is_empty());
    }

    #[test]
    fn final_sample_is_exact_end_value() {
        let mut engine = TweenEngine::new();
        let from = Vec3::new(0.1, 0.2, 0.3);
        let to = Vec3::new(-60.0, 0.0, -60.0);
        let _ = engine.start(Tween::vector(
            VectorTarget::SectionPosition(2),
            from,
            to,
            ms(1400),
        ));
        let samples = engine.tick(ms(5000));
        assert_eq!(
            samples,
            vec![TweenSample::Vector(VectorTarget::SectionPosition(2), to)]
        );
    }

    #[test]
    fn delayed_tween_is_silent_until_delay_elapses() {
        let mut engine = TweenEngine::new();
        let id = engine.start(
            Tween::scalar(ScalarTarget::ContentOpacity(0), 0.0, 1.0, ms(500))
                .with_delay(ms(100)),
        );

        assert!(engine.tick(ms(50)).is_empty());
        assert_eq!(scalar_value(&engine.tick(ms(100))), 0.0);
        let _ = engine.tick(ms(599));
        assert!(engine.is_active(id));
        let _ = engine.tick(ms(600));
        assert!(engine.is_finished(id));
    }

    #[test]
    fn delay_is_measured_from_start_time() {
        let mut engine = TweenEngine::new();
        let _ = engine.tick(ms(1000));
        let id = engine.start(Tween::timer(ms(300)));
        let _ = engine.tick(ms(1299));
        assert!(engine.is_active(id));
        let _ = engine.tick(ms(1300));
        assert!(engine.is_finished(id));
    }

    #[test]
    fn timers_produce_no_samples() {
        let mut engine = TweenEngine::new();
        let id = engine.delay(ms(10));
        assert!(engine.tick(ms(5)).is_empty());
        assert!(engine.tick(ms(10)).is_empty());
        assert!(engine.is_finished(id));
    }

    #[test]
    fn zero_duration_finishes_on_next_tick() {
        let mut engine = TweenEngine::new();
        let id = engine.start(Tween::scalar(
            ScalarTarget::LabelOpacity(1),
            1.0,
            0.0,
            Duration::ZERO,
        ));
        assert!(engine.is_active(id));
        assert_eq!(scalar_value(&engine.tick(engine.now())), 0.0);
        assert!(engine.is_finished(id));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut engine = TweenEngine::new();
        let _ = engine.tick(ms(500));
        let _ = engine.tick(ms(100));
        assert_eq!(engine.now(), ms(500));
    }

    #[test]
    fn unknown_ids_are_not_finished() {
        let mut engine = TweenEngine::new();
        let id = engine.delay(ms(1));
        let _ = engine.tick(ms(1));
        assert!(engine.is_finished(id));
        assert!(!engine.is_finished(TweenId(99)));
    }

    #[test]
    fn samples_follow_start_order() {
        let mut engine = TweenEngine::new();
        let _ = engine.start(Tween::vector(
            VectorTarget::CameraPosition,
            Vec3::ZERO,
            Vec3::ONE,
            ms(10),
        ));
        let _ = engine.start(Tween::vector(
            VectorTarget::LookAt,
            Vec3::ZERO,
            Vec3::ONE,
            ms(10),
        ));
        let targets: Vec<_> = engine
            .tick(ms(5))
            .into_iter()
            .map(|s| match s {
                TweenSample::Vector(t, _) => t,
                TweenSample::Scalar(..) => panic!("unexpected scalar"),
            })
            .collect();
        assert_eq!(targets, vec![VectorTarget::CameraPosition, VectorTarget::LookAt]);
    }
}
