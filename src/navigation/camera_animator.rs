use std::time::Duration;

use glam::Vec3;

use super::stage::Stage;
use crate::animation::{Join, Tween, VectorTarget};
use crate::util::easing::EasingFunction;

/// Move the camera to `eye` while swinging the orbit target to `look_at`.
/// Both tweens start from the current pose and share one duration.
pub(crate) fn animate_camera(
    stage: &mut Stage,
    eye: Vec3,
    look_at: Vec3,
    duration: Duration,
    easing: EasingFunction,
) -> Join {
    let eye_from = stage.camera.eye;
    let look_from = stage.controls.target();
    let position = stage.tweens.start(
        Tween::vector(VectorTarget::CameraPosition, eye_from, eye, duration)
            .with_easing(easing),
    );
    let target = stage.tweens.start(
        Tween::vector(VectorTarget::LookAt, look_from, look_at, duration)
            .with_easing(easing),
    );
    [position, target].into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::test_support::stage;

    #[test]
    fn camera_and_target_arrive_together() {
        let mut stage = stage(1);
        stage.snap_camera(Vec3::new(0.0, 8.0, 20.0), Vec3::ZERO);
        let eye = Vec3::new(0.0, 1.6, -16.8);
        let look = Vec3::new(3.35, 0.25, -38.5);

        let join = animate_camera(
            &mut stage,
            eye,
            look,
            Duration::from_millis(1400),
            EasingFunction::Linear,
        );
        stage.advance_tweens(Duration::from_millis(700));
        assert!(!join.is_settled(stage.tweens()));
        let halfway = Vec3::new(0.0, 8.0, 20.0).lerp(eye, 0.5);
        assert!((stage.camera().eye - halfway).length() < 1e-3);
        let mid_target = Vec3::ZERO.lerp(look, 0.5);
        assert!((stage.controls().target() - mid_target).length() < 1e-3);
        assert_eq!(stage.camera().target, stage.controls().target());

        stage.advance_tweens(Duration::from_millis(1400));
        assert!(join.is_settled(stage.tweens()));
        assert_eq!(stage.camera().eye, eye);
        assert_eq!(stage.controls().target(), look);
        assert_eq!(stage.camera().target, look);
    }
}
