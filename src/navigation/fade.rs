//! Overlay fades for a section's label and content panel.

use std::time::Duration;

use super::stage::Stage;
use crate::animation::{Join, ScalarTarget, Tween};
use crate::util::easing::EasingFunction;

/// Overlays at or below this opacity count as already hidden.
const HIDDEN_EPSILON: f32 = 0.01;

/// Fade both overlays of section `index` to transparent, from whatever
/// opacity they currently have. Overlays that are already (almost)
/// transparent are left alone, so the returned join may be empty.
pub(crate) fn fade_out(
    stage: &mut Stage,
    index: usize,
    duration: Duration,
    easing: EasingFunction,
) -> Join {
    let Some(section) = stage.scene.section(index) else {
        return Join::new();
    };
    let current = [
        (ScalarTarget::LabelOpacity(index), section.label().opacity()),
        (ScalarTarget::ContentOpacity(index), section.content().opacity()),
    ];

    current
        .into_iter()
        .filter(|&(_, opacity)| opacity > HIDDEN_EPSILON)
        .map(|(target, opacity)| {
            stage.tweens.start(
                Tween::scalar(target, opacity, 0.0, duration).with_easing(easing),
            )
        })
        .collect()
}

/// Fade both overlays of section `index` in from transparent. The label
/// starts immediately; the content panel waits `content_delay`.
pub(crate) fn fade_in(
    stage: &mut Stage,
    index: usize,
    duration: Duration,
    content_delay: Duration,
    easing: EasingFunction,
) -> Join {
    if stage.scene.section(index).is_none() {
        return Join::new();
    }
    stage.set_overlay_opacity(index, 0.0);

    let label = stage.tweens.start(
        Tween::scalar(ScalarTarget::LabelOpacity(index), 0.0, 1.0, duration)
            .with_easing(easing),
    );
    let content = stage.tweens.start(
        Tween::scalar(ScalarTarget::ContentOpacity(index), 0.0, 1.0, duration)
            .with_delay(content_delay)
            .with_easing(easing),
    );
    [label, content].into_iter().collect()
}
