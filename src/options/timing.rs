use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Durations and easing for every navigation animation.
pub struct TimingOptions {
    /// Section slide and camera move duration, in milliseconds.
    #[schemars(title = "Slide Duration (ms)", range(min = 100, max = 5000))]
    pub slide_ms: u64,
    /// Overlay fade duration, in milliseconds.
    #[schemars(title = "Fade Duration (ms)", range(min = 50, max = 2000))]
    pub fade_ms: u64,
    /// Delay between the label and content fade-ins, in milliseconds.
    #[schemars(title = "Content Delay (ms)", range(min = 0, max = 1000))]
    pub content_delay_ms: u64,
    /// Pause after a section reveal before input is accepted again.
    #[schemars(title = "Settle Delay (ms)", range(min = 0, max = 2000))]
    pub settle_ms: u64,
    /// Fade-out duration of the intro hint.
    #[schemars(skip)]
    pub hint_fade_ms: u64,
    /// Curve shared by slides, camera moves and fades.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            slide_ms: 1400,
            fade_ms: 500,
            content_delay_ms: 100,
            settle_ms: 300,
            hint_fade_ms: 500,
            easing: EasingFunction::QuadraticInOut,
        }
    }
}

impl TimingOptions {
    /// Slide and camera duration.
    pub fn slide(&self) -> Duration {
        Duration::from_millis(self.slide_ms)
    }

    /// Overlay fade duration.
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Content-after-label delay.
    pub fn content_delay(&self) -> Duration {
        Duration::from_millis(self.content_delay_ms)
    }

    /// Settle delay.
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Intro hint fade duration.
    pub fn hint_fade(&self) -> Duration {
        Duration::from_millis(self.hint_fade_ms)
    }
}
