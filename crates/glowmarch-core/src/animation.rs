//! Frame driver
//!
//! Stands in for the browser's animation-frame loop: ask a clock for the
//! elapsed time, build the scene for that instant, render every pixel,
//! hand the frame to a sink, repeat.

use crate::camera::Camera;
use crate::render::{FrameStats, render_frame};
use crate::scene::{AnimatedScene, SceneTime};
use crate::settings::RenderSettings;
use crate::Result;
use image::RgbaImage;
use std::time::Instant;

/// Source of elapsed milliseconds for each frame
pub trait FrameClock {
    /// Milliseconds since the animation started
    fn elapsed_millis(&mut self) -> f64;
}

/// Real elapsed time since construction
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FrameClock for WallClock {
    fn elapsed_millis(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock advancing exactly one frame per call
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    fps: f32,
    frame: u64,
}

impl FixedStepClock {
    pub fn new(fps: f32) -> Self {
        Self { fps, frame: 0 }
    }
}

impl FrameClock for FixedStepClock {
    fn elapsed_millis(&mut self) -> f64 {
        let millis = self.frame as f64 * 1000.0 / f64::from(self.fps);
        self.frame += 1;
        millis
    }
}

/// What the sink learns about each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub index: u32,
    pub time: SceneTime,
    pub stats: FrameStats,
}

/// Totals over a finished run
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationSummary {
    pub frames: u32,
    pub last_time: SceneTime,
    pub stats: FrameStats,
}

/// File name for frame `index`, zero padded so files sort in order
pub fn frame_file_name(index: u32) -> String {
    format!("frame_{index:05}.png")
}

/// Renders a sequence of frames
#[derive(Debug, Clone)]
pub struct Animation {
    settings: RenderSettings,
    camera: Camera,
}

impl Animation {
    pub fn new(settings: RenderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            camera: Camera::default(),
        })
    }

    /// Render `frame_count` frames, feeding each to `sink`.
    ///
    /// Scene time never goes backwards even if the clock does.
    pub fn run<C, F>(&self, clock: &mut C, mut sink: F) -> Result<AnimationSummary>
    where
        C: FrameClock + ?Sized,
        F: FnMut(FrameInfo, &RgbaImage) -> Result<()>,
    {
        let viewport = self.settings.viewport()?;
        let marcher = self.settings.marcher();
        let mut summary = AnimationSummary::default();

        for index in 0..self.settings.frame_count {
            let now = SceneTime::from_millis(clock.elapsed_millis());
            let time = if now < summary.last_time {
                summary.last_time
            } else {
                now
            };

            let scene = AnimatedScene::at(time);
            let (image, stats) = render_frame(&scene, &marcher, &self.camera, viewport);
            tracing::debug!("Frame {} at t = {:.3}s", index, time.seconds());

            sink(FrameInfo { index, time, stats }, &image)?;

            summary.frames += 1;
            summary.last_time = time;
            summary.stats = summary.stats.merge(stats);
        }

        Ok(summary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Error;

    fn tiny_settings(frames: u32) -> RenderSettings {
        RenderSettings {
            width: 8,
            height: 6,
            frame_count: frames,
            ..Default::default()
        }
    }

    #[test]
    fn fixed_step_clock_advances_per_frame() {
        let mut clock = FixedStepClock::new(4.0);
        assert_eq!(clock.elapsed_millis(), 0.0);
        assert_eq!(clock.elapsed_millis(), 250.0);
        assert_eq!(clock.elapsed_millis(), 500.0);
    }

    #[test]
    fn wall_clock_is_non_decreasing() {
        let mut clock = WallClock::new();
        let a = clock.elapsed_millis();
        let b = clock.elapsed_millis();
        assert!(b >= a);
    }

    #[test]
    fn frame_names_sort() {
        assert_eq!(frame_file_name(7), "frame_00007.png");
        assert!(frame_file_name(9) < frame_file_name(10));
    }

    #[test]
    fn run_renders_each_frame_once() {
        let animation = Animation::new(tiny_settings(3)).unwrap();
        let mut seen = Vec::new();
        let summary = animation
            .run(&mut FixedStepClock::new(2.0), |info, image| {
                assert_eq!(image.dimensions(), (8, 6));
                seen.push((info.index, info.time.seconds()));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, vec![(0, 0.0), (1, 0.5), (2, 1.0)]);
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.stats.pixels(), 3 * 8 * 6);
    }

    #[test]
    fn time_never_runs_backwards() {
        struct Rewinding(Vec<f64>);
        impl FrameClock for Rewinding {
            fn elapsed_millis(&mut self) -> f64 {
                self.0.remove(0)
            }
        }

        let animation = Animation::new(tiny_settings(3)).unwrap();
        let mut times = Vec::new();
        animation
            .run(&mut Rewinding(vec![1000.0, 400.0, 1500.0]), |info, _| {
                times.push(info.time.seconds());
                Ok(())
            })
            .unwrap();
        assert_eq!(times, vec![1.0, 1.0, 1.5]);
    }

    #[test]
    fn sink_error_stops_the_run() {
        let animation = Animation::new(tiny_settings(5)).unwrap();
        let mut calls = 0;
        let result = animation.run(&mut FixedStepClock::new(30.0), |_, _| {
            calls += 1;
            Err(Error::InvalidSettings("stop".into()))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn invalid_settings_are_rejected_up_front() {
        assert!(Animation::new(RenderSettings {
            fps: 0.0,
            ..Default::default()
        })
        .is_err());
    }
}
