//! Test doubles for the render surface and the delay
//!
//! Both record into a shared [`Timeline`], so tests can check the exact
//! order of flushes and waits.

#![allow(dead_code)]

use std::cell::RefCell;

use embedded_hal::delay::DelayNs;
use pixel_control::{
    BLACK, Brightness, Duration, LightEngine, PixelProvider, RenderSurface, Rgbw, StopSignal,
};

/// A flushed frame as the hardware would have seen it
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub pixels: Vec<Rgbw>,
    pub brightness: Brightness,
    /// Indices written since the previous flush, in write order
    pub written: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Flush(Frame),
    Wait(Duration),
}

#[derive(Debug, Default)]
pub struct Timeline {
    events: RefCell<Vec<Event>>,
}

impl Timeline {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Flush(frame) => Some(frame.clone()),
                Event::Wait(_) => None,
            })
            .collect()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Wait(duration) => Some(*duration),
                Event::Flush(_) => None,
            })
            .collect()
    }

    pub fn total_wait(&self) -> Duration {
        self.waits()
            .into_iter()
            .fold(Duration::from_ticks(0), |acc, wait| acc + wait)
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames().pop()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

/// Flush error of [`RecordingSurface::failing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushFailed;

pub struct RecordingSurface<'a> {
    timeline: &'a Timeline,
    pixels: Vec<Rgbw>,
    brightness: Brightness,
    written: Vec<usize>,
    failing: bool,
}

impl<'a> RecordingSurface<'a> {
    pub fn new(timeline: &'a Timeline, pixel_count: usize) -> Self {
        Self {
            timeline,
            pixels: vec![BLACK; pixel_count],
            brightness: Brightness::FULL,
            written: Vec::new(),
            failing: false,
        }
    }

    /// Surface whose every flush fails
    pub fn failing(timeline: &'a Timeline, pixel_count: usize) -> Self {
        Self {
            failing: true,
            ..Self::new(timeline, pixel_count)
        }
    }
}

impl RenderSurface for RecordingSurface<'_> {
    type Error = FlushFailed;

    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
            self.written.push(index);
        }
    }

    fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.failing {
            return Err(FlushFailed);
        }
        self.timeline.push(Event::Flush(Frame {
            pixels: self.pixels.clone(),
            brightness: self.brightness,
            written: std::mem::take(&mut self.written),
        }));
        Ok(())
    }
}

/// Delay that returns at once and raises the stop signal after a budget
pub struct ScriptedDelay<'a> {
    timeline: &'a Timeline,
    stop: &'a StopSignal,
    budget: Option<usize>,
    waited: usize,
}

impl<'a> ScriptedDelay<'a> {
    pub fn new(timeline: &'a Timeline, stop: &'a StopSignal) -> Self {
        Self {
            timeline,
            stop,
            budget: None,
            waited: 0,
        }
    }

    /// Raise the stop signal during the `waits`-th wait
    pub fn stop_after(mut self, waits: usize) -> Self {
        self.budget = Some(waits);
        self
    }

    fn record(&mut self, duration: Duration) {
        self.timeline.push(Event::Wait(duration));
        self.waited += 1;
        if self.budget.is_some_and(|budget| self.waited >= budget) {
            self.stop.raise();
        }
    }
}

impl DelayNs for ScriptedDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.record(Duration::from_micros(u64::from(ns) / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(Duration::from_micros(u64::from(us)));
    }
}

pub type TestEngine<'a, P> = LightEngine<'a, RecordingSurface<'a>, P, ScriptedDelay<'a>>;

/// Engine over a recording surface with an unlimited delay
pub fn engine<'a, P: PixelProvider>(
    timeline: &'a Timeline,
    stop: &'a StopSignal,
    provider: P,
    pixel_count: usize,
    brightness: f32,
) -> TestEngine<'a, P> {
    LightEngine::new(
        RecordingSurface::new(timeline, pixel_count),
        provider,
        ScriptedDelay::new(timeline, stop),
        stop,
        Brightness::new(brightness),
    )
}
