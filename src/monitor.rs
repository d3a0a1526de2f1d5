// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::future::Future;
use std::time::Duration;

use tokio::time;

use crate::config::Config;
use crate::error::Result;
use crate::frame;
use crate::locator::SensorRoot;
use crate::screen::Screen;
use crate::sensor::Sample;

pub const FAREWELL: &str = "Monitoring stopped.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Running,
    Stopped,
}

/// Periodically samples the sensors under `root` and redraws the dashboard.
pub struct Monitor<S: Screen> {
    root: SensorRoot,
    config: Config,
    screen: S,
    state: State,
    frames: u64,
}

impl<S: Screen> Monitor<S> {
    pub fn new(root: SensorRoot, config: Config, screen: S) -> Monitor<S> {
        Monitor {
            root,
            config,
            screen,
            state: State::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Draw frames until `shutdown` completes, then clear the screen and
    /// say goodbye.
    ///
    /// `shutdown` is only polled while waiting between frames, so a frame
    /// is never left half drawn.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        self.screen.show(&format!(
            "Monitoring from: {}\nPress Ctrl+C to exit\n\n",
            self.root
        ))?;
        let mut delay = self.config.startup_delay;

        while self.state == State::Running {
            if sleep_or_shutdown(delay, &mut shutdown).await {
                self.state = State::Stopped;
                break;
            }
            self.refresh()?;
            delay = self.config.interval;
        }

        self.screen.clear()?;
        self.screen.show(&format!("\n{}\n", FAREWELL))?;
        log::info!("Stopped after {} frames", self.frames);

        Ok(())
    }

    /// Sample every sensor once and replace the displayed frame.
    pub fn refresh(&mut self) -> Result<()> {
        self.screen.clear()?;
        let sample = Sample::read(&self.root);
        self.screen.show(&frame::render(&sample, &frame::timestamp_now()))?;
        self.frames += 1;

        Ok(())
    }
}

/// Wait for `delay`. Return `true` if `shutdown` completed first.
async fn sleep_or_shutdown<F>(delay: Duration, shutdown: &mut std::pin::Pin<&mut F>) -> bool
where
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = shutdown.as_mut() => true,
        _ = time::sleep(delay) => false,
    }
}
