/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use densemat::{Dimensions, Matrix};
use rand::{rngs::StdRng, Rng};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Create a subscriber for the integration tests.
///
/// This subscriber returns a `Guard` that will only install the subscriber locally,
/// allowing test threads to have non-conflicting subscribers.
pub fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .set_default()
}

/// A writer that records captured log output into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a thread-local subscriber writing into the returned buffer.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        Self::install_at(LevelFilter::DEBUG)
    }

    /// Like [`CapturedLogs::install`], recording events at `level` or above.
    pub fn install_at(level: LevelFilter) -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(move || writer.clone());

        let guard = tracing_subscriber::registry()
            .with(level)
            .with(fmt_layer)
            .set_default();
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("poisoned log buffer"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Return a random shape with up to `max` rows and columns.
pub fn random_dims(rng: &mut StdRng, max: isize) -> Dimensions {
    let max = max as i64;
    let rows = rng.random_range(1..=max) as isize;
    let cols = rng.random_range(1..=max) as isize;
    Dimensions::new(rows, cols).unwrap()
}

/// Return a matrix of the given shape filled with values in `-100..100`.
pub fn random_matrix(rng: &mut StdRng, dims: Dimensions) -> Matrix<i64> {
    let data = (0..dims.size())
        .map(|_| rng.random_range(-100..100))
        .collect();
    Matrix::try_from_vec(dims, data).unwrap()
}
