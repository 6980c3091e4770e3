// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          sync::{Arc,
                 atomic::{AtomicBool, Ordering}},
          time::Duration};

use crate::{DEFAULT_ENDPOINT_ADDRESS, PollRead, Transport, TransportError};

/// One step of a [`ScriptedTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedRead {
    /// These bytes arrive (truncated to the read buffer size).
    Report(Vec<u8>),
    Timeout,
    Fail(rusb::Error),
}

/// A [`Transport`] that replays a fixed script of reads. Once the script runs out
/// every read fails with [`rusb::Error::NoDevice`], as if the mouse was unplugged.
///
/// The transport is usually moved into a [`crate::PollLoop`]; hold on to
/// [`ScriptedTransport::drop_observer`] to check that it was cleaned up.
#[derive(Debug)]
pub struct ScriptedTransport {
    script: VecDeque<ScriptedRead>,
    pub timeouts_seen: Vec<Duration>,
    is_dropped: Arc<AtomicBool>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = ScriptedRead>) -> Self {
        Self {
            script: script.into_iter().collect(),
            timeouts_seen: vec![],
            is_dropped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Becomes `true` when this transport is dropped.
    #[must_use]
    pub fn drop_observer(&self) -> Arc<AtomicBool> { self.is_dropped.clone() }
}

impl Transport for ScriptedTransport {
    fn read_report(
        &mut self,
        buffer: &mut [u8],
        timeout: Duration,
    ) -> Result<PollRead, TransportError> {
        self.timeouts_seen.push(timeout);
        let fail = |source| TransportError {
            endpoint: DEFAULT_ENDPOINT_ADDRESS,
            source,
        };
        match self.script.pop_front() {
            Some(ScriptedRead::Report(bytes)) => {
                let len = bytes.len().min(buffer.len());
                buffer[..len].copy_from_slice(&bytes[..len]);
                Ok(PollRead::Data(len))
            }
            Some(ScriptedRead::Timeout) => Ok(PollRead::Timeout),
            Some(ScriptedRead::Fail(source)) => Err(fail(source)),
            None => Err(fail(rusb::Error::NoDevice)),
        }
    }
}

impl Drop for ScriptedTransport {
    fn drop(&mut self) { self.is_dropped.store(true, Ordering::SeqCst); }
}
