// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

type EpochNumber = usize;

const INITIAL_EPOCH_NUMBER: EpochNumber = 0;

type SequenceNumber = usize;

const INITIAL_SEQUENCE_NUMBER: SequenceNumber = 0;

/// Tracks the latest request of a roundtrip.
///
/// Odd sequence numbers denote a pending request. Starting a new
/// request while another one is pending supersedes the former.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Watermark {
    epoch: EpochNumber,
    sequence: SequenceNumber,
}

impl Watermark {
    pub const INITIAL: Self = Self {
        epoch: INITIAL_EPOCH_NUMBER,
        sequence: INITIAL_SEQUENCE_NUMBER,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        self.sequence % 2 != 0
    }

    /// Invalidate all pending tokens.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.sequence = INITIAL_SEQUENCE_NUMBER;
    }

    #[must_use]
    pub fn start_pending(&mut self) -> PendingToken {
        self.bump_sequence();
        if !self.is_pending() {
            self.bump_sequence();
        }
        debug_assert!(self.is_pending());
        PendingToken(*self)
    }

    /// Finish the pending request of the given token.
    ///
    /// Returns `false` if the token has been superseded or invalidated.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        let PendingToken(pending) = token;
        debug_assert!(pending.is_pending());
        if *self != pending {
            return false;
        }
        self.bump_sequence();
        debug_assert!(!self.is_pending());
        true
    }

    fn bump_sequence(&mut self) {
        self.sequence = self.sequence.wrapping_add(1);
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a pending request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PendingToken(Watermark);

#[cfg(test)]
mod tests;
