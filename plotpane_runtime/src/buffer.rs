// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-buffered frame presentation.

use std::mem;
use std::sync::Mutex;

/// A double-buffered RGBA8 presentation target.
///
/// The render loop draws each frame into its own back buffer and then swaps
/// it in with [`present`](Self::present); the lock is held only for the
/// pointer swap, so presenters never block on rendering and never observe a
/// partially written frame.
#[derive(Debug)]
pub struct DoubleBuffer {
    width: u16,
    height: u16,
    front: Mutex<Vec<u8>>,
}

impl DoubleBuffer {
    /// Creates a buffer for `width` x `height` frames, initially blank.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height) * 4;
        Self {
            width,
            height,
            front: Mutex::new(vec![0; len]),
        }
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Atomically publishes `back` as the new front buffer.
    ///
    /// On return, `back` holds the previous front buffer, ready for reuse as
    /// the next frame's scratch space.
    pub fn present(&self, back: &mut Vec<u8>) {
        let mut front = self.front.lock().expect("front buffer lock poisoned");
        mem::swap(&mut *front, back);
    }

    /// Runs `f` against the most recently presented frame.
    pub fn with_front<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let front = self.front.lock().expect("front buffer lock poisoned");
        f(&front)
    }

    /// Copies out the most recently presented frame.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.with_front(<[u8]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_swaps_front_and_back() {
        let buffer = DoubleBuffer::new(1, 1);
        let mut back = vec![1, 2, 3, 4];
        buffer.present(&mut back);

        assert_eq!(buffer.snapshot(), [1, 2, 3, 4]);
        // The old front came back for reuse.
        assert_eq!(back, [0, 0, 0, 0]);
    }

    #[test]
    fn initial_front_is_blank_at_full_size() {
        let buffer = DoubleBuffer::new(4, 2);
        assert_eq!(buffer.snapshot().len(), 4 * 2 * 4);
        assert!(buffer.snapshot().iter().all(|&b| b == 0));
    }
}
