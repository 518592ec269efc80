// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

/// A 1-D span along one axis, stored as a start position and a length.
///
/// The end and midpoint are derived, and their setters translate the whole
/// interval rather than resizing it. A negative `size` is accepted and
/// simply yields `max() < min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub size: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(min: f64, size: f64) -> Self {
        Self { min, size }
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.min + self.size
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        self.min + self.size / 2.0
    }

    /// Translates the interval so that its start lands on `min`.
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    /// Translates the interval so that its end lands on `max`.
    pub fn set_max(&mut self, max: f64) {
        self.min += max - self.max();
    }

    /// Translates the interval so that its midpoint lands on `mid`.
    pub fn set_mid(&mut self, mid: f64) {
        self.min += mid - self.mid();
    }
}
