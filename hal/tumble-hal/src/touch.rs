//! Touch sensor abstractions
//!
//! The touch controller keeps an internal queue of touch reports and raises a
//! "message pending" line while the queue is non-empty. The application polls
//! the line and drains one report at a time.

/// Exclusive upper bound of raw sensor coordinates on both axes (12-bit)
pub const SENSOR_RANGE: u16 = 4096;

/// One raw touch report in sensor space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    /// Touch slot / finger identifier reported by the controller
    pub id: u8,
    /// Raw X in `0..SENSOR_RANGE`
    pub x: u16,
    /// Raw Y in `0..SENSOR_RANGE`
    pub y: u16,
    /// Controller status byte for this report
    pub status: u8,
}

impl TouchSample {
    /// Create a new sample
    pub const fn new(id: u8, x: u16, y: u16, status: u8) -> Self {
        Self { id, x, y, status }
    }
}

/// Touch controller with a polled report queue
pub trait TouchSensor {
    /// Error type for read operations
    type Error;

    /// Check whether at least one report is waiting to be read
    fn is_sample_pending(&mut self) -> bool;

    /// Read the next report from the controller queue
    ///
    /// A failed read consumes nothing the caller can recover; callers are
    /// expected to drop the sample and try again on the next poll.
    fn read_sample(&mut self) -> Result<TouchSample, Self::Error>;
}

impl<T: TouchSensor + ?Sized> TouchSensor for &mut T {
    type Error = T::Error;

    fn is_sample_pending(&mut self) -> bool {
        T::is_sample_pending(self)
    }

    fn read_sample(&mut self) -> Result<TouchSample, Self::Error> {
        T::read_sample(self)
    }
}
