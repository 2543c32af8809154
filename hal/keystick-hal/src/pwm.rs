//! PWM output abstraction

/// Single PWM channel
pub trait PwmOutput {
    /// Counter wrap value; a duty of `max_duty()` is always high
    fn max_duty(&self) -> u16;

    /// Set the compare level
    ///
    /// Values above `max_duty()` are clamped by implementations.
    fn set_duty(&mut self, duty: u16);

    /// Set a 50% square wave
    fn set_half_duty(&mut self) {
        let half = self.max_duty() / 2;
        self.set_duty(half);
    }

    /// Hold the output low
    fn disable(&mut self) {
        self.set_duty(0);
    }
}
