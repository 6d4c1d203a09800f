use crate::window::Message;
use iced::Subscription;
use std::time::Duration;

/// One-shot quit timer. Once fired it stays disarmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    duration: Option<Duration>,
    fired: bool,
}

impl Lifetime {
    pub fn new(duration: Option<Duration>) -> Self {
        Self {
            duration,
            fired: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.duration.is_some() && !self.fired
    }

    pub fn is_immediate(&self) -> bool {
        self.is_armed() && self.duration == Some(Duration::ZERO)
    }

    /// Marks the timer as fired. Returns `true` only the first time.
    pub fn fire(&mut self) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.duration {
            Some(duration) if self.is_armed() && !duration.is_zero() => {
                iced::time::every(duration).map(|_| Message::Expired)
            }
            _ => Subscription::none(),
        }
    }
}
