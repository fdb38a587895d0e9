//! # Observable Values
//!
//! A holder for the latest value of something, plus a list of subscribers that
//! get a copy of every new value. Subscribers are plain `mpsc` receivers, so a
//! consumer drains them whenever it likes (the TUI does it once per frame).
//!
//! ```text
//! set(v) ──▶ value = v
//!        ├─▶ tx[0].send(v.clone())
//!        └─▶ tx[1].send(v.clone())   (dropped receivers are pruned)
//! ```

use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug)]
pub struct Observable<T: Clone> {
    value: T,
    subscribers: Vec<Sender<T>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a new subscriber. It only sees values set after this call.
    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Replace the value wholesale and notify every live subscriber.
    pub(crate) fn set(&mut self, value: T) {
        self.value = value;
        let current = &self.value;
        self.subscribers.retain(|tx| tx.send(current.clone()).is_ok());
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
