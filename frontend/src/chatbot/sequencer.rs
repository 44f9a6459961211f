use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use super::conversation::{Cue, Script};

/// Cues still waiting to fire, with their offsets from the script start.
#[derive(Debug, Default)]
pub struct CueQueue {
    pending: VecDeque<(u32, Cue)>,
    elapsed: u32,
}

impl CueQueue {
    /// Replace the queue with `script`, returning whatever was still pending.
    pub fn load(&mut self, script: Script) -> Vec<Cue> {
        let leftover = self.drain();
        self.pending = script.steps.into();
        self.elapsed = 0;
        leftover
    }

    /// Milliseconds to wait before the next cue is due.
    pub fn wait(&self) -> Option<u32> {
        self.pending
            .front()
            .map(|(at, _)| at.saturating_sub(self.elapsed))
    }

    /// Pop the next cue, advancing the clock to its offset.
    pub fn pop(&mut self) -> Option<Cue> {
        let (at, cue) = self.pending.pop_front()?;
        self.elapsed = self.elapsed.max(at);
        Some(cue)
    }

    pub fn drain(&mut self) -> Vec<Cue> {
        self.pending.drain(..).map(|(_, cue)| cue).collect()
    }
}

/// Plays one script at a time. Starting another script or calling
/// [`Sequencer::flush`] cancels the running task and delivers the remaining
/// cues immediately, so the conversation never ends up half told.
#[derive(Clone)]
pub struct Sequencer {
    queue: Rc<RefCell<CueQueue>>,
    generation: Rc<Cell<u32>>,
    sink: Callback<Cue>,
}

impl PartialEq for Sequencer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue)
    }
}

impl Sequencer {
    pub fn new(sink: Callback<Cue>) -> Self {
        Self {
            queue: Rc::default(),
            generation: Rc::default(),
            sink,
        }
    }

    pub fn play(&self, script: Script) {
        let generation = self.bump();
        let leftover = self.queue.borrow_mut().load(script);
        self.emit_all(leftover);

        let queue = self.queue.clone();
        let current = self.generation.clone();
        let sink = self.sink.clone();
        spawn_local(async move {
            loop {
                let Some(wait) = queue.borrow().wait() else {
                    return;
                };
                if wait > 0 {
                    TimeoutFuture::new(wait).await;
                }
                if current.get() != generation {
                    return;
                }
                let cue = queue.borrow_mut().pop();
                match cue {
                    Some(cue) => sink.emit(cue),
                    None => return,
                }
            }
        });
    }

    pub fn flush(&self) {
        self.bump();
        let leftover = self.queue.borrow_mut().drain();
        if !leftover.is_empty() {
            log::debug!("Fast-forwarding {} chat cues", leftover.len());
        }
        self.emit_all(leftover);
    }

    fn bump(&self) -> u32 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn emit_all(&self, cues: Vec<Cue>) {
        for cue in cues {
            self.sink.emit(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::conversation::ChatEntry;

    #[test]
    fn waits_are_relative_to_the_previous_cue() {
        let mut queue = CueQueue::default();
        assert!(queue.load(Script::greeting()).is_empty());
        let mut waits = Vec::new();
        while let Some(wait) = queue.wait() {
            waits.push(wait);
            queue.pop();
        }
        assert_eq!(waits, vec![400, 900, 1100, 1200]);
    }

    #[test]
    fn loading_a_new_script_hands_back_the_rest() {
        let mut queue = CueQueue::default();
        queue.load(Script::greeting());
        queue.pop();
        let leftover = queue.load(Script::site_no());
        assert_eq!(leftover.len(), 3);
        assert_eq!(leftover.last(), Some(&Cue::Post(ChatEntry::LanguageChoice)));
        assert_eq!(queue.wait(), Some(800));
    }

    #[test]
    fn cues_at_the_same_instant_fire_back_to_back() {
        let mut queue = CueQueue::default();
        queue.load(Script::site_yes());
        assert_eq!(queue.wait(), Some(0));
        queue.pop();
        assert_eq!(queue.wait(), Some(1600));
        queue.pop();
        assert_eq!(queue.wait(), Some(0));
        assert_eq!(queue.pop(), Some(Cue::HideLoader));
        assert_eq!(queue.drain().len(), 2);
        assert_eq!(queue.wait(), None);
    }
}
