pub mod conversation;
pub mod faq;
pub mod sequencer;
pub mod widget;
