// Service module exports

pub mod cache;
pub mod countdown;
pub mod refresh;
pub mod scheduler;
pub mod settings;
pub mod widget;
