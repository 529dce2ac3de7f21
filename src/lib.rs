pub mod args;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod gesture;
pub mod json_runner;
pub mod sampler;

pub use gesture::{TapClassifier, TouchEvent};
pub use sampler::{sample, SampleError, Sampler};
