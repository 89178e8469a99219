pub mod engine;

pub use engine::{Difficulty, Engine};
