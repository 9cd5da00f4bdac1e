//! Exercise and resource suggestions.

pub mod exercises;
pub mod resources;

pub use exercises::{random_exercise, select_exercise, Exercise, ExerciseCategory};
pub use resources::{select_resources, ResourceBundle, ResourceEntry};
