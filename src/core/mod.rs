//! Core rule engine for avatar-clippy

pub mod checker;
pub mod clip_analyzer;
pub mod eye_look;
pub mod host;
pub mod ownership;
pub mod scene_graph;
pub mod state_graph;

pub use checker::{Checker, check_avatars};
pub use clip_analyzer::{analyze_clip, MUSCLE_NAMES};
pub use eye_look::check_eye_look;
pub use host::{AvatarHost, SceneSnapshot, load_scene, save_scene};
pub use ownership::OwnershipTable;
pub use scene_graph::walk_scene;
pub use state_graph::StateGraphWalker;
