//! Terminal screens: the login gate and the game scene.

pub mod common;
pub mod game_scene;
pub mod login;

pub use game_scene::{game_over_targets, render_game};
pub use login::{LoginAction, LoginScreen};
