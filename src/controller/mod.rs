//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and applies it to the model. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Play / pause / next / previous actions
//! - `navigation`: Search input and storefront cursor movement

mod input;
mod playback;
mod navigation;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }
}
