//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `mouse`: Mouse drag-and-drop and page button clicks
//! - `catalog`: The one-shot catalog load fired by CAPTCHA verification

mod input;
mod mouse;
mod catalog;

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
