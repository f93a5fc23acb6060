use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use spdlog::{error, info};

use crate::error::{CardError, CardResult};
use crate::pipeline::{save_card, SaveReport};
use crate::rasterizer::Rasterizer;
use crate::view::card_renderer::CardRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No post file chosen yet
    Idle,
    FileChosen,
    /// Last save went through, possibly without the image
    Saved,
}

/// State behind the converter form: the chosen post file and the save action.
pub struct Session<R: Rasterizer> {
    renderer: CardRenderer,
    rasterizer: R,
    post_path: Option<PathBuf>,
    state: SessionState,
}

impl<R: Rasterizer> Session<R> {
    pub fn new(renderer: CardRenderer, rasterizer: R) -> Session<R> {
        Session {
            renderer,
            rasterizer,
            post_path: None,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn post_path(&self) -> Option<&Path> {
        self.post_path.as_deref()
    }

    /// `None` means the picker was cancelled, the session is left untouched.
    pub fn choose_file(&mut self, path: Option<PathBuf>) {
        if let Some(path) = path {
            info!("File: {}", path.display());
            self.post_path = Some(path);
            self.state = SessionState::FileChosen;
        }
    }

    pub fn save(&mut self, save_dir: &str) -> CardResult<SaveReport> {
        self.save_at(save_dir, &Local::now().naive_local())
    }

    /// Failed preconditions and aborted saves keep the current state.
    pub fn save_at(&mut self, save_dir: &str, now: &NaiveDateTime) -> CardResult<SaveReport> {
        let post_path = match self.post_path {
            Some(ref path) => path,
            None => {
                error!("{}", CardError::FileNotSelected);
                return Err(CardError::FileNotSelected);
            }
        };

        if save_dir.trim().is_empty() {
            error!("{}", CardError::SaveDirEmpty);
            return Err(CardError::SaveDirEmpty);
        }

        match save_card(post_path, Path::new(save_dir), &self.renderer, &self.rasterizer, now) {
            Ok(report) => {
                self.state = SessionState::Saved;
                Ok(report)
            }
            Err(e) => {
                error!("Save aborted: {}", e);
                Err(e)
            }
        }
    }
}
