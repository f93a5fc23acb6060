use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Select, Text};
use spdlog::warn;

use cpost::config::Defaults;
use cpost::rasterizer::Rasterizer;
use cpost::session::Session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum MenuAction {
    Open,
    Save,
    Quit,
}

impl Display for MenuAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::Open => write!(f, "Ouvrir"),
            MenuAction::Save => write!(f, "Sauvegarder"),
            MenuAction::Quit => write!(f, "Quitter"),
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn check_post_path(answer: &str) -> Validation {
    if Path::new(answer).is_file() {
        Validation::Valid
    } else {
        Validation::Invalid("fichier introuvable".into())
    }
}

/// `None` when the user cancels
fn pick_file(extension: &str) -> Result<Option<PathBuf>, InquireError> {
    let answer = Text::new(&format!("Fichier .{} à ouvrir:", extension))
        .with_help_message("Esc pour annuler")
        .with_validator(|s: &str| Ok(check_post_path(s)))
        .prompt_skippable()?;

    let Some(answer) = answer else {
        return Ok(None);
    };

    let path = PathBuf::from(answer);
    if has_extension(&path, extension) {
        return Ok(Some(path));
    }

    // "All files" fallback
    let open_anyway = Confirm::new(&format!("{} n'est pas un fichier .{}. Ouvrir quand même ?", path.display(), extension))
        .with_default(false)
        .prompt_skippable()?
        .unwrap_or(false);

    Ok(open_anyway.then_some(path))
}

/// `None` when the user cancels
fn ask_save_dir(current: &str) -> Result<Option<String>, InquireError> {
    Text::new("Dossier de sauvegarde:")
        .with_initial_value(current)
        .prompt_skippable()
}

/// Ctrl-C or Esc on the menu, Ctrl-C on any other prompt
fn closes_form(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub(crate) fn run<R: Rasterizer>(session: &mut Session<R>, defaults: &Defaults) -> Result<(), InquireError> {
    let mut save_dir = defaults.save_dir.clone();
    let actions = vec![MenuAction::Open, MenuAction::Save, MenuAction::Quit];

    loop {
        match session.post_path() {
            Some(path) => println!("Fichier: {}", path.display()),
            None => println!("Choisir le fichier .{}:", defaults.extension),
        }

        let action = match Select::new("Action", actions.clone()).prompt() {
            Ok(action) => action,
            Err(e) if closes_form(&e) => break,
            Err(e) => return Err(e),
        };

        match action {
            MenuAction::Open => match pick_file(&defaults.extension) {
                Ok(path) => session.choose_file(path),
                Err(e) if closes_form(&e) => break,
                Err(e) => return Err(e),
            },
            MenuAction::Save => {
                let answer = match ask_save_dir(&save_dir) {
                    Ok(answer) => answer,
                    Err(e) if closes_form(&e) => break,
                    Err(e) => return Err(e),
                };
                if let Some(answer) = answer {
                    save_dir = answer;
                    // Errors are already reported by the session
                    if let Ok(report) = session.save(&save_dir) {
                        if report.image_path.is_none() {
                            warn!("Seule la carte HTML a été produite: {}", report.html_path.display());
                        }
                    }
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
