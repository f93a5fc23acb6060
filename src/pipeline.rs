use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use spdlog::{error, info};

use crate::error::{CardError, CardResult};
use crate::post::PostDocument;
use crate::rasterizer::Rasterizer;
use crate::view::card_renderer::{base_file_name, CardRenderer};

#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub html_path: PathBuf,
    /// None when the image conversion failed
    pub image_path: Option<PathBuf>,
}

/// load -> render -> write HTML -> rasterize.
///
/// Loading or writing errors abort the save. A failing rasterizer is only
/// logged, the HTML file stays on disk.
pub fn save_card(
    post_path: &Path,
    save_dir: &Path,
    renderer: &CardRenderer,
    rasterizer: &impl Rasterizer,
    now: &NaiveDateTime,
) -> CardResult<SaveReport> {
    fs::create_dir_all(save_dir).map_err(|source| CardError::Write {
        path: save_dir.to_path_buf(),
        source,
    })?;

    let doc = PostDocument::load(post_path)?;
    let html = renderer.render(&doc, now);

    info!("Saving files into {}", save_dir.display());

    let base_name = base_file_name(&doc);
    let html_path = save_dir.join(format!("{}.html", base_name));
    fs::write(&html_path, html).map_err(|source| CardError::Write {
        path: html_path.clone(),
        source,
    })?;
    info!("HTML file created: {}", html_path.display());

    let image_path = save_dir.join(format!("{}.{}", base_name, rasterizer.extension()));
    let image_path = match rasterizer.rasterize(&html_path, &image_path) {
        Ok(()) => {
            info!("Image created: {}", image_path.display());
            Some(image_path)
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    };

    Ok(SaveReport {
        html_path,
        image_path,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    use crate::test_data::{POST_DATA, POST_DATA_NO_AUTHOR};

    use super::*;

    /// Writes a fake image instead of calling an external program
    pub(crate) struct FakeRasterizer {
        pub fail: bool,
    }

    impl Rasterizer for FakeRasterizer {
        fn rasterize(&self, html_path: &Path, image_path: &Path) -> CardResult<()> {
            if self.fail {
                return Err(CardError::Rasterizer("simulated failure".to_string()));
            }
            let html = fs::read(html_path).unwrap();
            fs::write(image_path, html).unwrap();
            Ok(())
        }

        fn extension(&self) -> &str {
            "png"
        }
    }

    pub(crate) fn write_post(dir: &Path, content: &str) -> PathBuf {
        let post_path = dir.join("post.cpost");
        fs::write(&post_path, content).unwrap();
        post_path
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            NaiveTime::from_hms_opt(h, m, s).unwrap(),
        )
    }

    #[test]
    fn test_save_card() {
        let tmp = TempDir::new().unwrap();
        let post_path = write_post(tmp.path(), POST_DATA);
        let save_dir = tmp.path().join("out").join("posts");
        let renderer = CardRenderer::builtin().unwrap();

        let report = save_card(&post_path, &save_dir, &renderer, &FakeRasterizer { fail: false }, &at(10, 0, 0)).unwrap();

        assert_eq!(report.html_path, save_dir.join("Fix(Crash au démarrage bécranb noir).html"));
        assert_eq!(report.image_path, Some(save_dir.join("Fix(Crash au démarrage bécranb noir).png")));
        let html = fs::read_to_string(&report.html_path).unwrap();
        assert!(html.contains("<div class=\"title\">Crash au démarrage: <b>écran</b> noir?</div>"));
        assert!(report.image_path.unwrap().exists());
    }

    #[test]
    fn test_save_twice_only_timestamp_differs() {
        let tmp = TempDir::new().unwrap();
        let post_path = write_post(tmp.path(), POST_DATA);
        let save_dir = tmp.path().join("posts");
        let renderer = CardRenderer::builtin().unwrap();
        let rasterizer = FakeRasterizer { fail: false };

        let first = save_card(&post_path, &save_dir, &renderer, &rasterizer, &at(10, 0, 0)).unwrap();
        let first_html = fs::read_to_string(&first.html_path).unwrap();
        let second = save_card(&post_path, &save_dir, &renderer, &rasterizer, &at(11, 30, 0)).unwrap();
        let second_html = fs::read_to_string(&second.html_path).unwrap();

        assert_eq!(first.html_path, second.html_path);
        assert_ne!(first_html, second_html);
        assert_eq!(first_html.replace("17/05/2024 10:00:00", "17/05/2024 11:30:00"), second_html);
    }

    #[test]
    fn test_missing_field_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let post_path = write_post(tmp.path(), POST_DATA_NO_AUTHOR);
        let save_dir = tmp.path().join("posts");
        let renderer = CardRenderer::builtin().unwrap();

        let res = save_card(&post_path, &save_dir, &renderer, &FakeRasterizer { fail: false }, &at(10, 0, 0));

        assert!(matches!(res, Err(CardError::MissingField("auteur"))));
        assert_eq!(fs::read_dir(&save_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_rasterizer_failure_keeps_html() {
        let tmp = TempDir::new().unwrap();
        let post_path = write_post(tmp.path(), POST_DATA);
        let save_dir = tmp.path().join("posts");
        let renderer = CardRenderer::builtin().unwrap();

        let report = save_card(&post_path, &save_dir, &renderer, &FakeRasterizer { fail: true }, &at(10, 0, 0)).unwrap();

        assert!(report.html_path.exists());
        assert_eq!(report.image_path, None);
        assert!(!save_dir.join("Fix(Crash au démarrage bécranb noir).png").exists());
    }

    #[test]
    fn test_unreadable_post() {
        let tmp = TempDir::new().unwrap();
        let renderer = CardRenderer::builtin().unwrap();
        let res = save_card(&tmp.path().join("missing.cpost"), tmp.path(), &renderer,
                            &FakeRasterizer { fail: false }, &at(10, 0, 0));
        assert!(matches!(res, Err(CardError::Read { .. })));
    }
}
