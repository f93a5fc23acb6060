use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const POST: &str = r##"# Carte de test
type: test
titre: "Lancement <v2>"
objet: Verification
contexte: Avant la release
corps: Tout passe
resultats: OK
auteur: Thiago
"##;

fn write_config(dir: &Path, program: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let cfg_path = dir.join("cpost.toml");
    fs::write(&cfg_path, format!("[rasterizer]\nprogram = \"{}\"\n", program))?;
    Ok(cfg_path)
}

#[test]
fn convert_without_rasterizer_keeps_html() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let cfg_path = write_config(tmp.path(), "/nonexistent/cpost-htmltoimage")?;
    let post_path = tmp.path().join("card.cpost");
    fs::write(&post_path, POST)?;
    let save_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("cpost")?;
    cmd.env_remove("CPOST_RASTERIZER")
        .arg("--config-path")
        .arg(&cfg_path)
        .arg("convert")
        .arg(&post_path)
        .arg("--save-dir")
        .arg(&save_dir);

    cmd.assert().success();

    let html = fs::read_to_string(save_dir.join("Test(Lancement v2).html"))?;
    assert!(html.contains("<div class=\"title\">Lancement <v2></div>"));
    assert!(html.contains("background-color: red;"));
    assert!(!save_dir.join("Test(Lancement v2).png").exists());

    Ok(())
}

#[test]
fn convert_missing_field_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let cfg_path = write_config(tmp.path(), "/nonexistent/cpost-htmltoimage")?;
    let post_path = tmp.path().join("card.cpost");
    fs::write(&post_path, POST.replace("auteur: Thiago\n", ""))?;
    let save_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("cpost")?;
    cmd.arg("--config-path")
        .arg(&cfg_path)
        .arg("convert")
        .arg(&post_path)
        .arg("--save-dir")
        .arg(&save_dir);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("auteur"));

    assert_eq!(fs::read_dir(&save_dir)?.count(), 0);

    Ok(())
}

#[test]
fn sample_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let out = tmp.path().join("cpost.toml");

    Command::cargo_bin("cpost")?
        .arg("sample-config")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out)?;
    assert!(content.contains("[rasterizer]"));

    // Existing files are left alone
    Command::cargo_bin("cpost")?
        .arg("sample-config")
        .arg("--out")
        .arg(&out)
        .assert()
        .failure();

    Ok(())
}
