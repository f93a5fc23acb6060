use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;

const CONFIG_SAMPLE: &str = r#"# If you want a path to be relative to the executable directory
# use ${exe_dir}/location
[rasterizer]
# HTML to image converter, called as: program --format <format> <input.html> <output>
# The CPOST_RASTERIZER environment variable overrides it
program = "wkhtmltoimage"
format = "png"

[defaults]
save_dir = "./posts"
extension = "cpost"
# template_path = "${exe_dir}/card.html"

[log]
level = "Info"
log_to_console = true
# location = "cpost.log"
"#;

/// Never overwrites an existing file
pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}
