use chrono::{DateTime, Local};
use std::env;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub fn command_line_str() -> String {
    let args: Vec<String> = env::args().collect();

    args.join(" ")
}

// the generated filename will be stem-${uuid5}.ext, in the same directory as fname
pub fn generate_tmp_filename(fname: &Path) -> PathBuf {
    let now: DateTime<Local> = Local::now();

    let seed = format!(
        "{}-{}-{}",
        fname.display(),
        now.format("%Y-%m-%d %H:%M:%S%.9f"),
        std::process::id()
    );
    let uuid_v5 = Uuid::new_v5(&Uuid::NAMESPACE_DNS, seed.as_bytes());

    let stem = fname
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_name = match fname.extension() {
        Some(ext) => format!("{}-{}.{}", stem, uuid_v5, ext.to_string_lossy()),
        None => format!("{}-{}", stem, uuid_v5),
    };

    fname.with_file_name(tmp_name)
}
