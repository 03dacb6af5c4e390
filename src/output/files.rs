//! Writing the text and JSON maps to disk

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MapError, MapResult};
use crate::tree::Node;

use super::json::write_json;
use super::tree::render;

pub const TEXT_OUTPUT_FILE: &str = "directory_tree.txt";
pub const JSON_OUTPUT_FILE: &str = "directory_tree.json";

/// Paths of the files written by `write_outputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

/// Write `directory_tree.txt` and then `directory_tree.json` into `out_dir`.
///
/// A failure on the JSON file leaves the text file in place.
pub fn write_outputs(tree: &Node, out_dir: &Path) -> MapResult<OutputPaths> {
    let paths = OutputPaths {
        text: out_dir.join(TEXT_OUTPUT_FILE),
        json: out_dir.join(JSON_OUTPUT_FILE),
    };

    fs::write(&paths.text, render(tree)).map_err(|source| MapError::Write {
        path: paths.text.clone(),
        source,
    })?;
    info!("wrote {}", paths.text.display());

    write_json_file(tree, &paths.json)?;
    info!("wrote {}", paths.json.display());

    Ok(paths)
}

fn write_json_file(tree: &Node, path: &Path) -> MapResult<()> {
    let write_err = |source| MapError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_json(tree, &mut writer)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
