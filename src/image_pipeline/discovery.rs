//! Input discovery
//!
//! The converter takes no path arguments; it picks up the single matrix
//! text file sitting in the working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Extension of the matrix text files the converter consumes.
pub const INPUT_EXTENSION: &str = "txt";

/// Extension of the raster images the converter produces.
pub const OUTPUT_EXTENSION: &str = "png";

/// Locates the single `.txt` input file in `dir`.
///
/// Exactly one match is required: zero candidates is an error, and so are
/// two or more, with the candidates listed so the caller can disambiguate.
pub fn discover_input<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_EXTENSION)
        })
        .collect();
    matches.sort();

    debug!(
        "Found {} candidate input file(s) in {}",
        matches.len(),
        dir.display()
    );

    match matches.len() {
        0 => Err(ConversionError::InputNotFound(
            INPUT_EXTENSION.to_string(),
            dir.display().to_string(),
        )),
        1 => Ok(matches.remove(0)),
        _ => {
            let names = matches
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(ConversionError::AmbiguousInput(
                INPUT_EXTENSION.to_string(),
                names,
            ))
        }
    }
}

/// Derives the output path from the input path by swapping the extension.
pub fn output_path_for<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("render.txt"), "0").unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();

        let found = discover_input(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "render.txt");
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = discover_input(dir.path()).unwrap_err();
        assert!(matches!(err, ConversionError::InputNotFound(_, _)));
    }

    #[test]
    fn multiple_candidates_are_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "0").unwrap();
        std::fs::write(dir.path().join("b.txt"), "0").unwrap();

        let err = discover_input(dir.path()).unwrap_err();
        assert!(matches!(err, ConversionError::AmbiguousInput(_, _)));
        assert!(err.to_string().contains("a.txt"));
        assert!(err.to_string().contains("b.txt"));
    }

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(output_path_for("render.txt"), PathBuf::from("render.png"));
        assert_eq!(
            output_path_for("/tmp/scene.out.txt"),
            PathBuf::from("/tmp/scene.out.png")
        );
    }
}
