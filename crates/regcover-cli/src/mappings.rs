//! Mapping file loading.
//!
//! A mapping file is a whitespace-separated token stream read in pairs:
//! `<regulator> <target> <regulator> <target> ...`. Line breaks carry no
//! meaning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regcover_core::{RegcoverError, RelationStore};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Could not open file '{}' for reading: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Store(#[from] RegcoverError),
}

/// Reads a mapping file into an open store.
pub fn read_mappings(path: &Path) -> Result<RelationStore, MappingError> {
    let contents = fs::read_to_string(path).map_err(|source| MappingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(event = "mappings_read", path = %path.display(), bytes = contents.len());
    Ok(parse_mappings(&contents)?)
}

/// Parses a token stream into an open store.
///
/// An unpaired final token is logged and dropped.
pub fn parse_mappings(contents: &str) -> Result<RelationStore, RegcoverError> {
    let mut store = RelationStore::new();
    let mut tokens = contents.split_whitespace();
    while let Some(regulator) = tokens.next() {
        match tokens.next() {
            Some(target) => {
                store.add(regulator, target)?;
            }
            None => warn!(
                event = "dangling_token",
                token = regulator,
                "ignoring unpaired token at end of mapping file"
            ),
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_span_lines() {
        let store = parse_mappings("r1 t1\nr1\tt2 r2\n t2\n").unwrap();
        assert_eq!(store.num_mappings(), 3);
        assert_eq!(store.num_regulators(), 2);
        assert_eq!(store.num_targets(), 2);
        assert!(!store.is_finalized());
    }

    #[test]
    fn test_duplicates_are_counted_before_finalize() {
        let mut store = parse_mappings("r1 t1 r1 t1").unwrap();
        assert_eq!(store.num_mappings(), 2);
        store.finalize();
        assert_eq!(store.num_mappings(), 1);
    }

    #[test]
    fn test_dangling_token_is_ignored() {
        let store = parse_mappings("r1 t1 r2").unwrap();
        assert_eq!(store.num_mappings(), 1);
        assert_eq!(store.regulator(1), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_mappings(" \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_mappings(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, MappingError::Read { .. }));
        assert!(err.to_string().starts_with("Could not open file 'does/not/exist.txt'"));
    }
}
