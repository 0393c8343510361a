//! Integration tests for building, persisting, and searching an index.
//!
//! Directories are real temp directories. Tag decoding uses either the real
//! container reader on ID3-tagged fixtures or a canned reader.

use id3::{TagLike, Version};
use soundboard_core::{
    build_index, find_best, rank, AudioKind, BuildReporter, IndexBuilder, IndexStore,
    SoundIndex, SoundboardError, TagField, TagMap, TagReadError, TagReader,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Tag reader serving canned tags by file name; unknown files have no tags.
#[derive(Default)]
struct CannedReader {
    tags: HashMap<String, Vec<(TagField, &'static str)>>,
}

impl CannedReader {
    fn with(mut self, name: &str, tags: &[(TagField, &'static str)]) -> Self {
        self.tags.insert(name.to_string(), tags.to_vec());
        self
    }
}

impl TagReader for CannedReader {
    fn read_tags(&self, path: &Path, _kind: AudioKind) -> Result<TagMap, TagReadError> {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        Ok(self
            .tags
            .get(&name)
            .map(|pairs| {
                pairs
                    .iter()
                    .map(|(field, value)| (*field, value.to_string()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[derive(Default)]
struct CountingReporter {
    unsupported: RefCell<Vec<PathBuf>>,
    missing: RefCell<Vec<PathBuf>>,
}

impl BuildReporter for CountingReporter {
    fn unsupported_extension(&self, path: &Path) {
        self.unsupported.borrow_mut().push(path.to_path_buf());
    }

    fn missing_metadata(&self, path: &Path) {
        self.missing.borrow_mut().push(path.to_path_buf());
    }

    fn indexed(&self, _path: &Path, _tag_values: usize) {}

    fn non_utf8_name(&self, _path: &Path) {}
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; 128]).unwrap();
    path
}

fn write_id3(path: &Path, title: &str, artist: Option<&str>) {
    let mut tag = id3::Tag::new();
    tag.set_title(title);
    if let Some(artist) = artist {
        tag.set_artist(artist);
    }
    tag.write_to_path(path, Version::Id3v24).unwrap();
}

/// `a.mp3` titled "Blue Moon", untagged `b.ogg`, and `c.txt`.
fn create_scenario_dir() -> (TempDir, CannedReader) {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.mp3");
    touch(dir.path(), "b.ogg");
    touch(dir.path(), "c.txt");
    let reader = CannedReader::default().with("a.mp3", &[(TagField::Title, "Blue Moon")]);
    (dir, reader)
}

fn dir_string(dir: &TempDir) -> String {
    format!("{}/", dir.path().display())
}

#[test]
fn test_scenario_index_and_best_match() {
    let (dir, reader) = create_scenario_dir();

    let index = IndexBuilder::new()
        .with_reader(reader)
        .build(dir.path())
        .unwrap();

    let expected: SoundIndex = serde_json::from_str(
        r#"{"a.mp3": ["a.mp3", "Blue Moon"], "b.ogg": ["b.ogg"], "c.txt": ["c.txt"]}"#,
    )
    .unwrap();
    assert_eq!(index, expected);

    assert_eq!(find_best("Blue", &index).unwrap(), ("a.mp3".to_string(), 3));
}

#[test]
fn test_real_id3_tags_are_searchable() {
    let dir = TempDir::new().unwrap();
    let tagged = touch(dir.path(), "track01.mp3");
    write_id3(&tagged, "Blue Moon", Some("Billie Holiday"));
    touch(dir.path(), "untagged.mp3");
    touch(dir.path(), "notes.txt");
    let reporter = CountingReporter::default();

    let index = IndexBuilder::new()
        .with_reporter(&reporter)
        .build(dir.path())
        .unwrap();

    assert_eq!(index.len(), 3);
    let searchable = index.get("track01.mp3").unwrap();
    assert_eq!(searchable.len(), 3);
    assert_eq!(searchable[0], "track01.mp3");
    let values: HashSet<&str> = searchable[1..].iter().map(String::as_str).collect();
    assert_eq!(values, HashSet::from(["Blue Moon", "Billie Holiday"]));

    assert_eq!(index.get("untagged.mp3").unwrap(), &["untagged.mp3"]);
    assert_eq!(*reporter.missing.borrow(), vec![dir.path().join("untagged.mp3")]);
    assert_eq!(*reporter.unsupported.borrow(), vec![dir.path().join("notes.txt")]);

    let (best, count) = find_best("Holiday", &index).unwrap();
    assert_eq!(best, "track01.mp3");
    assert_eq!(count, 3);
}

#[test]
fn test_only_unrecognized_files() {
    let dir = TempDir::new().unwrap();
    for name in ["readme.md", "cover.png", "playlist.m3u", "noext"] {
        touch(dir.path(), name);
    }

    let index = build_index(dir.path()).unwrap();

    assert_eq!(index.len(), 4);
    for (name, searchable) in index.iter() {
        assert_eq!(searchable.len(), 1);
        assert_eq!(searchable[0], name);
    }
}

#[test]
fn test_persisted_round_trip_equals_fresh_build() {
    let (dir, reader) = create_scenario_dir();
    let store_dir = TempDir::new().unwrap();
    let store = IndexStore::new(store_dir.path());
    let key = dir_string(&dir);

    let builder = IndexBuilder::new().with_reader(reader);
    let built = builder.build(dir.path()).unwrap();
    store.persist(&key, &built).unwrap();

    assert_eq!(store.load(&key).unwrap(), built);
    assert_eq!(builder.build(dir.path()).unwrap(), built);
}

#[test]
fn test_rebuild_then_load_matches_transient_search() {
    let (dir, reader) = create_scenario_dir();
    let store_dir = TempDir::new().unwrap();
    let store = IndexStore::new(store_dir.path());
    let key = dir_string(&dir);
    let builder = IndexBuilder::new().with_reader(reader);

    // First run: rebuild and persist.
    store.persist(&key, &builder.build(&key).unwrap()).unwrap();

    // Second run: search the persisted index.
    let from_store = find_best("Moon", &store.load(&key).unwrap()).unwrap();
    // Third run: search a transient build.
    let transient = find_best("Moon", &builder.build(&key).unwrap()).unwrap();

    assert_eq!(from_store, transient);
    assert_eq!(from_store.0, "a.mp3");
}

#[test]
fn test_load_without_persist_does_not_fall_back() {
    let (dir, _reader) = create_scenario_dir();
    let store_dir = TempDir::new().unwrap();
    let store = IndexStore::new(store_dir.path());

    let result = store.load(&dir_string(&dir));
    assert!(matches!(result, Err(SoundboardError::IndexNotFound { .. })));
}

#[test]
fn test_ranking_scores_independent_of_insertion_order() {
    let (dir, reader) = create_scenario_dir();
    let index = IndexBuilder::new()
        .with_reader(reader)
        .build(dir.path())
        .unwrap();

    let mut reversed = SoundIndex::new();
    let mut entries: Vec<(&str, &[String])> = index.iter().collect();
    entries.reverse();
    for (name, searchable) in entries {
        reversed.insert(
            soundboard_core::IndexEntry::new(name)
                .with_values(searchable[1..].iter().cloned()),
        );
    }

    let pairs = |index: &SoundIndex| -> HashSet<(String, u8)> {
        rank("Blue", index)
            .scored()
            .iter()
            .map(|c| (c.file_name.clone(), c.score))
            .collect()
    };
    assert_eq!(pairs(&index), pairs(&reversed));
}

#[test]
fn test_find_best_returns_indexed_name_and_count() {
    let dir = TempDir::new().unwrap();
    for name in ["kick.ogg", "snare.ogg", "hat.mp3", "clap.wav", "crash.txt"] {
        touch(dir.path(), name);
    }
    let index = IndexBuilder::new()
        .with_reader(CannedReader::default())
        .build(dir.path())
        .unwrap();

    for query in ["snare", "cymbal", "", "h"] {
        let (name, count) = find_best(query, &index).unwrap();
        assert!(index.contains(&name), "{} not in index", name);
        assert_eq!(count, 5);
    }
}

#[test]
fn test_empty_directory_has_no_candidates() {
    let dir = TempDir::new().unwrap();
    let index = build_index(dir.path()).unwrap();

    assert!(matches!(
        find_best("anything", &index),
        Err(SoundboardError::NoCandidates)
    ));
}
