use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extensions the configured symphonia codecs can decode.
pub const AUDIO_EXTENSIONS: &[&str] = &["aac", "flac", "m4a", "mp3", "ogg", "wav"];

/// A playable audio file reference. Immutable once enqueued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
}

impl Track {
    pub fn from_path(path: PathBuf) -> Self {
        let title = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { path, title }
    }
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// List the playable files directly inside `dir`, in directory iteration order.
pub fn scan(dir: &Path) -> Vec<Track> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_audio_file(entry.path()))
        .map(|entry| Track::from_path(entry.into_path()))
        .collect()
}

/// Resolve a requested file name against `dir`. Names are bare file names, not paths.
pub fn find_track(dir: &Path, name: &str) -> Option<Track> {
    if name.contains(['/', '\\']) {
        return None;
    }
    let path = dir.join(name);
    (path.is_file() && is_audio_file(&path)).then(|| Track::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_known_extensions_case_insensitive() {
        assert!(is_audio_file(Path::new("/tmp/a.mp3")));
        assert!(is_audio_file(Path::new("/tmp/a.MP3")));
        assert!(is_audio_file(Path::new("/tmp/a.flac")));
        assert!(is_audio_file(Path::new("/tmp/a.ogg")));
        assert!(!is_audio_file(Path::new("/tmp/a.txt")));
        assert!(!is_audio_file(Path::new("/tmp/a")));
    }

    #[test]
    fn track_title_is_the_file_name() {
        let track = Track::from_path(PathBuf::from("/music/one more song.mp3"));
        assert_eq!(track.title, "one more song.mp3");
    }

    #[test]
    fn scan_filters_non_audio_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("b.OGG"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let mut titles: Vec<String> = scan(dir.path()).into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["a.mp3", "b.OGG"]);
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "root.mp3");
    }

    #[test]
    fn scan_of_missing_directory_is_empty() {
        assert!(scan(Path::new("/definitely/not/here")).is_empty());
    }

    #[test]
    fn find_track_requires_an_existing_audio_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not audio").unwrap();

        let track = find_track(dir.path(), "song.mp3").unwrap();
        assert_eq!(track.title, "song.mp3");
        assert_eq!(track.path, dir.path().join("song.mp3"));

        assert!(find_track(dir.path(), "missing.mp3").is_none());
        assert!(find_track(dir.path(), "notes.txt").is_none());
    }

    #[test]
    fn find_track_rejects_path_names() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.mp3"), b"not real").unwrap();
        assert!(find_track(dir.path(), "../song.mp3").is_none());
        assert!(find_track(dir.path(), "sub/song.mp3").is_none());
    }
}
