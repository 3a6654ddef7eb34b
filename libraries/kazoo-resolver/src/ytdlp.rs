//! `yt-dlp` subprocess wrapper
//!
//! Metadata comes from `yt-dlp -J` (single JSON document on stdout);
//! downloads use `--print after_move:filepath` so the final audio path
//! can be read back without guessing at extensions.

use crate::{is_url, ResolvedSong, Resolver, ResolverError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Downloaded files are named so the extractor and video id survive
/// restarts and the same song is never fetched twice.
const OUTPUT_TEMPLATE: &str = "%(extractor)s-%(id)s-%(title)s.%(ext)s";

/// One entry of `yt-dlp -J` output
///
/// A direct URL yields the fields inline; a search yields them nested
/// under `entries`.
#[derive(Debug, Deserialize)]
struct Metadata {
    title: Option<String>,
    webpage_url: Option<String>,
    thumbnail: Option<String>,
    #[serde(default)]
    entries: Vec<Metadata>,
}

impl Metadata {
    fn into_song(self, query: &str) -> Result<ResolvedSong> {
        let entry = if self.entries.is_empty() {
            self
        } else {
            self.entries
                .into_iter()
                .next()
                .ok_or_else(|| ResolverError::NoResults(query.to_string()))?
        };

        match (entry.title, entry.webpage_url) {
            (Some(title), Some(url)) => Ok(ResolvedSong {
                title,
                url,
                thumbnail: entry.thumbnail,
            }),
            _ => Err(ResolverError::NoResults(query.to_string())),
        }
    }
}

fn parse_metadata(json: &str, query: &str) -> Result<ResolvedSong> {
    let metadata: Metadata = serde_json::from_str(json)?;
    metadata.into_song(query)
}

/// Song resolver backed by the `yt-dlp` binary
pub struct YtDlpResolver {
    binary: PathBuf,
    songs_dir: PathBuf,
}

impl YtDlpResolver {
    /// Create a resolver
    ///
    /// `binary` is the `yt-dlp` executable (a bare name resolves through
    /// `PATH`); `songs_dir` is where downloaded audio lands.
    pub fn new(binary: impl Into<PathBuf>, songs_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            songs_dir: songs_dir.into(),
        }
    }

    async fn run(&self, args: &[&str], input: &str) -> Result<Output> {
        debug!(?args, "running yt-dlp");
        let output = Command::new(&self.binary).args(args).output().await?;

        if !output.status.success() {
            return Err(ResolverError::CommandFailed {
                input: input.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }
}

#[async_trait]
impl Resolver for YtDlpResolver {
    async fn resolve(&self, query: &str) -> Result<ResolvedSong> {
        let target = if is_url(query) {
            query.to_string()
        } else {
            format!("ytsearch1:{query}")
        };

        let output = self
            .run(&["-J", "--no-playlist", &target], query)
            .await?;

        let json = String::from_utf8_lossy(&output.stdout);
        parse_metadata(&json, query)
    }

    async fn download(&self, url: &str) -> Result<PathBuf> {
        let template = self.songs_dir.join(OUTPUT_TEMPLATE);
        let template = template.to_string_lossy();
        let output = self
            .run(
                &[
                    "-f",
                    "bestaudio",
                    "--restrict-filenames",
                    "--no-playlist",
                    "--no-simulate",
                    "--print",
                    "after_move:filepath",
                    "-o",
                    template.as_ref(),
                    url,
                ],
                url,
            )
            .await?;

        let path = String::from_utf8_lossy(&output.stdout);
        let path = path.trim();
        if path.is_empty() {
            return Err(ResolverError::NoResults(url.to_string()));
        }

        Ok(Path::new(path).to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_metadata;
    use crate::ResolverError;

    #[test]
    fn parses_direct_url_metadata() {
        let json = r#"{
            "title": "Test Song",
            "webpage_url": "https://www.youtube.com/watch?v=abc123",
            "thumbnail": "https://i.ytimg.com/vi/abc123/hq720.jpg",
            "duration": 212
        }"#;

        let song = parse_metadata(json, "https://www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(song.title, "Test Song");
        assert_eq!(song.url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(
            song.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/abc123/hq720.jpg")
        );
    }

    #[test]
    fn parses_search_metadata_first_entry_wins() {
        let json = r#"{
            "title": "test query",
            "entries": [
                {
                    "title": "First Hit",
                    "webpage_url": "https://www.youtube.com/watch?v=first",
                    "thumbnail": null
                },
                {
                    "title": "Second Hit",
                    "webpage_url": "https://www.youtube.com/watch?v=second"
                }
            ]
        }"#;

        let song = parse_metadata(json, "test query").unwrap();
        assert_eq!(song.title, "First Hit");
        assert_eq!(song.url, "https://www.youtube.com/watch?v=first");
        assert!(song.thumbnail.is_none());
    }

    #[test]
    fn empty_search_is_no_results() {
        let json = r#"{"title": "test query", "entries": []}"#;

        let err = parse_metadata(json, "test query").unwrap_err();
        assert!(matches!(err, ResolverError::NoResults(q) if q == "test query"));
    }

    #[test]
    fn missing_fields_is_no_results() {
        let json = r#"{"duration": 100}"#;

        let err = parse_metadata(json, "whatever").unwrap_err();
        assert!(matches!(err, ResolverError::NoResults(_)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_metadata("not json at all", "q").unwrap_err();
        assert!(matches!(err, ResolverError::Parse(_)));
    }
}
