// crates/core/src/source.rs
//! 入力ソースの解決（ストリーム / ファイルパス / 文字列）

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use code_counter_shared_kernel::{InfrastructureError, Result};
use log::debug;

/// 分類対象の入力
pub enum Source<'a> {
    /// 開いているストリーム。全て読み込まれる。
    Reader(Box<dyn Read + 'a>),
    /// 既存ファイルのパス。読み込み後すぐに閉じられる。
    Path(PathBuf),
    /// ソースコードそのもの
    Text(Cow<'a, str>),
}

impl<'a> Source<'a> {
    /// 既存の通常ファイルならパス、それ以外は文字列として扱う
    ///
    /// 存在しないパスはエラーにならず、そのまま文字列として分類される。
    /// 存在しない場合にエラーとしたいときは [`Source::path`] を使う。
    pub fn detect(content: &'a str) -> Self {
        let path = Path::new(content);
        if !content.is_empty() && path.is_file() {
            Self::Path(path.to_path_buf())
        } else {
            debug!("input is not an existing file, treating it as literal source text");
            Self::Text(Cow::Borrowed(content))
        }
    }

    pub fn reader(reader: impl Read + 'a) -> Self {
        Self::Reader(Box::new(reader))
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Reader(_) | Self::Text(_) => None,
        }
    }

    /// 入力全体を文字列として取り出す
    pub fn into_text(self) -> Result<Cow<'a, str>> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader
                    .read_to_end(&mut buf)
                    .map_err(|source| InfrastructureError::StreamRead { source })?;
                decode(buf, "input stream").map(Cow::Owned)
            }
            Self::Path(path) => read_file(&path).map(Cow::Owned),
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reader(_) => f.write_str("Source::Reader(..)"),
            Self::Path(path) => f.debug_tuple("Source::Path").field(path).finish(),
            Self::Text(text) => f.debug_tuple("Source::Text").field(&text.len()).finish(),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Self::detect(content)
    }
}

impl From<PathBuf> for Source<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Source<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

fn read_file(path: &Path) -> Result<String> {
    let file_read = |source: std::io::Error| InfrastructureError::FileRead { path: path.to_path_buf(), source };

    // `file` はこのスコープを抜けると読み込みの成否に関わらず閉じられる
    let mut file = File::open(path).map_err(file_read)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(file_read)?;
    decode(buf, &path.display().to_string())
}

fn decode(buf: Vec<u8>, origin: &str) -> Result<String> {
    String::from_utf8(buf).map_err(|source| {
        InfrastructureError::Decode { origin: origin.to_string(), source }.into()
    })
}
