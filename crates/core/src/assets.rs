//! Sprite frames, loaded once at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::canvas::Frame;
use crate::error::AssetError;

pub const ROCKET_FRAMES: [&str; 2] = ["rocket_frame_1", "rocket_frame_2"];

pub const GARBAGE_FRAMES: [&str; 6] = [
    "duck",
    "hubble",
    "lamp",
    "trash_large",
    "trash_small",
    "trash_xl",
];

const BUILTIN: [(&str, &str); 8] = [
    ("rocket_frame_1", include_str!("../frames/rocket_frame_1.txt")),
    ("rocket_frame_2", include_str!("../frames/rocket_frame_2.txt")),
    ("duck", include_str!("../frames/duck.txt")),
    ("hubble", include_str!("../frames/hubble.txt")),
    ("lamp", include_str!("../frames/lamp.txt")),
    ("trash_large", include_str!("../frames/trash_large.txt")),
    ("trash_small", include_str!("../frames/trash_small.txt")),
    ("trash_xl", include_str!("../frames/trash_xl.txt")),
];

/// Name → frame mapping.
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    frames: HashMap<String, Rc<Frame>>,
}

impl FrameStore {
    /// Frames compiled into the binary.
    pub fn builtin() -> Self {
        let mut store = Self::default();
        for (name, text) in BUILTIN {
            store.insert(name, Frame::new(text));
        }
        store
    }

    /// Read every `*.txt` file in `dir`; the file stem becomes the frame name.
    ///
    /// Frames found on disk override the builtin ones of the same name.
    pub fn load_dir(dir: &Path) -> Result<Self, AssetError> {
        let read_err = |source| AssetError::Read {
            path: dir.to_path_buf(),
            source,
        };

        let mut store = Self::builtin();
        let mut loaded = 0usize;
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(&path).map_err(|source| AssetError::Read {
                path: path.clone(),
                source,
            })?;
            store.insert(name, Frame::new(text));
            loaded += 1;
        }
        log::debug!("loaded {} frames from {}", loaded, dir.display());
        Ok(store)
    }

    pub fn insert(&mut self, name: &str, frame: Frame) {
        self.frames.insert(name.to_string(), Rc::new(frame));
    }

    pub fn get(&self, name: &str) -> Result<Rc<Frame>, AssetError> {
        let frame = self
            .frames
            .get(name)
            .ok_or_else(|| AssetError::MissingFrame(name.to_string()))?;
        if frame.is_empty() {
            return Err(AssetError::EmptyFrame(name.to_string()));
        }
        Ok(Rc::clone(frame))
    }

    pub fn get_all<const N: usize>(&self, names: [&str; N]) -> Result<Vec<Rc<Frame>>, AssetError> {
        names.into_iter().map(|n| self.get(n)).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
