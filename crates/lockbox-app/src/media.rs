//! Hero artwork loading with a placeholder fallback

use std::path::Path;

use lockbox_core::prelude::*;

/// Largest art file accepted, in bytes
const MAX_ART_BYTES: u64 = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeroArt {
    /// Text art read from disk
    Loaded(String),
    /// Nothing configured, or loading failed
    #[default]
    Placeholder,
}

impl HeroArt {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, HeroArt::Placeholder)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let text = match self {
            HeroArt::Loaded(text) => text.as_str(),
            HeroArt::Placeholder => "",
        };
        text.lines()
    }
}

/// Load the configured art. Any failure degrades to the placeholder.
pub fn load_hero_art(path: Option<&Path>) -> HeroArt {
    let Some(path) = path else {
        return HeroArt::Placeholder;
    };

    match read_art(path) {
        Ok(text) if !text.trim().is_empty() => {
            debug!("Loaded hero art from {:?}", path);
            HeroArt::Loaded(text)
        }
        Ok(_) => {
            warn!("Hero art {:?} is empty, using placeholder", path);
            HeroArt::Placeholder
        }
        Err(e) => {
            warn!("Hero art unavailable, using placeholder: {}", e);
            HeroArt::Placeholder
        }
    }
}

fn read_art(path: &Path) -> Result<String> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_ART_BYTES {
        return Err(Error::config(format!(
            "{} is {} bytes, limit is {}",
            path.display(),
            size,
            MAX_ART_BYTES
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_path_is_placeholder() {
        assert!(load_hero_art(None).is_placeholder());
    }

    #[test]
    fn test_missing_file_is_placeholder() {
        let temp = tempdir().unwrap();
        assert!(load_hero_art(Some(&temp.path().join("nope.txt"))).is_placeholder());
    }

    #[test]
    fn test_loads_text_art() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("art.txt");
        std::fs::write(&path, " /\\\n/__\\\n").unwrap();

        let art = load_hero_art(Some(&path));
        assert_eq!(art.lines().count(), 2);
    }

    #[test]
    fn test_binary_file_is_placeholder() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("art.png");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x89]).unwrap();

        assert!(load_hero_art(Some(&path)).is_placeholder());
    }
}
