// In-memory sound bank

use crate::engine::assets::{AssetError, NativeAudio, SoundId};
use log::debug;
use std::collections::HashMap;

/// Container formats the audio backend accepts, by magic bytes
const SUPPORTED_MAGIC: &[(&[u8], &str)] = &[(b"OggS", "ogg"), (b"RIFF", "wav")];

/// Holds encoded sounds until the mixer asks for them
#[derive(Debug, Default)]
pub struct SoundBank {
    sounds: HashMap<SoundId, Vec<u8>>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the encoded data of a loaded sound
    pub fn get(&self, id: SoundId) -> Option<&[u8]> {
        self.sounds.get(&id).map(Vec::as_slice)
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    fn container(data: &[u8]) -> Option<&'static str> {
        SUPPORTED_MAGIC
            .iter()
            .find(|(magic, _)| data.starts_with(magic))
            .map(|(_, name)| *name)
    }
}

impl NativeAudio for SoundBank {
    fn load_sound(&mut self, id: SoundId, data: Vec<u8>) -> Result<(), AssetError> {
        let container = Self::container(&data)
            .ok_or_else(|| AssetError::Decode(format!("sound {} has no ogg/wav header", id)))?;

        debug!("Loaded {} sound {} ({} bytes)", container, id, data.len());
        self.sounds.insert(id, data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_ogg() {
        let mut bank = SoundBank::new();
        bank.load_sound(SoundId(4), b"OggS\0\0data".to_vec()).unwrap();

        assert_eq!(bank.sound_count(), 1);
        assert_eq!(bank.get(SoundId(4)), Some(&b"OggS\0\0data"[..]));
    }

    #[test]
    fn test_reject_unknown_container() {
        let mut bank = SoundBank::new();
        let result = bank.load_sound(SoundId(4), b"ID3".to_vec());

        assert!(matches!(result, Err(AssetError::Decode(_))));
        assert!(bank.get(SoundId(4)).is_none());
    }

    #[test]
    fn test_reload_replaces() {
        let mut bank = SoundBank::new();
        bank.load_sound(SoundId(1), b"OggS1".to_vec()).unwrap();
        bank.load_sound(SoundId(1), b"RIFF2".to_vec()).unwrap();

        assert_eq!(bank.sound_count(), 1);
        assert_eq!(bank.get(SoundId(1)), Some(&b"RIFF2"[..]));
    }
}
