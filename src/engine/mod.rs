// Engine modules: assets, audio, renderer

pub mod assets;
pub mod audio;
pub mod renderer;
