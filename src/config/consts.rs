/// Fixed relative path of the font manifest the binary loads at startup
pub const MANIFEST_PATH: &str = "dist/fonts.json";
