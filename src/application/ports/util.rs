// src/application/ports/util.rs

/// Derives the base slug of an article title. The result may be empty for
/// titles without alphanumerics; suffixing for uniqueness happens upstream.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
