//! Texture resolution for the cloth surface.
//!
//! Loading is someone else's job: the cloth only remembers which name it was
//! asked to use and whether the provider could resolve it.

use alloc::string::String;

/// Longest texture name kept, in bytes. Longer names are truncated.
pub const MAX_TEXTURE_NAME_LEN: usize = 63;

/// Texture the cloth binds when none is specified.
pub const DEFAULT_TEXTURE: &str = "{blue";

/// Opaque handle issued by a [`TextureProvider`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Resolves texture names to handles.
pub trait TextureProvider {
    /// Look up `name`. `None` means the texture is not available.
    fn find_texture(&mut self, name: &str) -> Option<TextureHandle>;
}

impl<P: TextureProvider + ?Sized> TextureProvider for &mut P {
    fn find_texture(&mut self, name: &str) -> Option<TextureHandle> {
        (**self).find_texture(name)
    }
}

/// The texture a cloth is drawn with, and whether it resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextureBinding {
    name: String,
    handle: Option<TextureHandle>,
}

impl TextureBinding {
    /// An empty, unloaded binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` through `provider` and record the result.
    ///
    /// An empty name is ignored and leaves the binding as it was. A name the
    /// provider cannot resolve is kept for diagnostics but marks the binding
    /// unloaded. Returns whether the texture is now loaded.
    pub fn bind<P: TextureProvider + ?Sized>(&mut self, name: &str, provider: &mut P) -> bool {
        if name.is_empty() {
            return false;
        }

        self.name = String::from(truncate_name(name));
        self.handle = provider.find_texture(&self.name);

        match self.handle {
            Some(handle) => {
                tracing::info!(texture = %self.name, id = handle.0, "cloth texture loaded");
                true
            }
            None => {
                tracing::warn!(texture = %self.name, "cloth texture failed to load");
                false
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> Option<TextureHandle> {
        self.handle
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

fn truncate_name(name: &str) -> &str {
    if name.len() <= MAX_TEXTURE_NAME_LEN {
        return name;
    }
    let mut end = MAX_TEXTURE_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyBlue;

    impl TextureProvider for OnlyBlue {
        fn find_texture(&mut self, name: &str) -> Option<TextureHandle> {
            (name == DEFAULT_TEXTURE).then_some(TextureHandle(7))
        }
    }

    #[test]
    fn bind_known_texture() {
        let mut binding = TextureBinding::new();
        assert!(binding.bind(DEFAULT_TEXTURE, &mut OnlyBlue));
        assert_eq!(binding.handle(), Some(TextureHandle(7)));
        assert_eq!(binding.name(), "{blue");
    }

    #[test]
    fn unknown_texture_is_unloaded_but_named() {
        let mut binding = TextureBinding::new();
        binding.bind(DEFAULT_TEXTURE, &mut OnlyBlue);
        assert!(!binding.bind("CRETE1_FLR", &mut OnlyBlue));
        assert!(!binding.is_loaded());
        assert_eq!(binding.name(), "CRETE1_FLR");
    }

    #[test]
    fn empty_name_keeps_binding() {
        let mut binding = TextureBinding::new();
        binding.bind(DEFAULT_TEXTURE, &mut OnlyBlue);
        assert!(!binding.bind("", &mut OnlyBlue));
        assert!(binding.is_loaded());
        assert_eq!(binding.name(), DEFAULT_TEXTURE);
    }

    #[test]
    fn long_names_are_truncated_on_char_boundary() {
        let long = "é".repeat(40);
        let cut = truncate_name(&long);
        assert!(cut.len() <= MAX_TEXTURE_NAME_LEN);
        assert_eq!(cut.len(), 62);
        assert_eq!(truncate_name("short"), "short");
    }
}
