//! The named, versioned bundle installing all commons codecs.

use crate::engine::{JsonEngine, SerdeCodec, COLLECTIONS_MODULE};
use crate::semver::SemVersion;
use crate::types::{Dict, ErrorLevel, Locale, LocalizedString, Ref, ValidationError};
use std::hash::{Hash, Hasher};
use tracing::debug;

/// The module identity under which the commons codecs are installed.
pub const MODULE_NAME: &str = "commons-json";

/// A bundle of all commons codecs, stamped with a name and the crate
/// version from build metadata. Install it into a [`JsonEngine`] to make
/// the engine understand [`Dict`], [`LocalizedString`], [`Ref`],
/// [`ValidationError`] and [`Locale`].
///
/// # Identity
///
/// Equality is by reference: a module equals itself and nothing else, even
/// another module with identical configuration. The hash is a type-wide
/// constant, so all instances collide. Both follow the convention of the
/// upstream collection-support module this one is installed alongside;
/// don't rely on value-based equality or hashing for modules.
#[derive(Debug)]
pub struct CommonsModule {
    version: SemVersion,
}

// Class-wide hash, shared by every instance.
const MODULE_HASH: u64 = 0x636f_6d6d_6f6e_73;

impl CommonsModule {
    /// Create the module, versioned from build metadata.
    pub fn new() -> Self {
        CommonsModule {
            version: SemVersion::of_build(),
        }
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn version(&self) -> &SemVersion {
        &self.version
    }

    /// Register all commons codecs into the engine and record this
    /// module's identity. Installing into the same engine twice overwrites
    /// rather than erroring. Ordered-collection support is ensured as
    /// well, since the `Dict` codec depends on it.
    pub fn install_into(&self, engine: &mut JsonEngine) {
        debug!(module = MODULE_NAME, version = %self.version, "installing commons codecs");

        if !engine.has_module(COLLECTIONS_MODULE) {
            engine.record_module(COLLECTIONS_MODULE, self.version.clone());
        }

        engine.register::<Locale>(SerdeCodec::new());
        engine.register::<Dict>(SerdeCodec::new());
        engine.register::<LocalizedString>(SerdeCodec::new());
        engine.register::<Ref>(SerdeCodec::new());
        engine.register::<ValidationError>(SerdeCodec::new());
        engine.register::<ErrorLevel>(SerdeCodec::new());

        engine.record_module(MODULE_NAME, self.version.clone());
    }
}

impl Default for CommonsModule {
    fn default() -> Self {
        CommonsModule::new()
    }
}

impl PartialEq for CommonsModule {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for CommonsModule {}

impl Hash for CommonsModule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(MODULE_HASH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(module: &CommonsModule) -> u64 {
        let mut hasher = DefaultHasher::new();
        module.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_install_registers_all_codecs() {
        let mut engine = JsonEngine::new();
        CommonsModule::new().install_into(&mut engine);

        assert!(engine.has_codec::<Locale>());
        assert!(engine.has_codec::<Dict>());
        assert!(engine.has_codec::<LocalizedString>());
        assert!(engine.has_codec::<Ref>());
        assert!(engine.has_codec::<ValidationError>());
        assert!(engine.has_codec::<ErrorLevel>());
        assert!(engine.has_module(MODULE_NAME));
        assert!(engine.has_module(COLLECTIONS_MODULE));
    }

    #[test]
    fn test_install_twice_is_a_no_op() {
        let mut engine = JsonEngine::new();
        let module = CommonsModule::new();
        module.install_into(&mut engine);
        module.install_into(&mut engine);

        assert!(engine.has_module(MODULE_NAME));
        assert_eq!(engine.module_version(MODULE_NAME), Some(module.version()));
    }

    #[test]
    fn test_module_version_matches_build() {
        let module = CommonsModule::new();
        assert_eq!(module.version(), &SemVersion::of_build());
        assert_eq!(module.name(), MODULE_NAME);
    }

    #[test]
    fn test_equality_is_by_reference() {
        let m1 = CommonsModule::new();
        let m2 = CommonsModule::new();
        assert_eq!(m1, m1);
        assert_ne!(m1, m2);
    }

    #[test]
    fn test_hash_is_class_wide() {
        let m1 = CommonsModule::new();
        let m2 = CommonsModule::new();
        assert_eq!(hash_of(&m1), hash_of(&m2));
    }
}
