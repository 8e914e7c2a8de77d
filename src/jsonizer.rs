//! Convenience facade over a pre-configured JSON engine.

use crate::engine::JsonEngine;
use crate::error::JsonError;
use crate::module::CommonsModule;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::sync::OnceLock;
use tracing::debug;

/// Global facade instance (initialized lazily, on first access).
static INSTANCE: OnceLock<Jsonizer> = OnceLock::new();

/// A simple to-JSON/from-JSON interface over a [`JsonEngine`] with the
/// commons codecs installed.
///
/// [`Jsonizer::of`] returns a process-wide singleton whose engine is built
/// once and never reconfigured; concurrent `to_json`/`from_json` calls
/// against it are safe. To customize the engine, take a copy with
/// [`Jsonizer::create_engine`], reconfigure it, and wrap it with
/// [`Jsonizer::wrapping`]; the singleton is never perturbed.
pub struct Jsonizer {
    engine: JsonEngine,
}

impl Jsonizer {
    /// The process-wide Jsonizer, already configured for the commons value
    /// types.
    pub fn of() -> &'static Jsonizer {
        INSTANCE.get_or_init(|| {
            let mut engine = JsonEngine::new();
            CommonsModule::new().install_into(&mut engine);
            Jsonizer { engine }
        })
    }

    /// A Jsonizer wrapping the provided engine as-is. The default
    /// singleton is not touched.
    pub fn wrapping(engine: JsonEngine) -> Jsonizer {
        Jsonizer { engine }
    }

    /// The JSON representation of the provided value.
    ///
    /// # Errors
    /// [`JsonError::Serialize`] when the engine cannot represent the value.
    pub fn to_json<T: Serialize + Any>(&self, value: &T) -> Result<String, JsonError> {
        self.engine.serialize(value)
    }

    /// Reconstruct a value from its JSON representation.
    ///
    /// # Errors
    /// [`JsonError::Deserialize`] when the text is not well-formed JSON for
    /// the target type; the offending input travels with the error.
    pub fn from_json<T: DeserializeOwned + Any>(&self, json: &str) -> Result<T, JsonError> {
        self.engine.deserialize(json).map_err(|err| {
            debug!(error = %err, "JSON decode failed");
            err
        })
    }

    /// An independent copy of the engine used internally, for callers that
    /// want to customize it further.
    pub fn create_engine(&self) -> JsonEngine {
        self.engine.copy()
    }
}
