//! A configurable JSON engine with per-type codec overrides.
//!
//! The engine wraps serde/serde_json with a small registry: a codec
//! registered for a type takes precedence over the type's own serde
//! implementation, so callers can swap wire formats per engine instance
//! without touching the types. Cloning an engine yields an independent
//! instance (the `copy` operation); engines share no mutable state.
//!
//! Encode/decode calls are blocking, in-memory operations bounded by input
//! size only. Concurrent reads of one engine are safe; reconfiguring an
//! engine (registering codecs) needs exclusive access, which the `&mut`
//! receivers enforce.

use crate::error::JsonError;
use crate::semver::SemVersion;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Identity of the built-in ordered-collection support.
///
/// The original engine required a separate collection-support module to be
/// installed at runtime; here ordered-map support is indexmap's serde
/// integration, compiled in. The identity is still recorded on every fresh
/// engine so installation checks can observe it.
pub const COLLECTIONS_MODULE: &str = "ordered-collections";

/// A paired encode/decode rule for one type.
pub trait JsonCodec<T>: Send + Sync {
    /// Turn a value into a JSON tree.
    fn encode(&self, value: &T) -> Result<Value, JsonError>;

    /// Turn a JSON tree back into a value. Either yields a fully valid
    /// value or fails; no partial results.
    fn decode(&self, value: &Value) -> Result<T, JsonError>;
}

/// A codec built from a pair of closures.
pub struct FnCodec<T> {
    encode: Box<dyn Fn(&T) -> Result<Value, JsonError> + Send + Sync>,
    decode: Box<dyn Fn(&Value) -> Result<T, JsonError> + Send + Sync>,
}

impl<T> FnCodec<T> {
    pub fn new(
        encode: impl Fn(&T) -> Result<Value, JsonError> + Send + Sync + 'static,
        decode: impl Fn(&Value) -> Result<T, JsonError> + Send + Sync + 'static,
    ) -> Self {
        FnCodec {
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }
}

impl<T> JsonCodec<T> for FnCodec<T> {
    fn encode(&self, value: &T) -> Result<Value, JsonError> {
        (self.encode)(value)
    }

    fn decode(&self, value: &Value) -> Result<T, JsonError> {
        (self.decode)(value)
    }
}

/// A codec delegating to the type's own serde implementations. Registering
/// one makes the type's wire contract explicit in the engine's codec table
/// without changing it.
pub struct SerdeCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeCodec<T> {
    pub fn new() -> Self {
        SerdeCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeCodec<T> {
    fn default() -> Self {
        SerdeCodec::new()
    }
}

impl<T: Serialize + DeserializeOwned + Send + Sync> JsonCodec<T> for SerdeCodec<T> {
    fn encode(&self, value: &T) -> Result<Value, JsonError> {
        serde_json::to_value(value).map_err(|source| JsonError::Serialize { source })
    }

    fn decode(&self, value: &Value) -> Result<T, JsonError> {
        T::deserialize(value).map_err(|source| JsonError::Deserialize {
            input: value.to_string(),
            source,
        })
    }
}

/// Object-safe adapter over a typed codec.
trait ErasedCodec: Send + Sync {
    fn encode(&self, value: &dyn Any) -> Result<Value, JsonError>;
    fn decode(&self, value: &Value) -> Result<Box<dyn Any>, JsonError>;
}

struct TypedCodec<T, C> {
    codec: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any, C: JsonCodec<T>> ErasedCodec for TypedCodec<T, C> {
    fn encode(&self, value: &dyn Any) -> Result<Value, JsonError> {
        let value = value.downcast_ref::<T>().ok_or_else(|| {
            JsonError::codec(type_name::<T>(), "value has a different runtime type")
        })?;
        self.codec.encode(value)
    }

    fn decode(&self, value: &Value) -> Result<Box<dyn Any>, JsonError> {
        Ok(Box::new(self.codec.decode(value)?))
    }
}

/// The JSON engine: serde_json plus a per-type codec table and a record of
/// installed codec modules.
#[derive(Clone)]
pub struct JsonEngine {
    codecs: HashMap<TypeId, Arc<dyn ErasedCodec>>,
    modules: IndexMap<&'static str, SemVersion>,
}

impl JsonEngine {
    /// Create an engine with no custom codecs. Ordered-collection support
    /// is already present (see [`COLLECTIONS_MODULE`]).
    pub fn new() -> Self {
        let mut engine = JsonEngine {
            codecs: HashMap::new(),
            modules: IndexMap::new(),
        };
        engine.record_module(COLLECTIONS_MODULE, SemVersion::of_build());
        engine
    }

    /// Register a codec for `T`, replacing any previous one.
    pub fn register<T: Any>(&mut self, codec: impl JsonCodec<T> + 'static) {
        self.codecs.insert(
            TypeId::of::<T>(),
            Arc::new(TypedCodec {
                codec,
                _marker: PhantomData,
            }),
        );
    }

    /// Whether a codec is registered for `T`.
    pub fn has_codec<T: Any>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    /// Record that a codec module with this identity is installed.
    /// Recording the same name again overwrites, so installation is
    /// idempotent per engine.
    pub fn record_module(&mut self, name: &'static str, version: SemVersion) {
        self.modules.insert(name, version);
    }

    /// Whether a module with this name has been installed.
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// The version a module was installed with, if any.
    pub fn module_version(&self, name: &str) -> Option<&SemVersion> {
        self.modules.get(name)
    }

    /// Encode a value to a JSON tree, through the registered codec for `T`
    /// when one exists, else through the type's own serde implementation.
    pub fn to_value<T: Serialize + Any>(&self, value: &T) -> Result<Value, JsonError> {
        match self.codecs.get(&TypeId::of::<T>()) {
            Some(codec) => codec.encode(value),
            None => serde_json::to_value(value).map_err(|source| JsonError::Serialize { source }),
        }
    }

    /// Encode a value to JSON text.
    pub fn serialize<T: Serialize + Any>(&self, value: &T) -> Result<String, JsonError> {
        let tree = self.to_value(value)?;
        serde_json::to_string(&tree).map_err(|source| JsonError::Serialize { source })
    }

    /// Decode a value from a JSON tree, through the registered codec for
    /// `T` when one exists.
    pub fn from_value<T: DeserializeOwned + Any>(&self, value: &Value) -> Result<T, JsonError> {
        match self.codecs.get(&TypeId::of::<T>()) {
            Some(codec) => codec
                .decode(value)?
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|_| {
                    JsonError::codec(type_name::<T>(), "codec produced a different runtime type")
                }),
            None => T::deserialize(value).map_err(|source| JsonError::Deserialize {
                input: value.to_string(),
                source,
            }),
        }
    }

    /// Decode a value from JSON text. The failing input travels with the
    /// error.
    pub fn deserialize<T: DeserializeOwned + Any>(&self, json: &str) -> Result<T, JsonError> {
        let tree: Value = serde_json::from_str(json).map_err(|source| JsonError::Deserialize {
            input: json.to_string(),
            source,
        })?;
        self.from_value(&tree).map_err(|err| match err {
            // Report the original text, not the parsed tree's rendering.
            JsonError::Deserialize { source, .. } => JsonError::Deserialize {
                input: json.to_string(),
                source,
            },
            other => other,
        })
    }

    /// An independent copy of this engine. Further registrations on either
    /// side do not affect the other.
    pub fn copy(&self) -> JsonEngine {
        self.clone()
    }
}

impl Default for JsonEngine {
    fn default() -> Self {
        JsonEngine::new()
    }
}
