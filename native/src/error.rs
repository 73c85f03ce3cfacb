//! Failures surfaced at the JNI edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("required class {0} could not be resolved")]
    ClassNotFound(String),

    #[error("failed to register natives for {class}: {source}")]
    Registration {
        class: String,
        #[source]
        source: jni::errors::Error,
    },

    #[error(transparent)]
    Jni(#[from] jni::errors::Error),
}
