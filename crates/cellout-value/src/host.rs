//! Opaque objects supplied by the embedding runtime.

use std::fmt::Debug;

use crate::error::ValueError;
use crate::value::Value;

/// An object owned by the evaluating runtime that the renderer cannot see into
/// structurally.
///
/// Host objects are how class instances, library wrappers and other opaque
/// results reach the renderer. They can describe their own properties for the
/// generic inspector and may carry their own render routine.
///
/// # Self-rendering
///
/// A host object that returns `true` from [`has_render`](Self::has_render) is
/// "self-describing": the renderer calls [`render`](Self::render) and accepts
/// the result only when it is a [`Value::String`] of markup. Any other result
/// is treated as "no usable output" and rendering falls through.
///
/// ```
/// use cellout_value::{HostObject, Value, ValueError};
///
/// #[derive(Debug)]
/// struct Badge(&'static str);
///
/// impl HostObject for Badge {
///     fn class_name(&self) -> &str {
///         "Badge"
///     }
///
///     fn has_render(&self) -> bool {
///         true
///     }
///
///     fn render(&self, _in_container: bool) -> Result<Value, ValueError> {
///         Ok(Value::from(format!("<b>{}</b>", self.0)))
///     }
/// }
///
/// let badge = Badge("new");
/// assert_eq!(badge.render(false).unwrap(), Value::from("<b>new</b>"));
/// ```
pub trait HostObject: Debug {
    /// Constructor name shown by the inspector.
    fn class_name(&self) -> &str;

    /// Enumerable properties, in display order.
    fn properties(&self) -> Vec<(String, Value)> {
        Vec::new()
    }

    /// Whether this object exposes a callable render routine.
    fn has_render(&self) -> bool {
        false
    }

    /// Runs the object's render routine.
    ///
    /// Errors are the runtime equivalent of a thrown exception and propagate
    /// out of the renderer.
    fn render(&self, _in_container: bool) -> Result<Value, ValueError> {
        Ok(Value::Undefined)
    }
}
