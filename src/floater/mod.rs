//! Floating bodies: buoyancy sampling, attitude smoothing and the scene hooks
//! they drive.

mod body;
mod bounds;
mod origin;
mod probe;
mod transform;

pub use body::{FloatState, Floater};
pub use bounds::{Aabb, Sphere};
pub use origin::{OriginHook, SharedOrigin};
pub use probe::{gravity_slide, AnchorProbe, FloaterProbe};
pub use transform::{BodyTransform, Transform};
