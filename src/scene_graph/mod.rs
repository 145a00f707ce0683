pub mod object3d;
pub mod scene;
pub mod transform;

pub use object3d::{ObjectId, ObjectKind, SceneObject};
pub use scene::SceneStore;
