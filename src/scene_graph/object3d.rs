use std::fmt;

use glam::Vec3;

use crate::scene_graph::transform::Transform;

/// Stable identifier of a scene object.
///
/// Any string is a valid id, including ones that match no object, so that
/// selection can hold a dangling id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Light,
    Camera,
}

impl ObjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Cube => "Cube",
            ObjectKind::Sphere => "Sphere",
            ObjectKind::Cylinder => "Cylinder",
            ObjectKind::Plane => "Plane",
            ObjectKind::Light => "Light",
            ObjectKind::Camera => "Camera",
        }
    }

    /// Short tag shown in front of the name in the outliner.
    pub fn icon(self) -> &'static str {
        match self {
            ObjectKind::Cube => "[M]",
            ObjectKind::Light => "[L]",
            ObjectKind::Camera => "[C]",
            ObjectKind::Sphere | ObjectKind::Cylinder | ObjectKind::Plane => "[ ]",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    kind: ObjectKind,
    pub transform: Transform,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            id: ObjectId::new(id),
            name: name.into(),
            kind,
            transform: Transform::default(),
            visible: true,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Kind is fixed at creation, so there is no setter.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns a copy of this object with the patch applied.
    pub fn merged(&self, patch: &ObjectPatch) -> SceneObject {
        let mut object = self.clone();

        if let Some(name) = &patch.name {
            object.name = name.clone();
        }
        if let Some(position) = patch.position {
            object.transform.position = position;
        }
        if let Some(rotation) = patch.rotation {
            object.transform.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            object.transform.scale = scale;
        }
        if let Some(visible) = patch.visible {
            object.visible = visible;
        }

        object
    }
}

/// Sparse set of field assignments for [`SceneObject`].
///
/// `id` and `kind` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub visible: Option<bool>,
}

impl ObjectPatch {
    #[allow(dead_code)]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[allow(dead_code)]
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    #[allow(dead_code)]
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[allow(dead_code)]
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ObjectPatch::default()
    }
}
