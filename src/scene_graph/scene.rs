use std::collections::HashSet;
use std::sync::Arc;

use anyhow::bail;
use glam::Vec3;

use crate::scene_graph::object3d::{ObjectId, ObjectKind, ObjectPatch, SceneObject};
use crate::scene_graph::transform::Transform;

/// Ordered scene objects plus the current selection.
///
/// The object list is copy-on-write: every effective update swaps in a new
/// `Arc`, so observers can detect changes by pointer identity.
#[derive(Debug, Clone)]
pub struct SceneStore {
    objects: Arc<Vec<SceneObject>>,
    selected: Option<ObjectId>,
}

impl SceneStore {
    pub fn new(seed: Vec<SceneObject>, selected: Option<ObjectId>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for object in &seed {
            if !seen.insert(&object.id) {
                bail!("Duplicate scene object id '{}'", object.id);
            }
        }

        if let Some(id) = &selected {
            if !seen.contains(id) {
                bail!("Initial selection '{}' does not match any scene object", id);
            }
        }

        Ok(Self {
            objects: Arc::new(seed),
            selected,
        })
    }

    /// The fixed three-object scene every session starts with, cube selected.
    pub fn seeded() -> anyhow::Result<Self> {
        Self::new(seed_objects(), Some(ObjectId::from(DEFAULT_SELECTION)))
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| &object.id == id)
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// `None` both when nothing is selected and when the selection dangles.
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: &ObjectId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Sets the selection without checking that `id` exists.
    pub fn select(&mut self, id: ObjectId) {
        if self.get(&id).is_none() {
            log::debug!("Selected '{}', which matches no scene object", id);
        } else {
            log::debug!("Selected '{}'", id);
        }

        self.selected = Some(id);
    }

    /// Merges `patch` into the object with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &ObjectId, patch: ObjectPatch) {
        let Some(index) = self.objects.iter().position(|object| &object.id == id) else {
            log::debug!("Ignoring update for unknown object '{}'", id);
            return;
        };

        if patch.is_empty() {
            return;
        }

        let mut objects = self.objects.as_ref().clone();
        objects[index] = objects[index].merged(&patch);
        self.objects = Arc::new(objects);

        log::debug!("Updated object '{}': {:?}", id, patch);
    }

    pub fn toggle_visible(&mut self, id: &ObjectId) {
        let Some(visible) = self.get(id).map(|object| object.visible) else {
            log::debug!("Ignoring visibility toggle for unknown object '{}'", id);
            return;
        };

        self.update(id, ObjectPatch::default().visible(!visible));
    }

    /// Shared handle to the current object list.
    pub fn objects_handle(&self) -> Arc<Vec<SceneObject>> {
        self.objects.clone()
    }

    pub fn has_changed_since(&self, handle: &Arc<Vec<SceneObject>>) -> bool {
        !Arc::ptr_eq(&self.objects, handle)
    }
}

const DEFAULT_SELECTION: &str = "1";

fn seed_objects() -> Vec<SceneObject> {
    vec![
        SceneObject::new("1", "Cube", ObjectKind::Cube),
        SceneObject::new("2", "Light", ObjectKind::Light)
            .with_transform(Transform::from_position(Vec3::new(4.0, 4.0, 4.0))),
        SceneObject::new("3", "Camera", ObjectKind::Camera).with_transform(
            Transform::from_position(Vec3::new(7.0, 5.0, 7.0))
                .with_rotation(Vec3::new(-30.0, 45.0, 0.0)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ObjectId {
        ObjectId::from(value)
    }

    #[test]
    fn cube_is_selected_by_default() {
        let store = SceneStore::seeded().unwrap();

        let cubes: Vec<_> = store
            .objects()
            .iter()
            .filter(|object| object.id == id("1"))
            .collect();
        assert_eq!(cubes.len(), 1);
        assert_eq!(store.selected_id(), Some(&id("1")));
        assert_eq!(store.selected_object().map(|o| o.kind()), Some(ObjectKind::Cube));
    }

    #[test]
    fn seed_order_and_values() {
        let store = SceneStore::seeded().unwrap();
        let names: Vec<_> = store.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Cube", "Light", "Camera"]);

        let camera = store.get(&id("3")).unwrap();
        assert_eq!(camera.transform.position, Vec3::new(7.0, 5.0, 7.0));
        assert_eq!(camera.transform.rotation, Vec3::new(-30.0, 45.0, 0.0));
        assert_eq!(camera.transform.scale, Vec3::ONE);
        assert!(store.objects().iter().all(|o| o.visible));
    }

    #[test]
    fn select_stores_any_id() {
        let mut store = SceneStore::seeded().unwrap();

        store.select(id("3"));
        assert_eq!(store.selected_id(), Some(&id("3")));

        store.select(id("nope"));
        assert_eq!(store.selected_id(), Some(&id("nope")));
        assert!(store.selected_object().is_none());
    }

    #[test]
    fn visibility_update_touches_only_target() {
        let mut store = SceneStore::seeded().unwrap();
        let before = store.objects().to_vec();

        store.update(&id("2"), ObjectPatch::default().visible(false));

        for (old, new) in before.iter().zip(store.objects()) {
            if old.id == id("2") {
                assert!(!new.visible);
                assert_eq!(new.name, old.name);
                assert_eq!(new.kind(), old.kind());
                assert_eq!(new.transform, old.transform);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut store = SceneStore::seeded().unwrap();
        store.select(id("2"));
        let before = store.objects().to_vec();
        let handle = store.objects_handle();

        store.update(&id("999"), ObjectPatch::default().visible(false).name("Ghost"));

        assert_eq!(store.objects(), before.as_slice());
        assert!(!store.has_changed_since(&handle));
        assert_eq!(store.selected_id(), Some(&id("2")));
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut store = SceneStore::seeded().unwrap();
        let original = store.get(&id("3")).unwrap().visible;

        store.toggle_visible(&id("3"));
        assert_eq!(store.get(&id("3")).unwrap().visible, !original);

        store.toggle_visible(&id("3"));
        assert_eq!(store.get(&id("3")).unwrap().visible, original);
    }

    #[test]
    fn hiding_second_object_keeps_selection() {
        let seed = vec![
            SceneObject::new("1", "A", ObjectKind::Cube),
            SceneObject::new("2", "B", ObjectKind::Sphere),
            SceneObject::new("3", "C", ObjectKind::Plane),
        ];
        let mut store = SceneStore::new(seed, Some(id("1"))).unwrap();

        store.update(&id("2"), ObjectPatch::default().visible(false));

        let visibility: Vec<_> = store
            .objects()
            .iter()
            .map(|o| (o.id.as_str(), o.visible))
            .collect();
        assert_eq!(visibility, [("1", true), ("2", false), ("3", true)]);
        assert_eq!(store.selected_id(), Some(&id("1")));
    }

    #[test]
    fn selecting_missing_id_leaves_objects_alone() {
        let mut store = SceneStore::seeded().unwrap();
        let before = store.objects().to_vec();
        let handle = store.objects_handle();

        store.select(id("2"));
        store.select(id("999"));

        assert_eq!(store.selected_id(), Some(&id("999")));
        assert_eq!(store.objects(), before.as_slice());
        assert!(!store.has_changed_since(&handle));
    }

    #[test]
    fn updates_replace_the_collection() {
        let mut store = SceneStore::seeded().unwrap();
        let handle = store.objects_handle();

        store.update(&id("1"), ObjectPatch::default().position(Vec3::X));

        assert!(store.has_changed_since(&handle));
        assert_eq!(handle[0].transform.position, Vec3::ZERO);
        assert_eq!(store.objects()[0].transform.position, Vec3::X);
    }

    #[test]
    fn toggling_unknown_id_changes_nothing() {
        let mut store = SceneStore::seeded().unwrap();
        let handle = store.objects_handle();

        store.toggle_visible(&id("42"));

        assert!(!store.has_changed_since(&handle));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let seed = vec![
            SceneObject::new("1", "A", ObjectKind::Cube),
            SceneObject::new("1", "B", ObjectKind::Light),
        ];
        assert!(SceneStore::new(seed, None).is_err());
    }

    #[test]
    fn rejects_dangling_initial_selection() {
        let seed = vec![SceneObject::new("1", "A", ObjectKind::Cube)];
        assert!(SceneStore::new(seed.clone(), Some(id("2"))).is_err());
        assert!(SceneStore::new(seed, None).is_ok());
    }
}
