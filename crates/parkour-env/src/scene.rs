//! Scene entities and contact events.
//!
//! The host's collision system classifies what the agent touched and in
//! what manner; the controller only ever sees a typed [`ContactEvent`].
//! This replaces the engine-side string-tag comparison with a closed
//! enum resolved once at contact time.

use glam::Vec3;

// ---------------------------------------------------------------------------
// EntityKind / EntityId
// ---------------------------------------------------------------------------

/// Category of a contactable scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Enemy,
    Token,
}

/// Handle to a scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

// ---------------------------------------------------------------------------
// SceneEntity / Scene
// ---------------------------------------------------------------------------

/// A contactable entity placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec3,
    pub alive: bool,
}

/// Flat store of scene entities with spawn/despawn.
///
/// Despawned entities stay in the store marked dead so handles never
/// dangle within an episode; `clear` drops everything at reset.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<SceneEntity>,
    next_id: u32,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an entity and return its handle.
    pub fn spawn(&mut self, kind: EntityKind, position: Vec3) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(SceneEntity {
            id,
            kind,
            position,
            alive: true,
        });
        id
    }

    /// Look up an entity by handle.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Remove an entity from play. Returns `false` if the handle is
    /// unknown or the entity was already despawned.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        match self.entities.iter_mut().find(|e| e.id == id && e.alive) {
            Some(entity) => {
                entity.alive = false;
                true
            }
            None => false,
        }
    }

    /// Whether the entity exists and is in play.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|e| e.alive)
    }

    /// Alive entities, in spawn order.
    pub fn alive(&self) -> impl Iterator<Item = &SceneEntity> {
        self.entities.iter().filter(|e| e.alive)
    }

    /// Number of alive entities of a kind.
    #[must_use]
    pub fn alive_count(&self, kind: EntityKind) -> usize {
        self.alive().filter(|e| e.kind == kind).count()
    }

    /// Drop all entities (episode reset).
    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_id = 0;
    }
}

// ---------------------------------------------------------------------------
// ContactEvent
// ---------------------------------------------------------------------------

/// How the host's physics classified a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPhase {
    /// Solid collision (bodies pushed apart).
    Solid,
    /// Trigger/overlap contact (no collision response).
    Trigger,
}

/// A contact notification delivered by the host within the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactEvent {
    pub entity: EntityId,
    pub kind: EntityKind,
    pub phase: ContactPhase,
}

impl ContactEvent {
    #[must_use]
    pub const fn new(entity: EntityId, kind: EntityKind, phase: ContactPhase) -> Self {
        Self {
            entity,
            kind,
            phase,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_unique_ids() {
        let mut scene = Scene::new();
        let a = scene.spawn(EntityKind::Enemy, Vec3::ZERO);
        let b = scene.spawn(EntityKind::Token, Vec3::new(1.0, 0.0, 0.0));
        assert_ne!(a, b);
        assert!(scene.is_alive(a));
        assert!(scene.is_alive(b));
    }

    #[test]
    fn get_returns_entity_data() {
        let mut scene = Scene::new();
        let id = scene.spawn(EntityKind::Token, Vec3::new(2.0, 1.0, 0.0));
        let e = scene.get(id).unwrap();
        assert_eq!(e.kind, EntityKind::Token);
        assert!((e.position.x - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn despawn_marks_dead() {
        let mut scene = Scene::new();
        let id = scene.spawn(EntityKind::Enemy, Vec3::ZERO);
        assert!(scene.despawn(id));
        assert!(!scene.is_alive(id));
        // handle still resolves
        assert!(scene.get(id).is_some());
    }

    #[test]
    fn despawn_twice_fails() {
        let mut scene = Scene::new();
        let id = scene.spawn(EntityKind::Enemy, Vec3::ZERO);
        assert!(scene.despawn(id));
        assert!(!scene.despawn(id));
    }

    #[test]
    fn despawn_unknown_handle_fails() {
        let mut scene = Scene::new();
        assert!(!scene.despawn(EntityId(99)));
    }

    #[test]
    fn alive_count_by_kind() {
        let mut scene = Scene::new();
        scene.spawn(EntityKind::Enemy, Vec3::ZERO);
        let t = scene.spawn(EntityKind::Token, Vec3::ZERO);
        scene.spawn(EntityKind::Token, Vec3::ZERO);
        assert_eq!(scene.alive_count(EntityKind::Enemy), 1);
        assert_eq!(scene.alive_count(EntityKind::Token), 2);
        scene.despawn(t);
        assert_eq!(scene.alive_count(EntityKind::Token), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut scene = Scene::new();
        let id = scene.spawn(EntityKind::Enemy, Vec3::ZERO);
        scene.clear();
        assert!(scene.get(id).is_none());
        assert_eq!(scene.alive().count(), 0);
    }

    #[test]
    fn contact_event_construction() {
        let ev = ContactEvent::new(EntityId(3), EntityKind::Enemy, ContactPhase::Trigger);
        assert_eq!(ev.entity, EntityId(3));
        assert_eq!(ev.kind, EntityKind::Enemy);
        assert_eq!(ev.phase, ContactPhase::Trigger);
    }
}
