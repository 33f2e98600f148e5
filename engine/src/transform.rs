//! Entity Transform
//!
//! The controller never owns the entity it moves. It reads position and
//! rotation through [`EntityTransform`] and writes the result back through
//! the same trait, so any scene representation can host it.

use glam::{EulerRot, Quat, Vec3};

/// Read/write access to the transform of the entity being driven.
pub trait EntityTransform {
    /// Current position in world units.
    fn position(&self) -> Vec3;

    /// Current rotation in degrees (x = pitch, y = yaw, z = roll), or `None`
    /// when the host has not resolved it yet.
    fn rotation_degrees(&self) -> Option<Vec3>;

    /// Overwrite the position.
    fn set_position(&mut self, position: Vec3);

    /// Move along the entity's own local axes.
    fn translate_local(&mut self, offset: Vec3);
}

/// Apply one frame's displacement.
///
/// The entity is first advanced along its local axes, then its position is
/// written as the pre-frame position plus `displacement`, so the final
/// position is always `before + displacement`.
pub fn apply_displacement<T: EntityTransform + ?Sized>(transform: &mut T, displacement: Vec3) {
    let before = transform.position();
    transform.translate_local(displacement);
    transform.set_position(before + displacement);
}

/// Minimal transform: a position plus an optional YXZ euler rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpleTransform {
    pub position: Vec3,
    /// Rotation in degrees (x = pitch, y = yaw, z = roll)
    pub rotation: Option<Vec3>,
}

impl SimpleTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform at `position` with no resolved rotation.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: None,
        }
    }

    /// Builder-style rotation setter (degrees).
    pub fn rotated(mut self, degrees: Vec3) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Rotation as a quaternion, identity when unresolved.
    pub fn quat(&self) -> Quat {
        match self.rotation {
            Some(d) => Quat::from_euler(
                EulerRot::YXZ,
                d.y.to_radians(),
                d.x.to_radians(),
                d.z.to_radians(),
            ),
            None => Quat::IDENTITY,
        }
    }
}

impl EntityTransform for SimpleTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation_degrees(&self) -> Option<Vec3> {
        self.rotation
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn translate_local(&mut self, offset: Vec3) {
        self.position += self.quat() * offset;
    }
}
