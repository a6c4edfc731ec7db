use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Transforms all eight corners and re-fits an axis-aligned box around them.
    #[must_use]
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut new_min = Vec3::splat(f32::INFINITY);
        let mut new_max = Vec3::splat(f32::NEG_INFINITY);

        for point in corners {
            let transformed = matrix.transform_point3(point);
            new_min = new_min.min(transformed);
            new_max = new_max.max(transformed);
        }

        Self { min: new_min, max: new_max }
    }

    /// Smallest sphere (center, radius) enclosing the box.
    #[must_use]
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        (self.center(), self.size().length() * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_by_translation_moves_box() {
        let bbox = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let moved = bbox.transform(&Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)));
        assert_eq!(moved.min, Vec3::new(-1.0, 1.0, -1.0));
        assert_eq!(moved.max, Vec3::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn bounding_sphere_covers_corners() {
        let bbox = BoundingBox::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let (center, radius) = bbox.bounding_sphere();
        assert_eq!(center, Vec3::new(1.0, 0.0, 0.0));
        assert!((radius - 1.0).abs() < 1e-6);
    }
}
