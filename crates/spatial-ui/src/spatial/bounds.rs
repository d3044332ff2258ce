//! Axis-aligned boxes for interaction volumes

use glam::Vec3;

use super::Ray;

/// An axis-aligned box described by its center and full dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub center: Vec3,
    pub dimensions: Vec3,
}

impl Bounds {
    pub fn new(center: Vec3, dimensions: Vec3) -> Self {
        Self { center, dimensions }
    }

    /// Box whose "top left" corner (the +X, +Y, +Z extreme) sits at
    /// `top_left`, extending by `dimensions` toward -X, -Y, -Z. This is how
    /// layout slots are described.
    pub fn from_top_left(top_left: Vec3, dimensions: Vec3) -> Self {
        Self::new(top_left - dimensions / 2.0, dimensions)
    }

    pub fn top_left(&self) -> Vec3 {
        self.center + self.dimensions / 2.0
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.dimensions / 2.0
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.dimensions / 2.0
    }

    /// Grow every dimension by `amount`, keeping the center
    pub fn grow(&self, amount: f32) -> Self {
        Self::new(self.center, self.dimensions + Vec3::splat(amount))
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs() - self.dimensions / 2.0;
        d.max_element() <= 0.0
    }

    /// Does the line segment from `start` to `end` touch the box?
    pub fn segment_intersects(&self, start: Vec3, end: Vec3) -> bool {
        if self.contains(start) {
            return true;
        }
        match self.slab(start, end - start) {
            Some((t_min, t_max)) => t_min <= 1.0 && t_max >= 0.0,
            None => false,
        }
    }

    /// Does a capsule of `radius` around the segment `start..end` overlap
    /// the box? The box is inflated by the radius, which over-reports a
    /// little near the corners.
    pub fn capsule_contains(&self, start: Vec3, end: Vec3, radius: f32) -> bool {
        self.grow(radius * 2.0).segment_intersects(start, end)
    }

    /// Distance along the ray to the first hit, in multiples of the ray's
    /// direction. Zero when the origin starts inside the box.
    pub fn ray_intersect_dist(&self, ray: &Ray) -> Option<f32> {
        if self.contains(ray.origin) {
            return Some(0.0);
        }
        let (t_min, t_max) = self.slab(ray.origin, ray.direction)?;
        if t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }

    /// First point where the ray hits the box
    pub fn ray_intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.ray_intersect_dist(ray).map(|t| ray.at(t))
    }

    /// Signed euclidean distance to the box surface; negative inside
    pub fn sdf(&self, point: Vec3) -> f32 {
        let q = (point - self.center).abs() - self.dimensions / 2.0;
        q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
    }

    /// Signed distance using the largest per-axis excursion. Cheaper than
    /// [`Bounds::sdf`] and more negative toward the middle of the box, so it
    /// rewards central hits.
    pub fn sdf_manhattan(&self, point: Vec3) -> f32 {
        let q = (point - self.center).abs() - self.dimensions / 2.0;
        q.max_element()
    }

    // Slab test, returns the entry and exit parameters along `dir`
    fn slab(&self, origin: Vec3, dir: Vec3) -> Option<(f32, f32)> {
        let min = self.min();
        let max = self.max();
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            if d.abs() < f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t1 = (min[axis] - o) * inv;
            let mut t2 = (max[axis] - o) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
        Some((t_min, t_max))
    }
}
