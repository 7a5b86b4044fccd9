// Pure camera framing logic (engine-agnostic)

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_UP, FRAMING_DISTANCE_FACTOR,
    FRAMING_HEIGHT_FACTOR,
};
use glam::Vec3;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// Box that contains nothing; extending it with a point yields that point
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::EMPTY;
        for point in points {
            bounds.extend(point);
        }
        bounds
    }

    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }
}

/// Where the camera sits and what it looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Camera pose that frames the whole box.
///
/// The camera is placed on the `(1, 0.8, 1)` diagonal from the box center at
/// 2.2 times the largest box dimension. Returns `None` for empty or
/// degenerate (zero-sized) boxes, where no direction can be derived.
pub fn frame_bounds(bounds: &Bounds) -> Option<CameraPose> {
    if bounds.is_empty() {
        return None;
    }
    let max_dim = bounds.max_dimension();
    if !max_dim.is_finite() || max_dim <= f32::EPSILON {
        return None;
    }

    let center = bounds.center();
    let dist = max_dim * FRAMING_DISTANCE_FACTOR;
    Some(CameraPose {
        position: center + Vec3::new(dist, dist * FRAMING_HEIGHT_FACTOR, dist),
        target: center,
    })
}

/// Aspect ratio of a surface, `None` when either side is zero
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return None;
    }
    Some(width / height)
}

/// Symmetric perspective view volume used to check what a pose can see
#[derive(Debug, Clone, Copy)]
pub struct ViewFrustum {
    pub pose: CameraPose,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewFrustum {
    /// Frustum with the widget's fixed projection parameters
    pub fn landscape(pose: CameraPose, aspect: f32) -> Self {
        Self {
            pose,
            fov_y: CAMERA_FOV_DEGREES.to_radians(),
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        let forward = (self.pose.target - self.pose.position).normalize_or_zero();
        let right = forward.cross(CAMERA_UP).normalize_or_zero();
        if forward == Vec3::ZERO || right == Vec3::ZERO {
            return false;
        }
        let up = right.cross(forward);

        let offset = point - self.pose.position;
        let depth = offset.dot(forward);
        if depth < self.near || depth > self.far {
            return false;
        }

        let half_height = depth * (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;
        offset.dot(up).abs() <= half_height && offset.dot(right).abs() <= half_width
    }

    pub fn contains_bounds(&self, bounds: &Bounds) -> bool {
        bounds.corners().iter().all(|corner| self.contains_point(*corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_bounds() {
        assert!(Bounds::EMPTY.is_empty());
        assert!(frame_bounds(&Bounds::EMPTY).is_none());
        let point = Bounds::from_points([Vec3::ONE]);
        assert!(!point.is_empty());
        // a single point has no size to frame
        assert!(frame_bounds(&point).is_none());
    }

    #[test]
    fn test_from_points_and_union() {
        let a = Bounds::from_points([Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, -4.0, 0.0)]);
        assert_eq!(a.min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(a.max, Vec3::new(3.0, 0.0, 2.0));

        let b = Bounds::from_min_max(Vec3::splat(5.0), Vec3::splat(4.0));
        assert_eq!(b.min, Vec3::splat(4.0));
        let joined = a.union(&b);
        assert_eq!(joined.min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(joined.max, Vec3::splat(5.0));
    }

    #[test]
    fn test_frame_offset_follows_largest_dimension() {
        let bounds = Bounds::from_min_max(Vec3::new(-5.0, -1.0, -2.0), Vec3::new(5.0, 1.0, 2.0));
        let pose = frame_bounds(&bounds).unwrap();
        // largest dimension is 10 on x, so dist = 22
        assert_eq!(pose.target, Vec3::ZERO);
        assert!(pose.position.abs_diff_eq(Vec3::new(22.0, 17.6, 22.0), 1e-4));
    }

    #[rstest]
    #[case(Vec3::ZERO, Vec3::ONE)]
    #[case(Vec3::new(100.0, -20.0, 35.0), Vec3::new(4.0, 1.0, 2.0))]
    #[case(Vec3::new(-3.0, 7.0, 0.0), Vec3::new(0.5, 8.0, 0.5))]
    #[case(Vec3::new(10.0, 0.0, -10.0), Vec3::new(150.0, 30.0, 150.0))]
    #[case(Vec3::ZERO, Vec3::new(0.2, 0.05, 0.3))]
    fn test_framed_bounds_fit_in_view(
        #[case] center: Vec3,
        #[case] size: Vec3,
        #[values(1.0, 4.0 / 3.0, 16.0 / 9.0)] aspect: f32,
    ) {
        let bounds = Bounds::from_min_max(center - size * 0.5, center + size * 0.5);
        let pose = frame_bounds(&bounds).unwrap();
        let frustum = ViewFrustum::landscape(pose, aspect);
        assert!(frustum.contains_bounds(&bounds), "{bounds:?} not framed by {pose:?}");
    }

    #[test]
    fn test_frustum_rejects_points_behind_camera() {
        let pose = CameraPose {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
        };
        let frustum = ViewFrustum::landscape(pose, 1.0);
        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -1000.0)));
        assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, 0.0)));
    }

    #[rstest]
    #[case(800.0, 600.0, Some(800.0 / 600.0))]
    #[case(400.0, 300.0, Some(400.0 / 300.0))]
    #[case(0.0, 300.0, None)]
    #[case(400.0, 0.0, None)]
    fn test_aspect_ratio(#[case] width: f32, #[case] height: f32, #[case] expected: Option<f32>) {
        assert_eq!(aspect_ratio(width, height), expected);
    }
}
