#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use itertools::Itertools;
    use std::f64::consts::FRAC_PI_2;

    use hako::{
        math::{point2, point3, vec2, vec3, Matrix, Point2},
        shapes::{Aabb, Aabc, Capsule, Line, LineSegment, Obb, Plane, Ray, Sphere, Triangle},
        BoundingVolume,
    };

    #[test]
    fn aabb_new() {
        let bb = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        assert_eq!(bb.p_min, point3(0.0, 0.0, 0.0));
        assert_eq!(bb.p_max, point3(1.0, 1.0, 1.0));
        let bb = Aabb::new(point3(1.0, 0.0, 1.0), point3(0.0, 1.0, 0.0));
        assert_eq!(bb.min(), point3(0.0, 0.0, 0.0));
        assert_eq!(bb.max(), point3(1.0, 1.0, 1.0));

        let bb = Aabb::from_center(point2(1.0, 2.0), vec2(0.5, 1.0));
        assert_eq!(bb, Aabb::new(point2(0.5, 1.0), point2(1.5, 3.0)));
        assert_eq!(bb.center(), point2(1.0, 2.0));
        assert_eq!(bb.half_extents(), vec2(0.5, 1.0));
        assert_eq!(bb.diagonal(), vec2(1.0, 2.0));
    }

    #[test]
    fn aabb_corners() {
        let bb = Aabb::new(point2(0.0, 0.0), point2(1.0, 2.0));
        let corners: Vec<Point2<f64>> = bb.corners().collect();
        assert_eq!(
            corners,
            vec![
                point2(0.0, 0.0),
                point2(1.0, 0.0),
                point2(0.0, 2.0),
                point2(1.0, 2.0)
            ]
        );

        let bb = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        let corners = bb.corners();
        assert_eq!(corners.len(), 8);
        let corners = corners.collect::<Vec<_>>();
        for (a, b) in corners.iter().tuple_combinations() {
            assert_ne!(a, b);
        }
        assert_eq!(bb.corner(0), bb.p_min);
        assert_eq!(bb.corner(7), bb.p_max);
        assert_eq!(bb.corner(5), point3(1.0, 0.0, 1.0));
    }

    #[test]
    fn aabb_inside() {
        let bb = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        assert!(bb.inside(point3(0.5, 0.5, 0.5)));
        assert!(bb.inside(point3(1.0, 0.0, 1.0)));
        assert!(!bb.inside(point3(1.5, 0.5, 0.5)));
        assert!(!bb.inside(point3(f64::NAN, 0.5, 0.5)));
    }

    #[test]
    fn extents_keep_nans() {
        let nan = point3(f64::NAN, 0.5, 0.5);
        let bb = Aabb::new(nan, point3(1.0, 1.0, 1.0));
        assert!(bb.p_min[0].is_nan());
        assert!(bb.p_max[0].is_nan());
        assert_eq!(bb.p_min[1], 0.5);
        assert_eq!(bb.p_max[1], 1.0);

        let triangle = Triangle::new(nan, point3(0.2, 0.2, 0.2), point3(0.8, 0.8, 0.8));
        assert!(triangle.min().has_nans());
        assert!(triangle.max().has_nans());
        let capsule = Capsule::new(nan, point3(0.5, 0.5, 0.5), 0.1);
        assert!(capsule.min().has_nans());
        assert!(capsule.max().has_nans());

        let segment = LineSegment::new(nan, point3(0.8, 0.8, 0.8));
        assert!(BoundingVolume::from(segment).bounding_box().has_nans());
    }

    #[test]
    fn aabc() {
        let c = Aabc::new(point3(1.0, 1.0, 1.0), 0.5);
        assert_eq!(c.min(), point3(0.5, 0.5, 0.5));
        assert_eq!(c.max(), point3(1.5, 1.5, 1.5));
        assert_eq!(
            Aabb::from(c),
            Aabb::new(point3(0.5, 0.5, 0.5), point3(1.5, 1.5, 1.5))
        );
        assert_eq!(c.corners().count(), 8);
        assert!(!c.has_nans());
        assert!(Aabc::new(point3(1.0, 1.0, 1.0), f64::NAN).has_nans());
    }

    #[test]
    fn sphere_capsule() {
        let s = Sphere::new(point3(1.0, 2.0, 3.0), 1.0);
        assert_eq!(s.min(), point3(0.0, 1.0, 2.0));
        assert_eq!(s.max(), point3(2.0, 3.0, 4.0));

        let c = Capsule::new(point3(0.0, 0.0, 0.0), point3(2.0, -1.0, 0.0), 0.5);
        assert_eq!(
            c.segment(),
            LineSegment::new(point3(0.0, 0.0, 0.0), point3(2.0, -1.0, 0.0))
        );
        assert_eq!(c.min(), point3(-0.5, -1.5, -0.5));
        assert_eq!(c.max(), point3(2.5, 0.5, 0.5));
        let [s0, s1] = c.end_spheres();
        assert_eq!(s0, Sphere::new(point3(0.0, 0.0, 0.0), 0.5));
        assert_eq!(s1, Sphere::new(point3(2.0, -1.0, 0.0), 0.5));
    }

    #[test]
    fn obb() {
        // Box rotated 90 degrees around z, long axis ends up along y
        let obb = Obb::new(
            point3(1.0, 0.0, 0.0),
            vec3(2.0, 1.0, 0.5),
            Matrix::rotation_3d(vec3(0.0, 0.0, 1.0), FRAC_PI_2),
        );
        assert_abs_diff_eq!(
            obb.to_local(point3(1.0, 2.0, 0.0)),
            point3(2.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(obb.min(), point3(0.0, -2.0, -0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(obb.max(), point3(2.0, 2.0, 0.5), epsilon = 1e-12);

        let corners = obb.corners().collect::<Vec<_>>();
        assert_eq!(corners.len(), 8);
        for c in corners {
            let local = obb.to_local(c);
            for i in 0..3 {
                assert_relative_eq!(local[i].abs(), obb.half_extents[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn plane() {
        let p = Plane::from_point_normal(point3(0.0, 0.0, 2.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(p.offset, 2.0);
        assert_eq!(p.signed_distance(point3(5.0, 5.0, 3.0)), 1.0);
        assert_eq!(p.signed_distance(point3(5.0, 5.0, 0.0)), -2.0);
        assert_eq!(p.min(), point3(f64::NEG_INFINITY, f64::NEG_INFINITY, 2.0));
        assert_eq!(p.max(), point3(f64::INFINITY, f64::INFINITY, 2.0));

        let p = Plane::from_points(
            point3(0.0, 0.0, 1.0),
            point3(1.0, 0.0, 1.0),
            point3(0.0, 1.0, 1.0),
        );
        assert_eq!(p.normal, vec3(0.0, 0.0, 1.0));
        assert_eq!(p.offset, 1.0);

        let tilted = Plane::new(vec3(1.0, 1.0, 0.0).normalized(), 0.0);
        assert_eq!(tilted.min(), point3(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert_eq!(tilted.max(), point3(f64::INFINITY, f64::INFINITY, f64::INFINITY));

        let line: Line<f64> = Line::new(vec2(0.0, -1.0), 1.0);
        assert_eq!(line.signed_distance(point2(3.0, -1.0)), 0.0);
        assert_eq!(line.signed_distance(point2(3.0, 1.0)), -2.0);
        assert_eq!(line.min(), point2(f64::NEG_INFINITY, -1.0));
    }

    #[test]
    fn ray() {
        let r = Ray::new(point3(1.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0));
        assert_eq!(r.direction, vec3(0.0, 1.0, 0.0));
        assert_eq!(r.point(2.0), point3(1.0, 2.0, 0.0));
        assert_eq!(r.min(), point3(1.0, 0.0, 0.0));
        assert_eq!(r.max(), point3(1.0, f64::INFINITY, 0.0));

        let r = Ray::new(point2(1.0, 1.0), vec2(-1.0, 1.0));
        assert_eq!(r.min(), point2(f64::NEG_INFINITY, 1.0));
        assert_eq!(r.max(), point2(1.0, f64::INFINITY));
        assert!(Ray::new(point2(1.0, 1.0), vec2(0.0, 0.0)).has_nans());
    }

    #[test]
    fn line_segment() {
        let s = LineSegment::new(point3(0.0, 0.0, 0.0), point3(4.0, 0.0, 3.0));
        assert_eq!(s.center(), point3(2.0, 0.0, 1.5));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.min(), point3(0.0, 0.0, 0.0));
        assert_eq!(s.max(), point3(4.0, 0.0, 3.0));

        let s = LineSegment::new(point2(0.0, 0.0), point2(2.0, 0.0));
        assert_eq!(s.closest_point(point2(1.0, 5.0)), point2(1.0, 0.0));
        assert_eq!(s.closest_point(point2(-1.0, 5.0)), point2(0.0, 0.0));
        assert_eq!(s.closest_point(point2(3.0, -5.0)), point2(2.0, 0.0));

        let degenerate = LineSegment::new(point2(1.0, 1.0), point2(1.0, 1.0));
        assert_eq!(degenerate.closest_point(point2(3.0, 3.0)), point2(1.0, 1.0));
    }

    #[test]
    fn triangle() {
        let t = Triangle::new(point3(0.0, 0.0, 0.0), point3(3.0, 0.0, 0.0), point3(0.0, 3.0, 0.0));
        assert_eq!(t[1], point3(3.0, 0.0, 0.0));
        assert_eq!(t.center(), point3(1.0, 1.0, 0.0));
        assert_eq!(t.normal(), vec3(0.0, 0.0, 1.0));
        assert_eq!(t.min(), point3(0.0, 0.0, 0.0));
        assert_eq!(t.max(), point3(3.0, 3.0, 0.0));
    }

    #[test]
    fn triangle_closest_point() {
        let t = Triangle::new(point2(0.0, 0.0), point2(2.0, 0.0), point2(0.0, 2.0));
        // Vertex regions
        assert_eq!(t.closest_point(point2(-1.0, -1.0)), point2(0.0, 0.0));
        assert_eq!(t.closest_point(point2(3.0, -1.0)), point2(2.0, 0.0));
        assert_eq!(t.closest_point(point2(-1.0, 3.0)), point2(0.0, 2.0));
        // Edge regions
        assert_eq!(t.closest_point(point2(1.0, -1.0)), point2(1.0, 0.0));
        assert_eq!(t.closest_point(point2(-1.0, 1.0)), point2(0.0, 1.0));
        assert_eq!(t.closest_point(point2(2.0, 2.0)), point2(1.0, 1.0));
        // Inside
        assert_eq!(t.closest_point(point2(0.5, 0.5)), point2(0.5, 0.5));

        let t = Triangle::new(point3(0.0, 0.0, 0.0), point3(2.0, 0.0, 0.0), point3(0.0, 2.0, 0.0));
        assert_eq!(t.closest_point(point3(0.5, 0.5, 4.0)), point3(0.5, 0.5, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Aabb::new(point2(0.0, 0.0), point2(1.0, 2.0))),
            "Aabb { min: (0, 0), max: (1, 2) }"
        );
        assert_eq!(
            format!("{}", Sphere::new(point3(0.0, 1.0, 2.0), 0.5)),
            "Sphere { center: (0, 1, 2), radius: 0.5 }"
        );
        assert_eq!(
            format!("{}", Ray::new(point2(0.0, 1.0), vec2(2.0, 0.0))),
            "Ray { origin: (0, 1), direction: (1, 0) }"
        );
        assert_eq!(
            format!("{}", Triangle::new(point2(0.0, 0.0), point2(1.0, 0.0), point2(0.0, 1.0))),
            "Triangle { vertices: [(0, 0), (1, 0), (0, 1)] }"
        );
    }
}
