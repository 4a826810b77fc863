#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

    use hako::math::{point2, point3, vec2, vec3, Vec2, Vec3, Vector};

    #[test]
    fn new() {
        let v = Vec2::new([0.0, 1.0]);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 1.0);
        assert_eq!(vec2(0.0, 1.0), v);
        assert_eq!(point2(0.0, 1.0), v);

        let v = Vec3::new([0.0, 1.0, 2.0]);
        assert_eq!(v.e, [0.0, 1.0, 2.0]);
        assert_eq!(vec3(0.0, 1.0, 2.0), v);
        assert_eq!(point3(0.0, 1.0, 2.0), v);

        let v = Vector::new([0.0f32, 1.0, 2.0, 3.0]);
        assert_eq!(v[3], 3.0);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec2::zeros(), vec2(0, 0));
        assert_eq!(Vec3::zeros(), vec3(0.0, 0.0, 0.0));
        assert_eq!(Vec2::ones(), vec2(1, 1));
        assert_eq!(Vec3::ones(), vec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn from() {
        assert_eq!(Vec3::from(2.0), vec3(2.0, 2.0, 2.0));
        assert_eq!(Vec2::from([1, 2]), vec2(1, 2));
    }

    #[test]
    fn has_nans() {
        assert!(!vec3(0.0, 1.0, 2.0).has_nans());
        assert!(vec3(f32::NAN, 1.0, 2.0).has_nans());
        assert!(vec3(0.0, f32::NAN, 2.0).has_nans());
        assert!(vec3(0.0, 1.0, f64::NAN).has_nans());
        assert!(!vec2(1, 2).has_nans());
    }

    #[test]
    fn index_mut() {
        let mut v = vec3(0.0, 1.0, 2.0);
        v[0] = 3.0;
        v[2] = 4.0;
        assert_eq!(v, vec3(3.0, 1.0, 4.0));
    }

    #[test]
    fn ops() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 6.0, 8.0);
        assert_eq!(a + b, vec3(5.0, 8.0, 11.0));
        assert_eq!(b - a, vec3(3.0, 4.0, 5.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, vec3(2.0, 3.0, 4.0));

        let mut c = a;
        c += b;
        assert_eq!(c, vec3(5.0, 8.0, 11.0));
        c -= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, vec3(3.0, 6.0, 9.0));
        c /= 3.0;
        assert_eq!(c, a);
    }

    #[test]
    fn dot_cross() {
        assert_eq!(vec2(2, 3).dot(vec2(4, 5)), 23);
        assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(
            vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
            vec3(0.0, 0.0, 1.0)
        );
        assert_eq!(
            vec3(0.0, 1.0, 0.0).cross(vec3(1.0, 0.0, 0.0)),
            vec3(0.0, 0.0, -1.0)
        );
        assert_eq!(vec3(2, 3, 4).cross(vec3(5, 6, 7)), vec3(-3, 6, -3));
    }

    #[test]
    fn len_dist() {
        let v = vec3(2.0, 3.0, 6.0);
        assert_eq!(v.len_sqr(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert_eq!(vec2(1.0, 1.0).dist_sqr(vec2(4.0, 5.0)), 25.0);
        assert_eq!(vec2(1.0, 1.0).dist(vec2(4.0, 5.0)), 5.0);
    }

    #[test]
    fn normalized() {
        let v = vec3(2.0f32, 3.0, 6.0).normalized();
        assert_relative_eq!(v, vec3(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0));
        assert_relative_eq!(v.len(), 1.0);
        assert!(Vec3::<f32>::zeros().normalized().has_nans());
    }

    #[test]
    fn min_max() {
        let a = vec3(0.0, 5.0, -1.0);
        let b = vec3(1.0, 4.0, -2.0);
        assert_eq!(a.min(b), vec3(0.0, 4.0, -2.0));
        assert_eq!(a.max(b), vec3(1.0, 5.0, -1.0));
        assert_eq!(a.min_comp(), -1.0);
        assert_eq!(a.max_comp(), 5.0);
        assert_eq!(vec3(-1.0, 2.0, -3.0).abs(), vec3(1.0, 2.0, 3.0));

        // Integer vectors order their components the same way
        assert_eq!(vec2(1, 5).min(vec2(3, 2)), vec2(1, 2));
        assert_eq!(vec2(1, 5).max(vec2(3, 2)), vec2(3, 5));
        assert_eq!(vec3(-4i64, 7, 0).min_comp(), -4);
    }

    #[test]
    fn min_max_keep_nans() {
        let a = vec3(f64::NAN, 1.0, 2.0);
        let b = vec3(0.0, 0.0, 3.0);
        for v in [a.min(b), b.min(a), a.max(b), b.max(a)] {
            assert!(v[0].is_nan());
        }
        assert_eq!(a.min(b)[1], 0.0);
        assert_eq!(a.max(b)[2], 3.0);
    }

    #[test]
    fn clamp() {
        let lo = Vec3::zeros();
        let hi = Vec3::ones();
        assert_eq!(vec3(-1.0, 0.5, 2.0).clamp(lo, hi), vec3(0.0, 0.5, 1.0));
        let v = vec3(f32::NAN, 2.0, -1.0).clamp(lo, hi);
        assert!(v[0].is_nan());
        assert_eq!(v[1], 1.0);
        assert_eq!(v[2], 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", vec3(0.0, 1.5, -2.0)), "(0, 1.5, -2)");
        assert_eq!(format!("{}", vec2(1, 2)), "(1, 2)");
    }

    #[test]
    fn approx() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(1.0f32 + f32::EPSILON, 2.0, 3.0);
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_ne!(a, vec3(1.1, 2.0, 3.0));
        assert_relative_eq!(a, b);
        assert_relative_ne!(a, vec3(1.0, 2.0, 3.1));
    }
}
