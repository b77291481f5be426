#[cfg(test)]
mod _tests_geometry2d {
    use super::super::geometry2d::*;
    use super::super::geometry2d_error::GeometryError;
    use super::super::geometry2d_primitives::{point, AxisRect, Point};
    use crate::interfaces::{ShapeKind, Winding};
    use approx::assert_relative_eq;

    // Helper function for approximate float comparison
    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_vector_approx_eq(v1: Point, v2: Point, epsilon: f64) {
        if !approx_eq(v1.x, v2.x, epsilon) || !approx_eq(v1.y, v2.y, epsilon) {
            panic!("Vectors not approximately equal: {:?} != {:?}", v1, v2);
        }
    }

    fn rectangle_polygon() -> Polygon {
        Polygon::new(vec![
            point(0.0, 0.0),
            point(0.0, 5.0),
            point(7.0, 5.0),
            point(7.0, 0.0),
        ])
        .unwrap()
    }

    fn heptagon() -> Polygon {
        Polygon::new(vec![
            point(-2.0, 2.0),
            point(-1.0, 5.0),
            point(2.0, 8.0),
            point(5.0, 7.0),
            point(6.0, 4.0),
            point(4.0, 1.0),
            point(0.0, 0.0),
        ])
        .unwrap()
    }

    fn all_shapes() -> Vec<Shape> {
        vec![
            Rectangle::from_corners(point(1.0, 2.0), point(4.0, 7.0)).into(),
            Square::new(point(2.0, -1.0), 10.0).into(),
            rectangle_polygon().into(),
            heptagon().into(),
        ]
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(point(1.0, 2.0), point(4.0, 7.0));

        assert_relative_eq!(rect.area(), 15.0);
        let frame = rect.frame_rect();
        assert_relative_eq!(frame.width, 3.0);
        assert_relative_eq!(frame.height, 5.0);
        assert_vector_approx_eq(frame.center, point(2.5, 4.5), 1e-12);
    }

    #[test]
    fn test_rectangle_from_rect() {
        let rect = Rectangle::from_rect(AxisRect::new(6.0, 7.0, point(11.0, 2.0)));

        assert_relative_eq!(rect.area(), 42.0);
        assert_eq!(rect.frame_rect(), AxisRect::new(6.0, 7.0, point(11.0, 2.0)));
    }

    #[test]
    fn test_rectangle_area_matches_corner_span() {
        let corners = [
            (point(-3.0, 1.0), point(2.0, 4.5)),
            (point(0.0, 0.0), point(0.0, 9.0)),
            (point(10.0, -20.0), point(12.5, -1.0)),
        ];

        for (a, b) in corners {
            let rect = Rectangle::from_corners(a, b);
            assert_relative_eq!(rect.area(), (b.x - a.x).abs() * (b.y - a.y).abs());
        }
    }

    #[test]
    fn test_rectangle_negative_dimensions_are_kept() {
        // Swapped corners are not reordered
        let rect = Rectangle::from_corners(point(4.0, 7.0), point(1.0, 2.0));

        assert_relative_eq!(rect.width, -3.0);
        assert_relative_eq!(rect.height, -5.0);
        assert_relative_eq!(rect.area(), 15.0);
    }

    #[test]
    fn test_rectangle_translate_and_scale() {
        let mut rect = Rectangle::new(2.0, 4.0, point(1.0, 1.0));

        rect.translate_to(point(-3.0, 5.0));
        assert_eq!(rect.center(), point(-3.0, 5.0));

        rect.translate_by(1.0, -2.0);
        assert_eq!(rect.center(), point(-2.0, 3.0));

        rect.scale_from(2.5);
        assert_relative_eq!(rect.width, 5.0);
        assert_relative_eq!(rect.height, 10.0);
        assert_eq!(rect.center(), point(-2.0, 3.0));
    }

    #[test]
    fn test_square_from_left_bottom() {
        let square = Square::new(point(2.0, -1.0), 10.0);

        assert_relative_eq!(square.area(), 100.0);
        assert_eq!(square.center(), point(7.0, 4.0));
        assert_vector_approx_eq(square.frame_rect().left_bottom(), point(2.0, -1.0), 1e-12);
    }

    #[test]
    fn test_square_from_rect_takes_lesser_side() {
        let square = Square::from_rect(AxisRect::new(6.0, 7.0, point(11.0, 2.0)));
        assert_relative_eq!(square.size, 6.0);
        assert_eq!(square.center, point(11.0, 2.0));

        let square = Square::from_rect(AxisRect::new(5.0, 2.0, point(0.0, 0.0)));
        assert_relative_eq!(square.size, 2.0);
        assert_relative_eq!(square.area(), 4.0);
    }

    #[test]
    fn test_square_frame_stays_square() {
        let mut square = Square::new(point(0.0, 0.0), 3.0);
        square.scale_from(1.5);
        square.translate_by(2.0, 2.0);

        let frame = square.frame_rect();
        assert_eq!(frame.width, frame.height);
        assert_relative_eq!(frame.width, 4.5);
        assert_eq!(frame.center, point(3.5, 3.5));
    }

    #[test]
    fn test_polygon_area_and_centroid() {
        let polygon = rectangle_polygon();

        assert_relative_eq!(polygon.area(), 35.0);
        assert_vector_approx_eq(polygon.center(), point(3.5, 2.5), 1e-12);
        assert_eq!(polygon.vertices().len(), 4);
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let result = Polygon::new(vec![point(0.0, 0.0), point(1.0, 1.0)]);
        assert_eq!(result, Err(GeometryError::InvalidGeometry { vertices: 2 }));

        let result = Polygon::new(Vec::new());
        assert_eq!(result, Err(GeometryError::InvalidGeometry { vertices: 0 }));
    }

    #[test]
    fn test_polygon_winding() {
        // Listed clockwise
        let polygon = rectangle_polygon();
        assert_eq!(polygon.winding(), Winding::Clockwise);
        assert_relative_eq!(polygon.signed_area(), -35.0);

        let reversed = Polygon::new(polygon.vertices().iter().rev().copied().collect()).unwrap();
        assert_eq!(reversed.winding(), Winding::CounterClockwise);
        assert_relative_eq!(reversed.area(), 35.0);
        assert_vector_approx_eq(reversed.center(), point(3.5, 2.5), 1e-12);
    }

    #[test]
    fn test_polygon_frame_rect() {
        let frame = heptagon().frame_rect();

        assert_relative_eq!(frame.width, 8.0);
        assert_relative_eq!(frame.height, 8.0);
        assert_vector_approx_eq(frame.center, point(2.0, 4.0), 1e-12);
    }

    #[test]
    fn test_polygon_translate_moves_every_vertex() {
        let mut polygon = rectangle_polygon();
        polygon.translate_to(point(0.0, 0.0));

        assert_vector_approx_eq(polygon.center(), point(0.0, 0.0), 1e-12);
        assert_vector_approx_eq(polygon.vertices()[0], point(-3.5, -2.5), 1e-12);
        assert_vector_approx_eq(polygon.vertices()[2], point(3.5, 2.5), 1e-12);

        polygon.translate_by(1.0, 2.0);
        assert_vector_approx_eq(polygon.center(), point(1.0, 2.0), 1e-12);
        assert_vector_approx_eq(polygon.vertices()[0], point(-2.5, -0.5), 1e-12);
    }

    #[test]
    fn test_polygon_scale_about_centroid() {
        let mut polygon = rectangle_polygon();
        polygon.scale_from(2.0);

        assert_vector_approx_eq(polygon.center(), point(3.5, 2.5), 1e-12);
        assert_vector_approx_eq(polygon.vertices()[0], point(-3.5, -2.5), 1e-12);
        assert_vector_approx_eq(polygon.vertices()[2], point(10.5, 7.5), 1e-12);

        let frame = polygon.frame_rect();
        assert_relative_eq!(frame.width, 14.0);
        assert_relative_eq!(frame.height, 10.0);
    }

    #[test]
    fn test_polygon_area_invariant_under_translation() {
        let mut polygon = heptagon();
        let area = polygon.area();

        polygon.translate_by(-13.25, 7.5);
        assert_relative_eq!(polygon.area(), area, epsilon = 1e-9);

        polygon.translate_to(point(100.0, -40.0));
        assert_relative_eq!(polygon.area(), area, epsilon = 1e-9);
    }

    #[test]
    fn test_area_scales_quadratically() {
        for factor in [0.5, 1.5, 3.0] {
            for mut shape in all_shapes() {
                let area = shape.area();
                shape.scale_from(factor);
                assert_relative_eq!(shape.area(), area * factor * factor, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_translate_by_shifts_frame_center_only() {
        let (dx, dy) = (3.25, -8.5);

        for mut shape in all_shapes() {
            let before = shape.frame_rect();
            shape.translate_by(dx, dy);
            let after = shape.frame_rect();

            assert_relative_eq!(after.width, before.width, epsilon = 1e-9);
            assert_relative_eq!(after.height, before.height, epsilon = 1e-9);
            assert_vector_approx_eq(after.center, before.center + point(dx, dy), 1e-9);
        }
    }

    #[test]
    fn test_shape_dispatch() {
        let shapes = all_shapes();
        let kinds: Vec<ShapeKind> = shapes.iter().map(|s| s.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                ShapeKind::Rectangle,
                ShapeKind::Square,
                ShapeKind::Polygon,
                ShapeKind::Polygon
            ]
        );
        assert_relative_eq!(shapes[0].area(), 15.0);
        assert_relative_eq!(shapes[1].area(), 100.0);
        assert_relative_eq!(shapes[2].area(), 35.0);
        assert_eq!(shapes[1].center(), point(7.0, 4.0));
    }
}
