//! API Regression Tests for the Shape Crate Ecosystem
//!
//! These tests serve as a regression suite to ensure the public API remains
//! stable and consistent across the shape crate ecosystem. They are organized
//! in tiers of increasing complexity:
//!
//! - Tier 1: Foundation (shape-types, basic structures)
//! - Tier 2: Texture binding (coordinate forms, the shared-handle model)
//! - Tier 3: Sub-mesh extraction (masks, counts, degenerate inputs)
//! - Tier 4: Transform families and the application protocol
//! - Tier 5: Landmark alignment
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::let_underscore_must_use)]

use shape::{prelude::*, types};

// =============================================================================
// TIER 1: Foundation - Basic Types
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn point_cloud_construction() {
        let cloud = types::PointCloud::from_raw(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(cloud.len(), 2);
        assert!((cloud.points[1].z - 3.0).abs() < f64::EPSILON);

        // Misaligned raw coordinates degrade to an empty cloud
        let empty = types::PointCloud::from_raw(&[1.0, 2.0]);
        assert!(empty.is_empty());
    }

    #[test]
    fn tri_mesh_construction() {
        let mesh = types::unit_square();
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);

        // Triangles must reference existing points
        let bad = TriMesh::new(types::PointCloud::default(), vec![[0, 1, 2]]);
        assert!(bad.is_err());
    }

    #[test]
    fn field_tables_validate_lengths() {
        let mut mesh = types::unit_square();

        assert!(mesh
            .add_point_field("height", FieldData::Scalar(vec![0.0; 4]))
            .is_ok());
        assert!(mesh
            .add_point_field("short", FieldData::Scalar(vec![0.0; 3]))
            .is_err());

        assert!(mesh.point_fields().contains("height"));
        assert!(!mesh.point_fields().contains("short"));
    }

    #[test]
    fn bounds_calculation() {
        let mesh = types::unit_square();
        let bounds = mesh.bounds();

        assert!((bounds.min.x - 0.0).abs() < f64::EPSILON);
        assert!((bounds.max.x - 1.0).abs() < f64::EPSILON);
        assert!((bounds.max.y - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mesh_variants() {
        assert_eq!(MeshVariant::from_name("plain").unwrap(), MeshVariant::Plain);
        assert_eq!(
            MeshVariant::from_name("Adjacency").unwrap(),
            MeshVariant::Adjacency
        );
        assert!(MeshVariant::from_name("octree").is_err());

        let square = types::unit_square();
        let mesh = TriMesh::with_variant(
            square.points().clone(),
            square.trilist().to_vec(),
            MeshVariant::Adjacency,
        )
        .unwrap();
        assert!(mesh.adjacency().is_some());
        assert!(mesh.adjacency().unwrap().is_manifold());
    }
}

// =============================================================================
// TIER 2: Texture Binding
// =============================================================================

mod tier2_textures {
    use super::*;
    use shape::types::{TCOORDS, TextureImage};

    fn checker() -> Texture {
        Texture::new(TextureImage {
            width: 2,
            height: 2,
            pixels: vec![0, 255, 255, 0],
        })
    }

    #[test]
    fn per_point_coordinates() {
        let mut mesh = types::unit_square();
        let coords = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

        mesh.attach_texture(checker(), TexCoords::PerPoint(coords))
            .unwrap();

        assert!(mesh.texture().is_some());
        assert!(mesh.point_fields().contains(TCOORDS));
    }

    #[test]
    fn per_corner_coordinates() {
        let mut mesh = types::unit_square();
        let coords = vec![[[0.0, 0.0]; 3], [[1.0, 1.0]; 3]];

        mesh.attach_texture(checker(), TexCoords::PerCorner(coords))
            .unwrap();

        assert!(mesh.triangle_fields().contains(TCOORDS));
    }

    #[test]
    fn indexed_coordinates_resolve_per_corner() {
        let mut mesh = types::unit_square();
        let coords = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let trilist = vec![[0, 1, 3], [0, 3, 2]];

        mesh.attach_texture(checker(), TexCoords::Indexed { coords, trilist })
            .unwrap();

        assert!(mesh.triangle_fields().contains(TCOORDS));
        assert!(!mesh.point_fields().contains(TCOORDS));
    }

    #[test]
    fn texture_survives_failed_binding() {
        let mut mesh = types::unit_square();
        let result = mesh.attach_texture(checker(), TexCoords::PerPoint(vec![[0.0, 0.0]]));

        assert!(result.is_err());
        // The handle is stored even when coordinate resolution fails
        assert!(mesh.texture().is_some());
        assert!(!mesh.point_fields().contains(TCOORDS));
    }

    #[test]
    fn texture_handles_share_images() {
        let texture = checker();
        let clone = texture.clone();

        assert!(texture.shares_image(&clone));
        assert_eq!(texture.width(), 2);
        assert_eq!(texture.height(), 2);
    }
}

// =============================================================================
// TIER 3: Sub-Mesh Extraction
// =============================================================================

mod tier3_extraction {
    use super::*;

    #[test]
    fn masked_extraction() {
        let mesh = types::unit_square();
        let result =
            extract_submesh(&mesh, &[true, true, false, true], &SubmeshParams::new()).unwrap();

        assert_eq!(result.kept_points(), 3);
        assert_eq!(result.kept_triangles(), 1);
        assert_eq!(result.masked_out, 1);
        assert_eq!(result.source_points, 4);
    }

    #[test]
    fn empty_mask_gives_empty_mesh() {
        let mut mesh = types::unit_square();
        mesh.add_point_field("id", FieldData::Scalar(vec![0.0, 1.0, 2.0, 3.0]))
            .unwrap();

        let result = extract_submesh(&mesh, &[false; 4], &SubmeshParams::new()).unwrap();

        assert!(result.mesh.is_empty());
        // Field names survive with zero rows
        assert!(result.mesh.point_fields().contains("id"));
    }

    #[test]
    fn fields_follow_their_points() {
        let mut mesh = types::unit_square();
        mesh.add_point_field("id", FieldData::Scalar(vec![0.0, 1.0, 2.0, 3.0]))
            .unwrap();

        let result =
            extract_submesh(&mesh, &[true, true, false, true], &SubmeshParams::new()).unwrap();

        match result.mesh.point_fields().get("id").unwrap() {
            FieldData::Scalar(values) => assert_eq!(values, &[0.0, 1.0, 3.0]),
            other => panic!("unexpected field shape: {:?}", other),
        }
    }

    #[test]
    fn extraction_reports_orphans() {
        let mesh = types::unit_square();
        // Every triangle uses the masked-out corner, so the surviving
        // points all lose their triangles.
        let result =
            extract_submesh(&mesh, &[true, true, true, false], &SubmeshParams::new()).unwrap();

        assert_eq!(result.kept_triangles(), 0);
        assert_eq!(result.orphaned, 3);
        assert_eq!(result.masked_out, 1);
    }

    #[test]
    fn texture_is_shared_not_copied() {
        use shape::types::TextureImage;

        let mut mesh = types::unit_square();
        let texture = Texture::new(TextureImage {
            width: 1,
            height: 1,
            pixels: vec![255, 255, 255, 255],
        });
        mesh.attach_texture(
            texture.clone(),
            TexCoords::PerPoint(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]),
        )
        .unwrap();

        let result =
            extract_submesh(&mesh, &[true, true, false, true], &SubmeshParams::new()).unwrap();

        assert!(result.mesh.texture().unwrap().shares_image(&texture));
    }

    #[test]
    fn variant_can_be_overridden() {
        let mesh = types::unit_square();
        let params = SubmeshParams::new().with_variant(MeshVariant::Adjacency);
        let result = extract_submesh(&mesh, &[true, true, false, true], &params).unwrap();

        assert!(result.mesh.adjacency().is_some());
    }

    #[test]
    fn display_summarizes_extraction() {
        let mesh = types::unit_square();
        let result =
            extract_submesh(&mesh, &[true, true, false, true], &SubmeshParams::new()).unwrap();

        let display = format!("{}", result);
        assert!(display.contains("→")); // Shows before → after
    }
}

// =============================================================================
// TIER 4: Transform Families and the Application Protocol
// =============================================================================

mod tier4_transforms {
    use super::*;
    use shape::transform::TransformFamily;

    #[test]
    fn families_apply_to_points() {
        let p = types::Point3::new(1.0, 0.0, 0.0);

        let moved = Translation::from_components(0.0, 1.0, 0.0).apply_point(&p);
        assert!((moved.y - 1.0).abs() < f64::EPSILON);

        let scaled = UniformScale::new(3.0).apply_point(&p);
        assert!((scaled.x - 3.0).abs() < f64::EPSILON);

        let spun =
            Rotation::from_axis_angle(types::Vector3::z(), std::f64::consts::PI).apply_point(&p);
        assert!((spun.x + 1.0).abs() < 1e-10);
    }

    #[test]
    fn parameter_round_trips() {
        let t = Translation::from_components(1.0, 2.0, 3.0);
        let rebuilt = Translation::from_parameters(&t.parameters()).unwrap();
        assert_eq!(rebuilt, t);

        let a: Affine = UniformScale::new(2.0).into();
        let rebuilt = Affine::from_parameters(&a.parameters()).unwrap();
        assert_eq!(rebuilt, a);
    }

    #[test]
    fn inverse_fails_only_on_request() {
        use shape::transform::TransformError;

        // Constructing and applying a collapsing scale is fine
        let collapse = UniformScale::new(0.0);
        let squashed = collapse.apply_point(&types::Point3::new(1.0, 2.0, 3.0));
        assert!(squashed.x.abs() < f64::EPSILON);

        // Only inversion reports the failure
        assert!(matches!(
            collapse.inverse(),
            Err(TransformError::NonInvertible { .. })
        ));
    }

    #[test]
    fn composition_applies_earlier_first() {
        let shift: Affine = Translation::from_components(1.0, 0.0, 0.0).into();
        let double: Affine = UniformScale::new(2.0).into();

        let both = double.compose(&shift);
        let result = both.apply_point(&types::Point3::origin());
        assert!((result.x - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn protocol_covers_meshes_clouds_and_raw_points() {
        let shift = Translation::from_components(0.0, 0.0, 1.0);

        let mesh = shift.apply(&types::unit_square());
        assert!((mesh.points().point(0).unwrap().z - 1.0).abs() < f64::EPSILON);

        let cloud = shift.apply(&PointCloud::from(vec![types::Point3::origin()]));
        assert!((cloud.points[0].z - 1.0).abs() < f64::EPSILON);

        let points = vec![types::Point3::origin()];
        let raw = shift.apply(&points);
        assert!((raw[0].z - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jacobians_match_promoted_linear_parts() {
        let r = Rotation::from_axis_angle(types::Vector3::x(), 0.5);
        let a = Affine::from(r);
        let p = types::Point3::new(1.0, 1.0, 1.0);

        assert!((r.jacobian(&p) - a.jacobian(&p)).norm() < 1e-12);
    }
}

// =============================================================================
// TIER 5: Landmark Alignment
// =============================================================================

mod tier5_alignment {
    use super::*;
    use shape::transform::{AlignError, align_group};

    fn landmarks() -> Vec<types::Point3<f64>> {
        vec![
            types::Point3::new(0.0, 0.0, 0.0),
            types::Point3::new(1.0, 0.0, 0.0),
            types::Point3::new(0.5, 1.0, 0.0),
        ]
    }

    #[test]
    fn align_points_recovers_offsets() {
        let source = landmarks();
        let target: Vec<_> = source
            .iter()
            .map(|p| types::Point3::new(p.x + 2.0, p.y - 1.0, p.z))
            .collect();

        let transform = align_points(&source, &target).unwrap();

        for (s, t) in source.iter().zip(&target) {
            let moved = transform.apply_point(s);
            assert!((moved.coords - t.coords).norm() < 1e-9);
        }
    }

    #[test]
    fn group_alignment_bookkeeping() {
        let base = landmarks();
        let shifted: Vec<_> = base
            .iter()
            .map(|p| types::Point3::new(p.x + 2.0, p.y, p.z))
            .collect();

        let group = align_group(&[base, shifted], None).unwrap();

        assert_eq!(group.len(), 2);
        assert!(group.transform(0).is_some());
        assert!(group.aligned(1).is_some());
        assert!(group.transform(2).is_none());
    }

    #[test]
    fn alignment_rejects_mismatches() {
        let source = vec![types::Point3::origin()];
        let target = vec![types::Point3::origin(), types::Point3::origin()];

        assert!(matches!(
            align_points(&source, &target),
            Err(AlignError::LandmarkCount {
                source: 1,
                target: 2,
            })
        ));
    }
}

// =============================================================================
// Error Handling Patterns
// =============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn field_errors_report_both_sizes() {
        use shape::types::ShapeError;

        let mut mesh = types::unit_square();
        let result = mesh.add_point_field("bad", FieldData::Scalar(vec![0.0; 7]));

        assert!(matches!(
            result,
            Err(ShapeError::FieldDimension {
                kind: FieldKind::Point,
                supplied: 7,
                required: 4,
                ..
            })
        ));
    }

    #[test]
    fn texture_errors_report_binding_kind() {
        use shape::types::{ShapeError, TextureImage};

        let mut mesh = types::unit_square();
        let texture = Texture::new(TextureImage {
            width: 1,
            height: 1,
            pixels: vec![0; 4],
        });
        let result = mesh.attach_texture(texture, TexCoords::PerCorner(vec![[[0.0, 0.0]; 3]]));

        assert!(matches!(
            result,
            Err(ShapeError::TextureShape {
                kind: FieldKind::Triangle,
                supplied: 1,
                required: 2,
            })
        ));
    }

    #[test]
    fn mask_length_is_validated() {
        use shape::extract::ExtractError;

        let mesh = types::unit_square();
        let result = extract_submesh(&mesh, &[true; 3], &SubmeshParams::new());

        assert!(matches!(
            result,
            Err(ExtractError::MaskLength {
                mask_len: 3,
                point_count: 4,
            })
        ));
    }

    #[test]
    fn unknown_variant_names_are_echoed() {
        use shape::types::ShapeError;

        let result = MeshVariant::from_name("bsp");
        assert!(matches!(result, Err(ShapeError::UnknownVariant { .. })));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("bsp"));
    }

    #[test]
    fn collapsed_transforms_still_apply() {
        let collapse = UniformScale::new(0.0);
        let mesh = collapse.apply(&types::unit_square());

        // Geometry collapses, structure survives
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
