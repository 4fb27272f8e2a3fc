use afisviz::{
    Archive, Artifact, ArtifactKey, BlockGrid, BooleanMatrix, DoubleMatrix, EdgeHashEntry,
    EdgePair, EdgeShape, Fragment, IndexedEdge, IntPoint, Minutia, MinutiaPair, MinutiaType,
    PairingGraph, Pixmap, Template, VizError, resolve,
};

fn minutia(x: i32, y: i32) -> Minutia {
    Minutia {
        position: IntPoint::new(x, y),
        direction: 0.0,
        minutia_type: MinutiaType::Ending,
    }
}

fn probe_template() -> Template {
    Template {
        size: IntPoint::new(64, 64),
        minutiae: vec![minutia(10, 10), minutia(30, 20), minutia(50, 40)],
    }
}

fn session_archive() -> Archive {
    let mut decoded = DoubleMatrix::new(64, 64);
    decoded.set(10, 10, 0.5);
    decoded.set(20, 20, 1.0);

    let blocks = BlockGrid::regular(IntPoint::new(64, 64), 16);
    let mut contrast = DoubleMatrix::new(4, 4);
    contrast.set(0, 0, 0.9);
    contrast.set(3, 3, 0.1);

    let mut binarized = BooleanMatrix::new(64, 64);
    binarized.set(5, 5, true);

    let pair = |probe, candidate| MinutiaPair { probe, candidate };

    Archive::from_iter([
        (ArtifactKey::DecodedImage, Artifact::Grayscale(decoded)),
        (ArtifactKey::Blocks, Artifact::Blocks(blocks)),
        (ArtifactKey::Contrast, Artifact::Grayscale(contrast)),
        (ArtifactKey::Binarized, Artifact::Boolean(binarized)),
        (
            ArtifactKey::ProbeTemplate,
            Artifact::Template(probe_template()),
        ),
        (
            ArtifactKey::CandidateTemplate,
            Artifact::Template(Template {
                size: IntPoint::new(48, 48),
                minutiae: vec![minutia(8, 8), minutia(24, 24), minutia(40, 16)],
            }),
        ),
        (
            ArtifactKey::EdgeHash,
            Artifact::EdgeHash(edge_hash_both_directions()),
        ),
        (
            ArtifactKey::Pairing,
            Artifact::Pairing(PairingGraph {
                root: pair(0, 1),
                tree: vec![EdgePair {
                    from: pair(0, 1),
                    to: pair(1, 0),
                }],
                support: vec![EdgePair {
                    from: pair(0, 1),
                    to: pair(2, 2),
                }],
            }),
        ),
        (
            ArtifactKey::Roots,
            Artifact::Roots(vec![pair(0, 0), pair(1, 1)]),
        ),
    ])
}

fn edge_hash_both_directions() -> Vec<EdgeHashEntry> {
    let edge = |reference, neighbor, length| IndexedEdge {
        shape: EdgeShape {
            length,
            reference_angle: 0.4,
            neighbor_angle: 2.1,
        },
        reference,
        neighbor,
    };
    // Each undirected edge appears once per direction, across buckets
    // and in scrambled order.
    vec![
        EdgeHashEntry {
            hash: 17,
            edges: vec![edge(1, 0, 22.4), edge(0, 2, 50.0)],
        },
        EdgeHashEntry {
            hash: 42,
            edges: vec![edge(2, 0, 50.0), edge(0, 1, 22.4), edge(2, 1, 28.3)],
        },
        EdgeHashEntry {
            hash: 99,
            edges: vec![edge(1, 2, 28.3)],
        },
    ]
}

#[test]
fn decoded_image_renders_to_expected_brightness() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let rendered = resolve(ArtifactKey::DecodedImage, &session_archive()).unwrap();
    let pixmap = rendered.raster().unwrap();
    assert_eq!(pixmap.size(), IntPoint::new(64, 64));
    assert_eq!(pixmap.get(10, 10), Pixmap::gray(128));
    assert_eq!(pixmap.get(20, 20), Pixmap::gray(255));
    assert_eq!(pixmap.get(0, 0), Pixmap::gray(0));
}

#[test]
fn minutia_positions_render_one_circle_per_minutia() {
    let rendered = resolve(ArtifactKey::ProbeTemplate, &session_archive()).unwrap();
    let scene = rendered.vector().unwrap();
    let circles = scene
        .fragments()
        .iter()
        .filter(|f| matches!(f, Fragment::Circle { .. }))
        .count();
    assert_eq!(circles, 3);
    assert_eq!(scene.fragments().len(), 3);
}

#[test]
fn missing_block_map_reports_unavailable_without_disturbing_others() {
    let full = session_archive();
    let archive = Archive::from_iter(
        [
            ArtifactKey::DecodedImage,
            ArtifactKey::Contrast,
            ArtifactKey::ProbeTemplate,
        ]
        .into_iter()
        .filter_map(|key| full.get(key).cloned().map(|artifact| (key, artifact))),
    );

    let err = resolve(ArtifactKey::Contrast, &archive).unwrap_err();
    assert!(matches!(err, VizError::Unavailable(ArtifactKey::Blocks)));

    // Other registered visualizations still render.
    assert!(resolve(ArtifactKey::DecodedImage, &archive).is_ok());
    assert!(resolve(ArtifactKey::ProbeTemplate, &archive).is_ok());
}

#[test]
fn contrast_composes_base_layer_beneath_block_veils() {
    let rendered = resolve(ArtifactKey::Contrast, &session_archive()).unwrap();
    let scene = rendered.vector().unwrap();
    assert_eq!(scene.size(), IntPoint::new(64, 64));
    assert!(matches!(scene.fragments()[0], Fragment::Image { .. }));
    let rects = scene
        .fragments()
        .iter()
        .filter(|f| matches!(f, Fragment::Rect { .. }))
        .count();
    assert_eq!(rects, 16);
}

#[test]
fn edge_hash_draws_one_fragment_pair_per_undirected_edge() {
    let rendered = resolve(ArtifactKey::EdgeHash, &session_archive()).unwrap();
    let scene = rendered.vector().unwrap();
    let lines = scene
        .fragments()
        .iter()
        .filter(|f| matches!(f, Fragment::Line { .. }))
        .count();
    // Three undirected edges, two half-segments each, regardless of the
    // table's iteration order or direction duplication.
    assert_eq!(lines, 6);
}

#[test]
fn binarized_renders_two_fixed_colors() {
    let rendered = resolve(ArtifactKey::Binarized, &session_archive()).unwrap();
    let pixmap = rendered.raster().unwrap();
    assert_ne!(pixmap.get(5, 5), pixmap.get(0, 0));
}

#[test]
fn roots_cross_the_split_canvas() {
    let rendered = resolve(ArtifactKey::Roots, &session_archive()).unwrap();
    let scene = rendered.vector().unwrap();
    let lines: Vec<_> = scene
        .fragments()
        .iter()
        .filter_map(|f| match f {
            Fragment::Line { x1, x2, .. } => Some((*x1, *x2)),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 2);
    for (x1, x2) in lines {
        // Left endpoint stays in probe space, right endpoint lands past
        // the probe width plus gap.
        assert!(x1 < 64.0);
        assert!(x2 >= 64.0 + 20.0);
    }
    // Canvas spans both subjects and the gap.
    assert_eq!(scene.size().x, 64 + 20 + 48);
}

#[test]
fn pairing_projects_probe_side_by_default() {
    let rendered = resolve(ArtifactKey::Pairing, &session_archive()).unwrap();
    let scene = rendered.vector().unwrap();
    assert_eq!(scene.size(), IntPoint::new(64, 64));
    // Support + tree edges + three points + one root highlight.
    assert_eq!(scene.fragments().len(), 6);
}

#[test]
fn artifacts_round_trip_through_json() {
    let artifact = Artifact::Template(probe_template());
    let json = serde_json::to_string(&artifact).unwrap();
    let back: Artifact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, artifact);

    let pairing = Artifact::Pairing(PairingGraph {
        root: MinutiaPair {
            probe: 0,
            candidate: 1,
        },
        tree: vec![],
        support: vec![],
    });
    let json = serde_json::to_string(&pairing).unwrap();
    let back: Artifact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pairing);
}
