//! End-to-end pipeline tests: loading, the LUT chain, and fallback.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use acespick_color::{
    AP0_TO_AP1, ColorSpace, FileLutSource, LoadError, LutResource, LutSource, ResourceError,
    TransformPipeline, hex, nuke_inverse_odt,
};

/// 2x2x2 identity shaper LUT.
const IDENTITY_SPI3D: &str = "\
SPILUT 1.0
3 3
2 2 2
0 0 0 0.0 0.0 0.0
1 0 0 1.0 0.0 0.0
0 1 0 0.0 1.0 0.0
1 1 0 1.0 1.0 0.0
0 0 1 0.0 0.0 1.0
1 0 1 1.0 0.0 1.0
0 1 1 0.0 1.0 1.0
1 1 1 1.0 1.0 1.0
";

/// Doubling shaper-to-linear curve.
const DOUBLING_SPI1D: &str = "\
Version 1
From 0.0 1.0
Length 2
Components 1
{
0.0
2.0
}
";

/// Serves fixed strings, counting fetches.
struct MemoryLutSource {
    spi3d: &'static str,
    spi1d: &'static str,
    fetches: AtomicUsize,
}

impl MemoryLutSource {
    fn new(spi3d: &'static str, spi1d: &'static str) -> Self {
        Self {
            spi3d,
            spi1d,
            fetches: AtomicUsize::new(0),
        }
    }
}

impl LutSource for MemoryLutSource {
    async fn fetch(&self, resource: LutResource) -> Result<String, ResourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match resource {
            LutResource::Shaper3d => Ok(self.spi3d.to_string()),
            LutResource::ShaperToLinear1d => Ok(self.spi1d.to_string()),
        }
    }
}

/// Always fails with an HTTP-style status.
struct FailingLutSource;

impl LutSource for FailingLutSource {
    async fn fetch(&self, resource: LutResource) -> Result<String, ResourceError> {
        Err(ResourceError::Http {
            status: 404,
            resource: resource.name().to_string(),
        })
    }
}

#[tokio::test]
async fn load_success_enables_lut_chain() {
    let mut pipeline = TransformPipeline::new();
    let source = MemoryLutSource::new(IDENTITY_SPI3D, DOUBLING_SPI1D);

    assert!(pipeline.load(&source).await);
    assert!(pipeline.is_ready());
    assert!(pipeline.load_error().is_none());

    // Identity 3D LUT then doubling 1D curve: gray 0.5 becomes AP0
    // (1,1,1), and AP0_TO_AP1 preserves neutrals.
    let out = pipeline.convert([0.5, 0.5, 0.5], ColorSpace::AcesCg);
    for c in out {
        assert!((c - 1.0).abs() < 1e-4, "got {out:?}");
    }
}

#[tokio::test]
async fn log_targets_are_independent_of_lut_state() {
    // ACEScc/ACEScct take the matrix route, so a loaded LUT chain must
    // not change their output.
    let mut loaded = TransformPipeline::new();
    let source = MemoryLutSource::new(IDENTITY_SPI3D, DOUBLING_SPI1D);
    assert!(loaded.load(&source).await);

    let unloaded = TransformPipeline::new();
    let rgb = [0.5, 0.25, 0.75];
    for space in [ColorSpace::AcesCc, ColorSpace::AcesCct] {
        assert_eq!(
            loaded.convert(rgb, space),
            unloaded.convert(rgb, space),
            "{}",
            space.name()
        );
    }
    // ACEScg does switch to the LUT chain
    assert_ne!(
        loaded.convert(rgb, ColorSpace::AcesCg),
        unloaded.convert(rgb, ColorSpace::AcesCg)
    );
}

#[tokio::test]
async fn load_is_attempted_once() {
    let mut pipeline = TransformPipeline::new();
    let source = MemoryLutSource::new(IDENTITY_SPI3D, DOUBLING_SPI1D);

    assert!(pipeline.load(&source).await);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);

    // Already ready: reports readiness without refetching.
    assert!(pipeline.load(&source).await);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_load_retains_error_and_falls_back() {
    let mut pipeline = TransformPipeline::new();

    assert!(!pipeline.load(&FailingLutSource).await);
    assert!(!pipeline.is_ready());
    match pipeline.load_error() {
        Some(LoadError::Resource(ResourceError::Http { status, .. })) => {
            assert_eq!(*status, 404);
        }
        other => panic!("unexpected load state: {other:?}"),
    }

    // A failed pipeline converts exactly like an unloaded one.
    let unloaded = TransformPipeline::new();
    let rgb = [0.7, 0.2, 0.9];
    assert_eq!(
        pipeline.convert(rgb, ColorSpace::AcesCg),
        unloaded.convert(rgb, ColorSpace::AcesCg)
    );

    // No retry after failure.
    let good = MemoryLutSource::new(IDENTITY_SPI3D, DOUBLING_SPI1D);
    assert!(!pipeline.load(&good).await);
    assert_eq!(good.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unparsable_lut_is_a_parse_failure() {
    let mut pipeline = TransformPipeline::new();
    let source = MemoryLutSource::new("not a lut", DOUBLING_SPI1D);

    assert!(!pipeline.load(&source).await);
    assert!(matches!(pipeline.load_error(), Some(LoadError::Parse(_))));
}

#[tokio::test]
async fn file_source_loads_from_disk() {
    let mut spi3d = tempfile::NamedTempFile::new().unwrap();
    spi3d.write_all(IDENTITY_SPI3D.as_bytes()).unwrap();
    let mut spi1d = tempfile::NamedTempFile::new().unwrap();
    spi1d.write_all(DOUBLING_SPI1D.as_bytes()).unwrap();

    let source = FileLutSource::new(spi3d.path(), spi1d.path());
    let mut pipeline = TransformPipeline::new();
    assert!(pipeline.load(&source).await);
}

#[tokio::test]
async fn file_source_reports_missing_file() {
    let source = FileLutSource::new("/nonexistent/a.spi3d", "/nonexistent/b.spi1d");
    let mut pipeline = TransformPipeline::new();
    assert!(!pipeline.load(&source).await);
    assert!(matches!(
        pipeline.load_error(),
        Some(LoadError::Resource(ResourceError::Read { .. }))
    ));
}

#[test]
fn unloaded_fallback_matches_analytic_formula() {
    let pipeline = TransformPipeline::new();
    let rgb = [0.25, 0.5, 0.75];
    let expected = AP0_TO_AP1
        * [
            nuke_inverse_odt(rgb[0]),
            nuke_inverse_odt(rgb[1]),
            nuke_inverse_odt(rgb[2]),
        ];
    let out = pipeline.convert(rgb, ColorSpace::AcesCg);
    for i in 0..3 {
        assert!((out[i] - expected[i]).abs() < 1e-6);
    }
}

#[test]
fn hex_pick_survives_display_roundtrip() {
    let pipeline = TransformPipeline::new();
    for input in ["#000000", "#ffffff", "#4080c0", "#ff6600"] {
        let rgb = hex::parse(input).unwrap();
        let out = pipeline.convert(rgb, ColorSpace::DisplaySrgb);
        assert_eq!(hex::format(out), input);
    }
}

#[test]
fn hex_roundtrips_through_linear_srgb() {
    let pipeline = TransformPipeline::new();
    for input in ["#000000", "#ffffff", "#4080c0", "#ff6600", "#123456"] {
        let rgb = hex::parse(input).unwrap();
        let linear = pipeline.convert(rgb, ColorSpace::LinearSrgb);
        let back = pipeline.convert_back(linear, ColorSpace::LinearSrgb);
        let expected = hex::parse(input).unwrap();
        for i in 0..3 {
            assert!(
                (back[i] - expected[i]).abs() <= 1.0 / 255.0,
                "{input}: channel {i}"
            );
        }
    }
}

#[test]
fn all_targets_produce_finite_output() {
    let pipeline = TransformPipeline::new();
    for space in ColorSpace::ALL {
        for rgb in [[0.0; 3], [1.0; 3], [0.1, 0.9, 0.4], [1.2, -0.1, 0.5]] {
            let out = pipeline.convert(rgb, space);
            assert!(
                out.iter().all(|c| c.is_finite()),
                "{}: {rgb:?} -> {out:?}",
                space.name()
            );
        }
    }
}
