//! Domain-critical regression tests for gray-levels.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::graymap::GrayMap;
    use crate::reduce::{LevelError, LevelReducer};

    fn gradient_map(width: usize, height: usize) -> GrayMap {
        let pixels: Vec<u8> = (0..width * height).map(|i| (i % 256) as u8).collect();
        GrayMap::from_raw(pixels, width, height).unwrap()
    }

    // ========================================================================
    // GAP 1: Output values must be bucket floors
    // ========================================================================

    /// If this breaks, it means: the quantizer is rounding instead of
    /// flooring, or computing the bucket width from 255 instead of 256.
    /// Every output sample must be an exact multiple of `256 / levels` and
    /// must never exceed the input sample it replaced.
    #[test]
    fn test_outputs_are_multiples_of_factor_and_monotonic() {
        let image = gradient_map(64, 16);

        for levels in [1u16, 2, 3, 4, 7, 8, 16, 32, 64, 100, 128, 255, 256] {
            let reducer = LevelReducer::new(levels).unwrap();
            let factor = reducer.factor();
            let reduced = reducer.reduce(&image);

            for (&out, &inp) in reduced.pixels().iter().zip(image.pixels()) {
                assert_eq!(
                    out as u16 % factor,
                    0,
                    "REGRESSION: levels={levels} produced {out}, not a multiple of {factor}"
                );
                assert!(
                    out <= inp,
                    "REGRESSION: levels={levels} mapped {inp} up to {out}; \
                     floor quantization must never increase a sample"
                );
            }
        }
    }

    // ========================================================================
    // GAP 2: Requested level count is an upper bound
    // ========================================================================

    /// If this breaks, it means: the bucket assignment is off by one and
    /// produces more distinct values than requested. Integer truncation may
    /// legitimately produce *fewer* values, never more.
    #[test]
    fn test_reduced_image_never_exceeds_requested_levels() {
        let image = gradient_map(256, 4);
        assert_eq!(image.unique_levels(), 256);

        for levels in [1u16, 2, 3, 4, 8, 16, 32, 64, 128, 256] {
            let reduced = LevelReducer::new(levels).unwrap().reduce(&image);
            let unique = reduced.unique_levels();
            assert!(
                unique <= levels as usize,
                "REGRESSION: levels={levels} produced {unique} distinct values"
            );
        }
    }

    // ========================================================================
    // GAP 3: Degenerate level counts
    // ========================================================================

    /// If this breaks, it means: the `levels = 256` fast path (factor 1)
    /// or the `levels = 1` degenerate case (factor 256, everything maps to
    /// bucket floor 0) regressed, or clamping above 256 stopped matching
    /// the 256 behavior.
    #[test]
    fn test_identity_all_zero_and_clamp() {
        let image = gradient_map(32, 8);

        let identity = LevelReducer::new(256).unwrap().reduce(&image);
        assert_eq!(identity, image, "levels=256 must be the identity");

        let clamped = LevelReducer::new(1000).unwrap().reduce(&image);
        assert_eq!(clamped, image, "levels>256 must clamp to the identity");

        let flat = LevelReducer::new(1).unwrap().reduce(&image);
        assert!(
            flat.pixels().iter().all(|&v| v == 0),
            "levels=1 must produce an all-zero map"
        );
        assert_eq!(flat.width(), image.width());
        assert_eq!(flat.height(), image.height());
    }

    // ========================================================================
    // GAP 4: Idempotence
    // ========================================================================

    /// If this breaks, it means: quantizing an already-quantized image
    /// moves samples again, i.e. bucket floors are not fixed points of the
    /// transform. Re-running a study over existing outputs would then
    /// silently degrade them.
    #[test]
    fn test_reduce_is_idempotent() {
        let image = gradient_map(64, 8);

        for levels in [2u16, 4, 8, 16, 64, 256] {
            let reducer = LevelReducer::new(levels).unwrap();
            let once = reducer.reduce(&image);
            let twice = reducer.reduce(&once);
            assert_eq!(
                once, twice,
                "REGRESSION: levels={levels} is not idempotent"
            );
        }
    }

    // ========================================================================
    // GAP 5: Invalid-argument rejection
    // ========================================================================

    /// If this breaks, it means: a zero level count slipped past
    /// validation. The original behavior for zero was an unvalidated
    /// division fault; here it must be an explicit error, never a clamp
    /// to 1 and never a panic.
    #[test]
    fn test_zero_levels_is_an_error_not_a_panic() {
        assert_eq!(LevelReducer::new(0).unwrap_err(), LevelError::ZeroLevels);
    }
}
