//! The quality-reduction loop.

use super::{EncodingAttempt, SearchConfig, SearchError, SearchResult, TargetSpec};
use crate::decode::SourceImage;
use crate::encode::{JpegQualityEncoder, QualityEncoder};

/// Find a quality at which `image` encodes within `target`.
///
/// Encodes at `config.start_quality`, then at each lower step of the
/// progression, until an attempt fits the target or `config.min_quality` has
/// been tried. Returns the last attempt. When even the floor does not fit the
/// result has `met_target == false`; that is not an error.
///
/// Attempts run strictly one after another: the next quality is only chosen
/// once the previous size is known.
///
/// # Errors
///
/// Returns `SearchError::InvalidInput`, before any encode call, for a zero
/// width or height, empty pixel data, a zero target or an invalid config.
/// Returns `SearchError::EncodeFailure` as soon as the encoder fails; no retry
/// is made.
pub fn search<E>(
    image: &SourceImage,
    target: &TargetSpec,
    config: &SearchConfig,
    encoder: &E,
) -> Result<SearchResult, SearchError>
where
    E: QualityEncoder + ?Sized,
{
    validate_inputs(image, target)?;
    config.validate()?;

    let mut index = 0;
    let mut attempt = encode_at(encoder, image, config.quality_at(index))?;
    let mut trace = vec![attempt.record()];

    while !target.is_met_by(attempt.size_bytes) && attempt.quality > config.min_quality {
        index += 1;
        attempt = encode_at(encoder, image, config.quality_at(index))?;
        trace.push(attempt.record());
    }

    let met_target = target.is_met_by(attempt.size_bytes);
    if met_target {
        log::info!(
            "target of {} bytes met at quality {} ({} bytes, {} attempts)",
            target.target_bytes,
            attempt.quality,
            attempt.size_bytes,
            trace.len()
        );
    } else {
        log::warn!(
            "target of {} bytes unreachable; best effort at quality {} is {} bytes",
            target.target_bytes,
            attempt.quality,
            attempt.size_bytes
        );
    }

    Ok(SearchResult {
        attempts_tried: trace.len() as u32,
        final_quality: attempt.quality,
        met_target,
        attempt,
        trace,
    })
}

/// [`search`] with the JPEG codec.
pub fn search_jpeg(
    image: &SourceImage,
    target: &TargetSpec,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    search(image, target, config, &JpegQualityEncoder::new())
}

fn validate_inputs(image: &SourceImage, target: &TargetSpec) -> Result<(), SearchError> {
    if image.width == 0 || image.height == 0 {
        return Err(SearchError::InvalidInput(format!(
            "image dimensions must be positive, got {}x{}",
            image.width, image.height
        )));
    }
    if image.pixels.is_empty() {
        return Err(SearchError::InvalidInput(
            "image has no pixel data".to_string(),
        ));
    }
    if target.target_bytes == 0 {
        return Err(SearchError::InvalidInput(
            "target size must be positive".to_string(),
        ));
    }
    Ok(())
}

fn encode_at<E>(
    encoder: &E,
    image: &SourceImage,
    quality: f32,
) -> Result<EncodingAttempt, SearchError>
where
    E: QualityEncoder + ?Sized,
{
    let data = encoder
        .encode(image, quality)
        .map_err(|source| SearchError::EncodeFailure { quality, source })?;
    let attempt = EncodingAttempt::new(quality, data);
    log::debug!("quality {} -> {} bytes", quality, attempt.size_bytes);
    Ok(attempt)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::encode::EncodeError;
    use proptest::prelude::*;

    fn linear(kb_per_quality: f64) -> impl Fn(&SourceImage, f32) -> Result<Vec<u8>, EncodeError> {
        move |_: &SourceImage, q: f32| {
            Ok(vec![0u8; (kb_per_quality * f64::from(q) * 1024.0).round() as usize])
        }
    }

    fn config_strategy() -> impl Strategy<Value = SearchConfig> {
        (0.0f32..=1.0, 0.0f32..=1.0, 0.01f32..=0.3).prop_map(|(a, b, step)| SearchConfig {
            start_quality: a.max(b),
            min_quality: a.min(b),
            step,
        })
    }

    proptest! {
        /// Every search makes at least one attempt and stays in range.
        #[test]
        fn prop_result_within_progression(
            config in config_strategy(),
            kb_per_quality in 1.0f64..=500.0,
            target_kb in 1u32..=300,
        ) {
            let image = SourceImage::new(8, 8, vec![0u8; 8 * 8 * 3]);
            let result = search(
                &image,
                &TargetSpec::from_kb(target_kb),
                &config,
                &linear(kb_per_quality),
            ).unwrap();

            prop_assert!(result.attempts_tried >= 1);
            prop_assert!(result.attempts_tried <= config.max_attempts());
            prop_assert_eq!(result.attempts_tried as usize, result.trace.len());
            prop_assert!(result.final_quality >= config.min_quality);
            prop_assert!(result.final_quality <= config.start_quality);

            let progression: Vec<f32> = config.qualities().collect();
            prop_assert!(progression.contains(&result.final_quality));
            for (record, expected) in result.trace.iter().zip(progression.iter()) {
                prop_assert_eq!(record.quality, *expected);
            }
        }

        /// `met_target` is exactly the size comparison, and a miss means the floor was tried.
        #[test]
        fn prop_met_target_matches_size(
            config in config_strategy(),
            kb_per_quality in 1.0f64..=500.0,
            target_kb in 1u32..=300,
        ) {
            let image = SourceImage::new(8, 8, vec![0u8; 8 * 8 * 3]);
            let target = TargetSpec::from_kb(target_kb);
            let result = search(&image, &target, &config, &linear(kb_per_quality)).unwrap();

            prop_assert_eq!(result.met_target, result.size_bytes() <= target.target_bytes);
            if !result.met_target {
                prop_assert_eq!(result.final_quality, config.min_quality);
            }
            // all earlier attempts missed the target
            for record in &result.trace[..result.trace.len() - 1] {
                prop_assert!(record.size_bytes > target.target_bytes);
            }
        }
    }
}
