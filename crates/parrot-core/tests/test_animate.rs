mod common;

use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use parrot_core::animate::assemble_gif;
use parrot_core::consts::{FRAME_COUNT, FRAME_DELAY_MS};
use parrot_core::error::ParrotError;

use common::solid;

/// Six solid frames in distinct saturated colors, in order.
fn color_frames() -> Vec<parrot_core::raster::Raster> {
    [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
    ]
    .iter()
    .map(|&rgb| solid(20, 20, rgb))
    .collect()
}

#[test]
fn test_gif_has_six_frames_in_order_with_fixed_delay() {
    let bytes = assemble_gif(&color_frames(), FRAME_DELAY_MS).unwrap();

    let decoder = GifDecoder::new(Cursor::new(&bytes)).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), FRAME_COUNT);

    let expected_dominant_channel = [0, 1, 2, 0, 1, 0];
    for (index, frame) in frames.iter().enumerate() {
        let (numer, denom) = frame.delay().numer_denom_ms();
        assert_eq!(numer / denom, FRAME_DELAY_MS);

        let buffer = frame.buffer();
        assert_eq!(buffer.width(), 20);
        assert_eq!(buffer.height(), 20);
        // Frame order survives encoding: the dominant color channel of
        // each decoded frame matches the input sequence (palette
        // quantization allows small deviations, not channel swaps).
        let pixel = buffer.get_pixel(10, 10);
        let channel = expected_dominant_channel[index];
        assert!(
            pixel.0[channel] > 200,
            "frame {index}: expected channel {channel} dominant, got {:?}",
            pixel.0
        );
    }
}

#[test]
fn test_gif_loops_forever() {
    let bytes = assemble_gif(&color_frames(), FRAME_DELAY_MS).unwrap();
    // The Netscape application extension carries the infinite-loop flag.
    let marker = b"NETSCAPE2.0";
    assert!(
        bytes.windows(marker.len()).any(|w| w == marker),
        "loop extension missing"
    );
}

#[test]
fn test_single_frame_is_rejected() {
    let frames = vec![solid(10, 10, [1.0, 1.0, 1.0])];
    let err = assemble_gif(&frames, FRAME_DELAY_MS).unwrap_err();
    assert!(matches!(err, ParrotError::TooFewFrames { count: 1 }));
}

#[test]
fn test_empty_input_is_rejected() {
    let err = assemble_gif(&[], FRAME_DELAY_MS).unwrap_err();
    assert!(matches!(err, ParrotError::TooFewFrames { count: 0 }));
}
