/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Canny low threshold, on the 8-bit intensity scale.
pub const CANNY_LOW_THRESHOLD: f32 = 10.0;

/// Canny high threshold, on the 8-bit intensity scale.
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

/// Dilate/erode passes applied to the raw edge map to close small gaps.
pub const EDGE_CLOSE_ITERATIONS: usize = 1;

/// Dilation passes applied to the filled foreground mask before blurring.
pub const MASK_DILATE_ITERATIONS: usize = 10;

/// Erosion passes applied to the filled foreground mask before blurring.
pub const MASK_ERODE_ITERATIONS: usize = 10;

/// Gaussian kernel size (taps) for foreground mask smoothing.
pub const MASK_BLUR_KERNEL_SIZE: usize = 21;

/// Background fill blended behind the segmented foreground: pure blue,
/// as (R, G, B) in normalized [0, 1] space.
pub const BACKGROUND_FILL: [f32; 3] = [0.0, 0.0, 1.0];

/// Width of the cropped face image, and of every downstream face raster.
pub const FACE_WIDTH: usize = 70;

/// Height of the cropped face image, and of every downstream face raster.
pub const FACE_HEIGHT: usize = 90;

/// Percentage of the output height the detected face should occupy.
pub const DEFAULT_FACE_PERCENT: f32 = 90.0;

/// Vertical compression factor of the oval vignette. The mask is an
/// ellipse rather than a circle; changing this breaks visual parity.
pub const OVAL_VERTICAL_COMPRESSION: f32 = 1.3;

/// Number of background frames (and face positions) per template.
pub const FRAME_COUNT: usize = 6;

/// Face placement offset (x, y) per frame index, shared by all built-in
/// templates.
pub const FACE_POSITIONS: [(i64, i64); FRAME_COUNT] =
    [(18, 5), (16, 15), (23, 25), (35, 15), (34, 5), (25, 0)];

/// Per-frame display duration of the assembled animation, in milliseconds.
pub const FRAME_DELAY_MS: u32 = 60;

/// Minimum frame count for animation assembly; a single-frame animation
/// is degenerate.
pub const MIN_ANIMATION_FRAMES: usize = 2;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Minimum face size (pixels) for the SeetaFace detector.
pub const DETECT_MIN_FACE_SIZE: u32 = 20;

/// Score threshold for the SeetaFace detector.
pub const DETECT_SCORE_THRESHOLD: f64 = 2.0;

/// Pyramid scale factor for the SeetaFace detector.
pub const DETECT_PYRAMID_SCALE: f32 = 0.8;

/// Sliding window step (x, y) for the SeetaFace detector.
pub const DETECT_WINDOW_STEP: (u32, u32) = (4, 4);
