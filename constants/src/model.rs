/// Root of the Khronos sample model repository the followers load from
pub const MODEL_BASE_URL: &str =
    "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/";

/// Sample model loaded by every follower instance
pub const MODEL_NAME: &str = "Avocado";

/// Largest bounding-box dimension a loaded model is scaled to
pub const MODEL_DIMENSION: f32 = 1.0;
