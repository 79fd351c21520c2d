/// True when the unseen part of the list below the viewport is at most
/// `threshold` visible lengths. Content shorter than the viewport counts as
/// reached.
pub fn is_end_reached(offset: f32, content_height: f32, viewport_height: f32, threshold: f32) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let remaining = content_height - (offset + viewport_height);
    remaining <= threshold * viewport_height
}
