/// Generates a uniform image with the given intensity.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a vertical step edge: `dark` for `x < split`, `bright` after.
pub fn vertical_step_u8(width: usize, height: usize, split: usize, dark: u8, bright: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split <= width, "split column must lie inside the image");

    let mut img = vec![dark; width * height];
    for row in img.chunks_mut(width) {
        for v in &mut row[split..] {
            *v = bright;
        }
    }
    img
}

/// Generates a high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let dark = (x / cell + y / cell) % 2 == 0;
            img.push(if dark { 32 } else { 220 });
        }
    }
    img
}
