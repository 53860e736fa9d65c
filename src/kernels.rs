//! 3x3 convolution kernels for the image-effects sketch.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    Normal,
    GaussianBlur,
    Unsharpen,
    Emboss,
}

impl Kernel {
    pub fn weights(self) -> [f32; 9] {
        match self {
            Kernel::Normal => [
                0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0,
            ],
            Kernel::GaussianBlur => [
                0.045, 0.122, 0.045, //
                0.122, 0.332, 0.122, //
                0.045, 0.122, 0.045,
            ],
            Kernel::Unsharpen => [
                -1.0, -1.0, -1.0, //
                -1.0, 9.0, -1.0, //
                -1.0, -1.0, -1.0,
            ],
            Kernel::Emboss => [
                -2.0, -1.0, 0.0, //
                -1.0, 1.0, 1.0, //
                0.0, 1.0, 2.0,
            ],
        }
    }
}

/// Effects applied, in order, before the final draw to the canvas.
pub const EFFECT_CHAIN: [Kernel; 3] = [Kernel::GaussianBlur, Kernel::Emboss, Kernel::Unsharpen];

/// Offscreen passes for `chain`: each kernel paired with the framebuffer it
/// renders into. Two framebuffers are ping-ponged so a pass always reads the
/// texture the previous one wrote.
pub fn passes(chain: &[Kernel]) -> impl Iterator<Item = (Kernel, usize)> + '_ {
    chain.iter().enumerate().map(|(i, kernel)| (*kernel, i % 2))
}
