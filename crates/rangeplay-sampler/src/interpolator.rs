//! Four-point Catmull-Rom interpolation for fractional playback ratios.

/// Catmull-Rom interpolator reading directly from a source channel.
///
/// The read head is a whole source index plus the fraction kept here. Each
/// output takes the four samples around the head, `index - 1` through
/// `index + 2`, treating anything outside the channel as silence. There is no
/// latency: at a whole-sample position the output is the sample under the
/// head, so a ratio of exactly 1.0 copies input bit for bit and the ratio can
/// change between blocks without skipping or repeating samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatmullRom {
    /// Fractional part of the read head, in `[0, 1)`.
    frac: f64,
}

impl CatmullRom {
    /// Create an interpolator aligned to a whole sample.
    pub const fn new() -> Self {
        Self { frac: 0.0 }
    }

    /// Realign the read head to a whole sample.
    pub fn reset(&mut self) {
        self.frac = 0.0;
    }

    /// Fractional part of the read head carried into the next block.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.frac
    }

    #[inline]
    fn tap(input: &[f32], index: usize, offset: isize) -> f32 {
        index
            .checked_add_signed(offset)
            .and_then(|i| input.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    #[inline]
    fn value_at(input: &[f32], index: usize, t: f32) -> f32 {
        let p0 = Self::tap(input, index, -1);
        let p1 = Self::tap(input, index, 0);
        let p2 = Self::tap(input, index, 1);
        let p3 = Self::tap(input, index, 2);

        let c0 = p1;
        let c1 = 0.5 * (p2 - p0);
        let c2 = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
        let c3 = 0.5 * (p3 - p0) + 1.5 * (p1 - p2);
        ((c3 * t + c2) * t + c1) * t + c0
    }

    /// Fill `output` reading `input` from index `start` at `ratio` input
    /// samples per output sample.
    ///
    /// Samples before index 0 or past the end of `input` read as silence.
    /// Returns how many whole samples the read head advanced.
    #[allow(clippy::float_cmp)]
    pub fn process(&mut self, ratio: f64, input: &[f32], start: usize, output: &mut [f32]) -> usize {
        if ratio == 1.0 && self.frac == 0.0 {
            let available = input.get(start..).unwrap_or(&[]);
            let count = output.len().min(available.len());
            output[..count].copy_from_slice(&available[..count]);
            output[count..].fill(0.0);
            return output.len();
        }

        let mut index = start;
        let mut frac = self.frac;
        for out in output.iter_mut() {
            *out = Self::value_at(input, index, frac as f32);
            frac += ratio;
            let whole = frac.floor();
            index = index.saturating_add(whole as usize);
            frac -= whole;
        }

        self.frac = frac;
        index - start
    }
}
