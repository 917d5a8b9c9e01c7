/// Largest possible sum of the three channels of an 8-bit RGB pixel.
const MAX_CHANNEL_SUM: u32 = 3 * 255;

/// Characters ordered from the emptiest to the densest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "gradient must contain at least two characters");
        Self { chars }
    }

    /// The ten-step ramp used for track artwork.
    pub fn card() -> Self {
        Self::new(crate::RAMP)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn lightest(&self) -> char {
        self.chars[0]
    }

    pub fn densest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Ramp index for the mean brightness `sum / 3` of a pixel, rounded down.
    ///
    /// `floor(sum / 3 / 255 * (len - 1))` is evaluated in integers so exact
    /// step boundaries never slip to the step below.
    pub fn index_for_channel_sum(&self, sum: u32) -> usize {
        let levels = self.chars.len() - 1;
        let sum = sum.min(MAX_CHANNEL_SUM) as usize;
        sum * levels / MAX_CHANNEL_SUM as usize
    }

    pub fn char_for_rgb(&self, [r, g, b]: [u8; 3]) -> char {
        let sum = u32::from(r) + u32::from(g) + u32::from(b);
        self.char_at(self.index_for_channel_sum(sum))
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::card()
    }
}
