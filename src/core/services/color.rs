// Pastel display colors for new task cards

/// Source of hues in `0..360`.
pub trait HueSource {
    fn next_hue(&mut self) -> u16;
}

impl<F> HueSource for F
where
    F: FnMut() -> u16,
{
    fn next_hue(&mut self) -> u16 {
        self() % 360
    }
}

/// Uniform hues from the browser's `Math.random`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHues;

impl HueSource for BrowserHues {
    fn next_hue(&mut self) -> u16 {
        ((js_sys::Math::random() * 360.0).floor() as u16).min(359)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            saturation: 70,
            lightness: 80,
        }
    }
}

impl ColorScheme {
    pub fn color_for(&self, hues: &mut impl HueSource) -> String {
        let hue = hues.next_hue() % 360;
        format!("hsl({}, {}%, {}%)", hue, self.saturation, self.lightness)
    }
}

pub fn color_for(hues: &mut impl HueSource) -> String {
    ColorScheme::default().color_for(hues)
}
