use serde::Serialize;
use strum::{Display, EnumIter};

pub const HUE_RED: f32 = 0.0;
pub const HUE_BLUE: f32 = 240.0;
pub const HUE_GREEN: f32 = 120.0;
pub const HUE_YELLOW: f32 = 60.0;

const OVERLAY_ALPHA: u8 = 50;

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Tier {
    /// Every upper bound belongs to the lower tier. NaN fails all of them.
    pub fn of(radius: f64) -> Tier {
        if radius <= 100.0 {
            Tier::Red
        } else if radius <= 200.0 {
            Tier::Blue
        } else if radius <= 300.0 {
            Tier::Green
        } else {
            Tier::Yellow
        }
    }

    pub fn marker_hue(&self) -> f32 {
        match self {
            Tier::Red => HUE_RED,
            Tier::Blue => HUE_BLUE,
            Tier::Green => HUE_GREEN,
            Tier::Yellow => HUE_YELLOW,
        }
    }

    pub fn overlay_color(&self) -> Rgba {
        match self {
            Tier::Red => Rgba::new(255, 0, 0, OVERLAY_ALPHA),
            Tier::Blue => Rgba::new(0, 0, 255, OVERLAY_ALPHA),
            Tier::Green => Rgba::new(0, 255, 0, OVERLAY_ALPHA),
            Tier::Yellow => Rgba::new(255, 255, 0, OVERLAY_ALPHA),
        }
    }
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Fully saturated, fully bright color for a hue in degrees.
    pub fn from_hue(hue: f32) -> Rgba {
        let hue = hue.rem_euclid(360.0) / 60.0;
        let x = 1.0 - (hue % 2.0 - 1.0).abs();
        let (r, g, b) = match hue as u8 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let channel = |v: f32| (v * 255.0).round() as u8;
        Rgba::new(channel(r), channel(g), channel(b), 255)
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct DisplayStyle {
    pub tier: Tier,
    pub marker_hue: f32,
    pub fill_color: Rgba,
    pub stroke_color: Rgba,
}

impl DisplayStyle {
    pub fn of(radius: f64) -> DisplayStyle {
        DisplayStyle::from(Tier::of(radius))
    }
}

impl From<Tier> for DisplayStyle {
    fn from(tier: Tier) -> Self {
        DisplayStyle {
            tier,
            marker_hue: tier.marker_hue(),
            fill_color: tier.overlay_color(),
            stroke_color: tier.overlay_color(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayStyle, Rgba, Tier};
    use strum::IntoEnumIterator;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::Red, Tier::of(0.0));
        assert_eq!(Tier::Red, Tier::of(50.0));
        assert_eq!(Tier::Red, Tier::of(100.0));
        assert_eq!(Tier::Blue, Tier::of(100.0001));
        assert_eq!(Tier::Blue, Tier::of(200.0));
        assert_eq!(Tier::Green, Tier::of(200.0001));
        assert_eq!(Tier::Green, Tier::of(300.0));
        assert_eq!(Tier::Yellow, Tier::of(300.0001));
        assert_eq!(Tier::Yellow, Tier::of(10_000.0));
    }

    #[test]
    fn tier_of_nan() {
        assert_eq!(Tier::Yellow, Tier::of(f64::NAN));
    }

    #[test]
    fn stroke_matches_fill() {
        for tier in Tier::iter() {
            let style = DisplayStyle::from(tier);
            assert_eq!(style.fill_color, style.stroke_color);
            assert_eq!(50, style.fill_color.a);
        }
    }

    #[test]
    fn style_of_radius() {
        let style = DisplayStyle::of(250.0);
        assert_eq!(Tier::Green, style.tier);
        assert_eq!(120.0, style.marker_hue);
        assert_eq!(Rgba::new(0, 255, 0, 50), style.fill_color);
        let style = DisplayStyle::of(301.0);
        assert_eq!(Rgba::new(255, 255, 0, 50), style.fill_color);
        assert_eq!(60.0, style.marker_hue);
    }

    #[test]
    fn tier_display() {
        assert_eq!("RED", Tier::Red.to_string());
        assert_eq!("YELLOW", Tier::Yellow.to_string());
    }

    #[test]
    fn from_hue() {
        assert_eq!(Rgba::new(255, 0, 0, 255), Rgba::from_hue(0.0));
        assert_eq!(Rgba::new(255, 255, 0, 255), Rgba::from_hue(60.0));
        assert_eq!(Rgba::new(0, 255, 0, 255), Rgba::from_hue(120.0));
        assert_eq!(Rgba::new(0, 0, 255, 255), Rgba::from_hue(240.0));
        assert_eq!(Rgba::new(255, 0, 0, 255), Rgba::from_hue(360.0));
    }

    #[test]
    fn hex() {
        assert_eq!("#FF000032", Tier::Red.overlay_color().hex());
    }
}
