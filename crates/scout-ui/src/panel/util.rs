use raylib::prelude::Color;

pub fn blend_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    let mix = |x: u8, y: u8| ((x as f32) * inv + (y as f32) * t).round() as u8;
    Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    Color::new(color.r, color.g, color.b, (255.0 * opacity).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color::new(0, 0, 0, 255);
        let b = Color::new(200, 100, 50, 255);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
        assert_eq!(blend_color(a, b, 0.5), Color::new(100, 50, 25, 255));
    }

    #[test]
    fn opacity_is_clamped() {
        let c = Color::new(10, 20, 30, 255);
        assert_eq!(with_opacity(c, 2.0).a, 255);
        assert_eq!(with_opacity(c, 0.0).a, 0);
        assert_eq!(with_opacity(c, 0.5).a, 128);
    }
}
