// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the snackbar stack and the demo page.

## Organization

- **Palette**: Base colors and the per-kind snackbar colors
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snackbar::ui::design_tokens::{palette, spacing};

let background = palette::light::ERROR_BACKGROUND;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

/// Builds a color from 8-bit channels.
const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{rgb8, Color};

    // Grayscale
    pub const GRAY_900: Color = rgb8(0x22, 0x22, 0x22);
    pub const GRAY_800: Color = rgb8(0x33, 0x33, 0x33);
    pub const GRAY_200: Color = rgb8(0xdd, 0xdd, 0xdd);
    pub const GRAY_100: Color = rgb8(0xf1, 0xf1, 0xf1);

    /// Snackbar colors on a light page.
    pub mod light {
        use super::{rgb8, Color};

        pub const ERROR_BACKGROUND: Color = rgb8(0xff, 0xe1, 0xe2);
        pub const ERROR_TEXT: Color = rgb8(0x6c, 0x2a, 0x2a);
        pub const ERROR_HOVER: Color = rgb8(0xed, 0xad, 0xaf);

        pub const INFO_BACKGROUND: Color = rgb8(0xf6, 0xf8, 0xff);
        pub const INFO_TEXT: Color = rgb8(0x4e, 0x58, 0x66);
        pub const INFO_HOVER: Color = rgb8(0xc6, 0xc7, 0xcb);

        pub const SUCCESS_BACKGROUND: Color = rgb8(0xf1, 0xff, 0xea);
        pub const SUCCESS_TEXT: Color = rgb8(0x3b, 0x5e, 0x3d);
        pub const SUCCESS_HOVER: Color = rgb8(0xe1, 0xee, 0xdb);

        pub const ACTION_BACKGROUND: Color = rgb8(0xff, 0xb7, 0xb7);
    }

    /// Snackbar colors on a dark page.
    pub mod dark {
        use super::{rgb8, Color};

        pub const ERROR_BACKGROUND: Color = rgb8(0x5e, 0x2c, 0x2c);
        pub const ERROR_TEXT: Color = rgb8(0xf8, 0xdc, 0xda);
        pub const ERROR_HOVER: Color = rgb8(0x4d, 0x24, 0x24);

        pub const INFO_BACKGROUND: Color = rgb8(0x4b, 0x62, 0x72);
        pub const INFO_TEXT: Color = rgb8(0xd1, 0xd1, 0xd1);
        pub const INFO_HOVER: Color = rgb8(0x39, 0x4a, 0x56);

        pub const SUCCESS_BACKGROUND: Color = rgb8(0x3a, 0x59, 0x47);
        pub const SUCCESS_TEXT: Color = rgb8(0xd4, 0xde, 0xd4);
        pub const SUCCESS_HOVER: Color = rgb8(0x2e, 0x47, 0x38);

        pub const ACTION_BACKGROUND: Color = rgb8(0x5c, 0x28, 0x28);
    }
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Full width of an unscaled snackbar.
    pub const SNACKBAR_WIDTH: f32 = 400.0;
    /// Height of an unscaled snackbar with a single line of text.
    pub const SNACKBAR_MIN_HEIGHT: f32 = 60.0;

    /// Distance from the top of the window to the topmost snackbar.
    pub const STACK_TOP: f32 = 50.0;

    pub const DEMO_BUTTON_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Demo page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Demo buttons
    pub const BODY_LG: f32 = 16.0;

    /// Snackbar label
    pub const BODY: f32 = 14.0;

    /// Snackbar message, close glyph
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 5.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft drop shadow under each snackbar.
    pub const SNACKBAR: Shadow = Shadow {
        color: Color {
            r: 24.0 / 255.0,
            g: 24.0 / 255.0,
            b: 24.0 / 255.0,
            a: 0.2,
        },
        offset: Vector { x: 1.0, y: 2.0 },
        blur_radius: 3.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::BODY > typography::CAPTION);

    // A card must fit its padding
    assert!(sizing::SNACKBAR_MIN_HEIGHT > 2.0 * spacing::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_maps_channels_to_unit_range() {
        let color = rgb8(0xff, 0x00, 0x80);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn hover_differs_from_background_for_every_kind() {
        assert_ne!(palette::light::ERROR_BACKGROUND, palette::light::ERROR_HOVER);
        assert_ne!(palette::light::INFO_BACKGROUND, palette::light::INFO_HOVER);
        assert_ne!(palette::light::SUCCESS_BACKGROUND, palette::light::SUCCESS_HOVER);
        assert_ne!(palette::dark::ERROR_BACKGROUND, palette::dark::ERROR_HOVER);
        assert_ne!(palette::dark::INFO_BACKGROUND, palette::dark::INFO_HOVER);
        assert_ne!(palette::dark::SUCCESS_BACKGROUND, palette::dark::SUCCESS_HOVER);
    }
}
